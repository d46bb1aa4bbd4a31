//! Contract request types: categories, type tags, role pairs, and terms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag the form uses when the user supplies their own contract title.
pub const CUSTOM_TAG: &str = "Other (Custom)";

/// Default dispute-resolution clause offered for property transfers.
pub const DEFAULT_DISPUTE_RESOLUTION: &str =
    "Arbitration under Arbitration & Conciliation Act, 1996";

/// Top-level classification of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractCategory {
    /// General commercial agreement.
    Normal,
    /// Property-registration document (deeds and transfers).
    Registration,
}

impl ContractCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal Contract",
            Self::Registration => "Registration Document",
        }
    }
}

/// The two party labels associated with a contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePair {
    pub party_a: &'static str,
    pub party_b: &'static str,
}

/// Labels used for any contract type without a documented role pair.
pub const GENERIC_ROLES: RolePair = RolePair {
    party_a: "Party A",
    party_b: "Party B",
};

/// Contract type tag. Unknown tags are kept verbatim as [`ContractType::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContractType {
    ConstructionAgreement,
    RentalAgreement,
    ServiceContract,
    SaleDeed,
    GiftDeed,
    TransferOfProperty,
    Custom(String),
}

impl ContractType {
    /// Parse a type tag as shown on the form. Never fails.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "Construction Agreement" => Self::ConstructionAgreement,
            "Rental Agreement" => Self::RentalAgreement,
            "Service Contract" => Self::ServiceContract,
            "Sale Deed" => Self::SaleDeed,
            "Gift Deed" => Self::GiftDeed,
            "Transfer of Property" => Self::TransferOfProperty,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::ConstructionAgreement => "Construction Agreement",
            Self::RentalAgreement => "Rental Agreement",
            Self::ServiceContract => "Service Contract",
            Self::SaleDeed => "Sale Deed",
            Self::GiftDeed => "Gift Deed",
            Self::TransferOfProperty => "Transfer of Property",
            Self::Custom(tag) => tag,
        }
    }

    pub fn category(&self) -> ContractCategory {
        match self {
            Self::SaleDeed | Self::GiftDeed | Self::TransferOfProperty => {
                ContractCategory::Registration
            }
            _ => ContractCategory::Normal,
        }
    }

    pub fn roles(&self) -> RolePair {
        roles_for(self.as_str())
    }

    /// Sale deeds and property transfers carry the property/price block.
    pub fn is_property_transfer(&self) -> bool {
        matches!(self, Self::SaleDeed | Self::TransferOfProperty)
    }

    /// Types whose prompt carries a payment-schedule line.
    pub fn has_payment_schedule(&self) -> bool {
        matches!(
            self,
            Self::ConstructionAgreement
                | Self::RentalAgreement
                | Self::ServiceContract
                | Self::SaleDeed
                | Self::TransferOfProperty
        )
    }

    /// Gift deeds transfer without consideration, so there are no payment terms.
    pub fn has_payment_terms(&self) -> bool {
        !matches!(self, Self::GiftDeed)
    }
}

impl From<String> for ContractType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ContractType> for String {
    fn from(value: ContractType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the role pair for a type tag.
///
/// Pure lookup: known tags map to their documented pair, anything else to
/// [`GENERIC_ROLES`].
pub fn roles_for(tag: &str) -> RolePair {
    let (party_a, party_b) = match tag {
        "Construction Agreement" => ("Contractor", "Owner"),
        "Rental Agreement" => ("Landlord", "Tenant"),
        "Service Contract" => ("Service Provider", "Client"),
        "Sale Deed" => ("Seller", "Buyer"),
        "Gift Deed" => ("Donor", "Donee"),
        "Transfer of Property" => ("Transferor", "Transferee"),
        _ => return GENERIC_ROLES,
    };
    RolePair { party_a, party_b }
}

/// Optional terms collected alongside the parties.
///
/// Every field is free text and empty when not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractTerms {
    /// Project or property description.
    pub description: String,
    pub duration: String,
    pub effective_date: String,
    pub jurisdiction: String,
    pub payment_amount: String,
    pub payment_schedule: String,
    pub payment_due_days: String,
    pub property_location: String,
    pub price: String,
    pub payment_date: String,
    pub currency: String,
    pub payment_method: String,
    pub possession_date: String,
    pub termination_notice_days: String,
    pub dispute_resolution: String,
}

/// One user submission describing the contract to draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRequest {
    pub party_a: String,
    pub party_b: String,
    pub contract_type: ContractType,
    /// Title typed in by the user for custom contracts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    #[serde(default)]
    pub terms: ContractTerms,
}

impl ContractRequest {
    pub fn new(
        party_a: impl Into<String>,
        party_b: impl Into<String>,
        contract_type: ContractType,
    ) -> Self {
        Self {
            party_a: party_a.into(),
            party_b: party_b.into(),
            contract_type,
            custom_title: None,
            terms: ContractTerms::default(),
        }
    }

    /// Parse a request from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn category(&self) -> ContractCategory {
        self.contract_type.category()
    }

    /// Title used for the document heading and file name.
    ///
    /// Custom contracts use the user's title when one was given.
    pub fn display_title(&self) -> String {
        if let ContractType::Custom(_) = self.contract_type
            && let Some(title) = self.custom_title.as_deref().map(str::trim)
            && !title.is_empty()
        {
            return title.to_string();
        }
        self.contract_type.as_str().to_string()
    }

    /// Clear terms the active contract type does not collect.
    ///
    /// Common fields (description, duration, effective date, jurisdiction)
    /// are always kept. Property transfers get the default dispute clause
    /// when none was supplied.
    pub fn retain_relevant_fields(&mut self) {
        let terms = &mut self.terms;
        match &self.contract_type {
            t if t.is_property_transfer() => {
                terms.payment_amount.clear();
                terms.payment_due_days.clear();
                if terms.dispute_resolution.trim().is_empty() {
                    terms.dispute_resolution = DEFAULT_DISPUTE_RESOLUTION.to_string();
                }
            }
            ContractType::GiftDeed => {
                let common = ContractTerms {
                    description: std::mem::take(&mut terms.description),
                    duration: std::mem::take(&mut terms.duration),
                    effective_date: std::mem::take(&mut terms.effective_date),
                    jurisdiction: std::mem::take(&mut terms.jurisdiction),
                    ..ContractTerms::default()
                };
                *terms = common;
            }
            _ => {
                terms.property_location.clear();
                terms.price.clear();
                terms.payment_date.clear();
                terms.currency.clear();
                terms.payment_method.clear();
                terms.possession_date.clear();
                terms.termination_notice_days.clear();
                terms.dispute_resolution.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &[(&str, &str, &str)] = &[
        ("Construction Agreement", "Contractor", "Owner"),
        ("Rental Agreement", "Landlord", "Tenant"),
        ("Service Contract", "Service Provider", "Client"),
        ("Sale Deed", "Seller", "Buyer"),
        ("Gift Deed", "Donor", "Donee"),
        ("Transfer of Property", "Transferor", "Transferee"),
    ];

    #[test]
    fn known_tags_resolve_to_documented_roles() {
        for &(tag, a, b) in KNOWN {
            let roles = roles_for(tag);
            assert_eq!((roles.party_a, roles.party_b), (a, b), "tag {tag}");
            assert_eq!(ContractType::from_tag(tag).roles(), roles);
        }
    }

    #[test]
    fn unknown_tags_fall_back_to_generic_roles() {
        assert_eq!(roles_for("Freelance Design Agreement"), GENERIC_ROLES);
        assert_eq!(roles_for(""), GENERIC_ROLES);
        assert_eq!(roles_for("rental agreement"), GENERIC_ROLES);
        assert_eq!(roles_for(CUSTOM_TAG), GENERIC_ROLES);
    }

    #[test]
    fn tags_round_trip_through_as_str() {
        for &(tag, _, _) in KNOWN {
            assert_eq!(ContractType::from_tag(tag).as_str(), tag);
        }
        let custom = ContractType::from_tag("NDA");
        assert_eq!(custom, ContractType::Custom("NDA".into()));
        assert_eq!(custom.to_string(), "NDA");
    }

    #[test]
    fn category_follows_type() {
        assert_eq!(
            ContractType::RentalAgreement.category(),
            ContractCategory::Normal
        );
        assert_eq!(
            ContractType::Custom("NDA".into()).category(),
            ContractCategory::Normal
        );
        assert_eq!(ContractType::GiftDeed.category(), ContractCategory::Registration);
        assert_eq!(
            ContractType::TransferOfProperty.category(),
            ContractCategory::Registration
        );
    }

    #[test]
    fn display_title_prefers_custom_title() {
        let mut req = ContractRequest::new("A", "B", ContractType::from_tag(CUSTOM_TAG));
        req.custom_title = Some("  Freelance Design Agreement ".into());
        assert_eq!(req.display_title(), "Freelance Design Agreement");

        req.custom_title = Some("   ".into());
        assert_eq!(req.display_title(), CUSTOM_TAG);

        let mut rental = ContractRequest::new("A", "B", ContractType::RentalAgreement);
        rental.custom_title = Some("Ignored".into());
        assert_eq!(rental.display_title(), "Rental Agreement");
    }

    #[test]
    fn retain_relevant_fields_for_normal_contract() {
        let mut req = ContractRequest::new("A", "B", ContractType::ServiceContract);
        req.terms.payment_amount = "5000".into();
        req.terms.property_location = "12 High St".into();
        req.terms.currency = "INR".into();
        req.terms.jurisdiction = "Delhi".into();
        req.retain_relevant_fields();
        assert_eq!(req.terms.payment_amount, "5000");
        assert_eq!(req.terms.jurisdiction, "Delhi");
        assert!(req.terms.property_location.is_empty());
        assert!(req.terms.currency.is_empty());
    }

    #[test]
    fn retain_relevant_fields_for_gift_deed() {
        let mut req = ContractRequest::new("A", "B", ContractType::GiftDeed);
        req.terms.payment_schedule = "monthly".into();
        req.terms.price = "100".into();
        req.terms.description = "Family house".into();
        req.terms.effective_date = "1 May 2025".into();
        req.retain_relevant_fields();
        assert!(req.terms.payment_schedule.is_empty());
        assert!(req.terms.price.is_empty());
        assert_eq!(req.terms.description, "Family house");
        assert_eq!(req.terms.effective_date, "1 May 2025");
    }

    #[test]
    fn property_transfer_gets_default_dispute_clause() {
        let mut req = ContractRequest::new("A", "B", ContractType::SaleDeed);
        req.terms.payment_amount = "ignored".into();
        req.retain_relevant_fields();
        assert!(req.terms.payment_amount.is_empty());
        assert_eq!(req.terms.dispute_resolution, DEFAULT_DISPUTE_RESOLUTION);
    }

    #[test]
    fn request_parses_from_json() {
        let json = r#"{
            "party_a": "Asha Rao",
            "party_b": "Vikram Shah",
            "contract_type": "Rental Agreement",
            "terms": { "duration": "11 months", "jurisdiction": "Mumbai" }
        }"#;
        let req = ContractRequest::from_json(json).unwrap();
        assert_eq!(req.contract_type, ContractType::RentalAgreement);
        assert_eq!(req.terms.duration, "11 months");
        assert!(req.terms.price.is_empty());
        assert!(req.custom_title.is_none());
    }

    #[test]
    fn unknown_type_in_json_becomes_custom() {
        let json = r#"{"party_a": "A", "party_b": "B", "contract_type": "Loan Agreement"}"#;
        let req = ContractRequest::from_json(json).unwrap();
        assert_eq!(req.contract_type, ContractType::Custom("Loan Agreement".into()));
        assert_eq!(req.contract_type.roles(), GENERIC_ROLES);
    }
}
