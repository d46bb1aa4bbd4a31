//! Command-line form: the fields a user fills in to describe a contract.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use draftlaw_core::{ContractRequest, ContractTerms, ContractType};

#[derive(Debug, Args)]
pub struct RequestArgs {
    /// Read the request from a JSON file instead of flags
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Party A name
    #[arg(long, required_unless_present = "request")]
    pub party_a: Option<String>,

    /// Party B name
    #[arg(long, required_unless_present = "request")]
    pub party_b: Option<String>,

    /// Contract type: "Construction Agreement", "Rental Agreement",
    /// "Service Contract", "Sale Deed", "Gift Deed", "Transfer of Property",
    /// or "Other (Custom)" together with --custom-title
    #[arg(long = "type", value_name = "TYPE", required_unless_present = "request")]
    pub contract_type: Option<String>,

    /// Title for custom contracts (e.g. "Freelance Design Agreement")
    #[arg(long)]
    pub custom_title: Option<String>,

    /// Project or property description
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub duration: String,
    #[arg(long, default_value = "")]
    pub effective_date: String,
    /// Governing law jurisdiction
    #[arg(long, default_value = "")]
    pub jurisdiction: String,

    /// Total payment amount (normal contracts)
    #[arg(long, default_value = "")]
    pub payment_amount: String,
    /// e.g. "milestone-based"
    #[arg(long, default_value = "")]
    pub payment_schedule: String,
    /// Days for final payment after invoice (normal contracts)
    #[arg(long, default_value = "")]
    pub payment_due_days: String,

    /// Property address (sale deeds and transfers)
    #[arg(long, default_value = "")]
    pub property_location: String,
    /// Consideration amount (sale deeds and transfers)
    #[arg(long, default_value = "")]
    pub price: String,
    #[arg(long, default_value = "")]
    pub payment_date: String,
    #[arg(long, default_value = "")]
    pub currency: String,
    #[arg(long, default_value = "")]
    pub payment_method: String,
    #[arg(long, default_value = "")]
    pub possession_date: String,
    #[arg(long, default_value = "")]
    pub termination_notice_days: String,
    #[arg(long, default_value = "")]
    pub dispute_resolution: String,
}

impl RequestArgs {
    /// Build the request, dropping fields the chosen contract type does not use.
    pub fn into_request(mut self) -> anyhow::Result<ContractRequest> {
        let mut request = match self.request.take() {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading request file {}", path.display()))?;
                ContractRequest::from_json(&json)
                    .with_context(|| format!("parsing request file {}", path.display()))?
            }
            None => self.into_flag_request(),
        };
        request.retain_relevant_fields();
        Ok(request)
    }

    fn into_flag_request(self) -> ContractRequest {
        ContractRequest {
            party_a: self.party_a.unwrap_or_default(),
            party_b: self.party_b.unwrap_or_default(),
            contract_type: ContractType::from_tag(self.contract_type.as_deref().unwrap_or("")),
            custom_title: self.custom_title,
            terms: ContractTerms {
                description: self.description,
                duration: self.duration,
                effective_date: self.effective_date,
                jurisdiction: self.jurisdiction,
                payment_amount: self.payment_amount,
                payment_schedule: self.payment_schedule,
                payment_due_days: self.payment_due_days,
                property_location: self.property_location,
                price: self.price,
                payment_date: self.payment_date,
                currency: self.currency,
                payment_method: self.payment_method,
                possession_date: self.possession_date,
                termination_notice_days: self.termination_notice_days,
                dispute_resolution: self.dispute_resolution,
            },
        }
    }
}

/// Echo the key inputs back to the user before generation.
pub fn print_summary(request: &ContractRequest) {
    println!("=== Summary of Inputs ===");
    println!("  {:<16} {}", "Contract Type", request.display_title());
    println!("  {:<16} {}", "Category", request.category().as_str());
    println!("  {:<16} {}", "Party A", request.party_a);
    println!("  {:<16} {}", "Party B", request.party_b);
    println!("  {:<16} {}", "Effective Date", request.terms.effective_date);
    println!("  {:<16} {}", "Jurisdiction", request.terms.jurisdiction);
    println!();
}
