//! Prompt assembly for the contract drafting model.
//!
//! The prompt is plain text: a title directive, the introductory paragraph,
//! the article list, the contract details, formatting directives, a signature
//! block, and the closing disclaimer. Lines that do not apply to the contract
//! type are left out entirely.

use crate::contract::{ContractRequest, ContractType};

/// Closing sentence every generated contract must end with.
pub const DISCLAIMER: &str =
    "This document is a template and should be reviewed by a legal professional.";

/// Article headings in order. Article 3 is dropped for contracts without
/// payment terms.
pub const ARTICLES: [&str; 9] = [
    "ARTICLE 1: DEFINITIONS",
    "ARTICLE 2: OBLIGATIONS OF THE PARTIES",
    PAYMENT_TERMS_ARTICLE,
    "ARTICLE 4: INDEMNITY",
    "ARTICLE 5: TERMINATION",
    "ARTICLE 6: FORCE MAJEURE",
    "ARTICLE 7: GOVERNING LAW",
    "ARTICLE 8: ENTIRE AGREEMENT",
    "ARTICLE 9: SIGNATURES",
];

pub const PAYMENT_TERMS_ARTICLE: &str = "ARTICLE 3: PAYMENT TERMS";

const SIGNATURE_LINE: &str = "Signature: __________________________";
const DATE_LINE: &str = "Date: __________________________";

/// Build the drafting instruction for a request. Never fails.
pub fn build_prompt(request: &ContractRequest) -> String {
    let contract_type = &request.contract_type;
    let roles = contract_type.roles();
    let title = request.display_title();
    let terms = &request.terms;

    let mut out = String::new();

    // ── Title and introduction ──

    out.push_str(&format!(
        "You are a legal AI that drafts formal contracts. Draft a comprehensive agreement titled: {title}\n\n"
    ));
    out.push_str(
        "Start the document with the following paragraph (left-aligned, not centered):\n\n",
    );
    out.push_str(&format!(
        "\"This {title} ('Agreement') is entered into and made effective as of {date} ('Effective Date'), by and between:\n\n\
         {party_a}, acting as the '{role_a}',\n\
         and\n\
         {party_b}, acting as the '{role_b}'.\n\n\
         The parties hereby agree as follows:\"\n\n",
        date = terms.effective_date,
        party_a = request.party_a,
        party_b = request.party_b,
        role_a = roles.party_a,
        role_b = roles.party_b,
    ));

    // ── Articles ──

    out.push_str("Then continue with structured legal content using these numbered articles:\n\n");
    for heading in article_headings(contract_type) {
        out.push_str(&format!("- {heading}\n"));
    }
    out.push('\n');

    // ── Details ──

    out.push_str("Include the following project/property details:\n");
    for line in detail_lines(request) {
        out.push_str(&format!("- {line}\n"));
    }
    out.push('\n');

    // ── Formatting directives ──

    out.push_str(&format!(
        "Formatting & Content Requirements:\n\
         1. Title must be centered, bold, and styled legally in Times New Roman, 16pt.\n\
         2. Start with the provided introductory paragraph, aligned left.\n\
         3. Use formal legal language throughout the contract.\n\
         4. Numbered articles with headings like \"ARTICLE 1: DEFINITIONS\".\n\
         5. Make all article headings bold, 13pt font, left-aligned.\n\
         6. Use Times New Roman font, 12pt, for body text with tight spacing.\n\
         7. Add a signature section:\n\n\
         {party_a} ({role_a})\n\
         {SIGNATURE_LINE}\n\
         {DATE_LINE}\n\n\
         {party_b} ({role_b})\n\
         {SIGNATURE_LINE}\n\
         {DATE_LINE}\n\n\
         8. End with a legal disclaimer: \u{201c}{DISCLAIMER}\u{201d}\n\
         9. Do not include markdown, page numbers, or version info.\n\
         10. Ensure the entire content is output as plain text ready for Word formatting.\n",
        party_a = request.party_a,
        party_b = request.party_b,
        role_a = roles.party_a,
        role_b = roles.party_b,
    ));

    out.trim().to_string()
}

/// Article headings for a contract type, in order.
pub fn article_headings(contract_type: &ContractType) -> Vec<&'static str> {
    ARTICLES
        .iter()
        .copied()
        .filter(|&h| h != PAYMENT_TERMS_ARTICLE || contract_type.has_payment_terms())
        .collect()
}

fn detail_lines(request: &ContractRequest) -> Vec<String> {
    let contract_type = &request.contract_type;
    let terms = &request.terms;
    let property = contract_type.is_property_transfer();

    let duration = if terms.duration.is_empty() {
        "N/A"
    } else {
        terms.duration.as_str()
    };

    let mut lines = vec![
        format!("Description: {}", terms.description),
        format!("Duration: {duration}"),
    ];
    if property {
        lines.push(format!("Property Location: {}", terms.property_location));
        lines.push(format!("Possession Date: {}", terms.possession_date));
        lines.push(format!("Payment: \u{20b9}{}", terms.price));
    }
    if contract_type.has_payment_schedule() {
        lines.push(format!("Payment Schedule: {}", terms.payment_schedule));
    }
    if property {
        lines.push(format!("Payment Date: {}", terms.payment_date));
        lines.push(format!("Currency: {}", terms.currency));
    }
    lines.push(format!("Governing Law: {}", terms.jurisdiction));
    lines
}
