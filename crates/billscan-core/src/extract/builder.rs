//! Bill record assembly: per-field extraction plus layout-artifact cleanup.

use tracing::debug;

use super::rules::RuleSet;
use crate::models::bill::RawBill;

/// Strip a label prefix (if present) and surrounding whitespace.
///
/// Idempotent: applying it to an already-clean value is a no-op.
fn strip_label(value: &str, label: &str) -> String {
    value.strip_prefix(label).unwrap_or(value).trim().to_string()
}

/// Strip a trailing unit word (if present) and surrounding whitespace.
fn strip_unit(value: &str, unit: &str) -> String {
    let trimmed = value.trim();
    trimmed
        .strip_suffix(unit)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Build one [`RawBill`] from rendered document text under one rule set.
///
/// Fields whose pattern has no match come back as `None`; cleanup is only
/// applied to matched values, so missing fields cannot fail it.
pub fn build_bill(text: &str, rules: &RuleSet) -> RawBill {
    let bill = RawBill {
        invoice_no: rules.invoice_no.extract(text),
        service_address: rules
            .service_address
            .extract(text)
            .map(|v| strip_label(&v, "SERVICE ADDRESS:")),
        date: rules.date.extract(text).map(|v| strip_label(&v, "BY:")),
        read_type: rules.read_type.extract(text),
        billing_period: rules
            .billing_period
            .extract(text)
            .map(|v| strip_unit(&v, "Days")),
        energy_used: rules.energy_used.extract(text),
        total_charges: rules
            .total_charges
            .extract(text)
            .map(|v| strip_label(&v, "Total:")),
    };

    let missing = bill.missing_fields();
    if !missing.is_empty() {
        debug!("unmatched fields: {}", missing.join(", "));
    }

    bill
}
