//! Type coercion of extracted strings into the final table row.

use chrono::Datelike;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

use super::reconcile::ReconciledBill;
use crate::models::bill::{BillRecord, ReadType};

/// Parse a currency-formatted charge ("$1,234.56") into a decimal.
///
/// Currency symbol and thousands separators are stripped first; anything
/// still unparseable is `None`, never zero.
pub fn parse_charge(s: &str) -> Option<Decimal> {
    let cleaned = s.trim().replace(['$', ','], "");
    Decimal::from_str(&cleaned).ok()
}

/// Parse a kWh reading into a decimal.
///
/// Tolerates the backtick sentinel the legacy pipeline appended to readings.
pub fn parse_energy(s: &str) -> Option<Decimal> {
    Decimal::from_str(s.trim().trim_matches('`')).ok()
}

fn parse_invoice_no(s: &str) -> Option<String> {
    // Same sentinel tolerance as energy readings
    let cleaned = s.trim().trim_matches('`');
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Coerce reconciled rows into the typed table.
///
/// Output cardinality equals input cardinality; a failed coercion nulls that
/// column and the row survives with partial data.
pub fn normalize(rows: Vec<ReconciledBill>) -> Vec<BillRecord> {
    rows.into_iter()
        .map(|row| {
            let ReconciledBill { raw, date } = row;

            let total_charges = raw.total_charges.as_deref().and_then(|s| {
                let parsed = parse_charge(s);
                if parsed.is_none() {
                    warn!("unparseable total_charges {:?}", s);
                }
                parsed
            });

            let energy_used = raw.energy_used.as_deref().and_then(|s| {
                let parsed = parse_energy(s);
                if parsed.is_none() {
                    warn!("unparseable energy_used {:?}", s);
                }
                parsed
            });

            BillRecord {
                invoice_no: raw.invoice_no.as_deref().and_then(parse_invoice_no),
                service_address: raw.service_address,
                date,
                read_type: raw.read_type.as_deref().and_then(ReadType::from_str),
                billing_period: raw
                    .billing_period
                    .as_deref()
                    .and_then(|s| s.trim().parse().ok()),
                energy_used,
                total_charges,
                month: date.map(|d| d.month()),
                year: date.map(|d| d.year()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bill::RawBill;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_charge() {
        assert_eq!(parse_charge("$1,234.56"), Decimal::from_str("1234.56").ok());
        assert_eq!(parse_charge("150.00"), Decimal::from_str("150.00").ok());
        assert_eq!(parse_charge("abc"), None);
        assert_eq!(parse_charge(""), None);
    }

    #[test]
    fn test_parse_energy_strips_sentinel() {
        assert_eq!(parse_energy("45.30`"), Decimal::from_str("45.30").ok());
        assert_eq!(parse_energy("88.40"), Decimal::from_str("88.40").ok());
        assert_eq!(parse_energy("`"), None);
    }

    #[test]
    fn test_normalize_full_row() {
        let raw = RawBill {
            invoice_no: Some("12345678901".to_string()),
            service_address: Some("12 Main St".to_string()),
            date: Some("05-Jan-2024".to_string()),
            read_type: Some("Actual".to_string()),
            billing_period: Some("30".to_string()),
            energy_used: Some("88.40".to_string()),
            total_charges: Some("$150.00".to_string()),
        };
        let date = NaiveDate::from_ymd_opt(2024, 1, 5);

        let records = normalize(vec![ReconciledBill { raw, date }]);
        let record = &records[0];

        assert_eq!(record.invoice_no.as_deref(), Some("12345678901"));
        assert_eq!(record.service_address.as_deref(), Some("12 Main St"));
        assert_eq!(record.date, date);
        assert_eq!(record.read_type, Some(ReadType::Actual));
        assert_eq!(record.billing_period, Some(30));
        assert_eq!(record.energy_used, Decimal::from_str("88.40").ok());
        assert_eq!(record.total_charges, Decimal::from_str("150.00").ok());
        assert_eq!(record.month, Some(1));
        assert_eq!(record.year, Some(2024));
    }

    #[test]
    fn test_normalize_keeps_row_on_coercion_failure() {
        let raw = RawBill {
            total_charges: Some("see reverse".to_string()),
            energy_used: Some("n/a".to_string()),
            ..RawBill::default()
        };

        let records = normalize(vec![ReconciledBill { raw, date: None }]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total_charges, None);
        assert_eq!(records[0].energy_used, None);
        assert_eq!(records[0].month, None);
        assert_eq!(records[0].year, None);
    }
}
