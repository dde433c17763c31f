//! Bill data models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bill as extracted from a single document, before any typing.
///
/// Every field is `Option<String>`: `None` means the layout pattern had no
/// match in the rendered text. A missing field never aborts extraction of the
/// rest of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBill {
    /// Invoice identifier (digits, usually 10+).
    pub invoice_no: Option<String>,

    /// Service address with the layout label stripped.
    pub service_address: Option<String>,

    /// Raw date string in the layout's own encoding.
    pub date: Option<String>,

    /// Meter-read type ("Actual" or "Estimated").
    pub read_type: Option<String>,

    /// Number of days covered, unit text stripped.
    pub billing_period: Option<String>,

    /// kWh consumption as printed on the bill.
    pub energy_used: Option<String>,

    /// Total amount charged, label stripped (currency symbol kept).
    pub total_charges: Option<String>,
}

impl RawBill {
    /// Names of fields the extractor could not locate.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.invoice_no.is_none() {
            missing.push("invoice_no");
        }
        if self.service_address.is_none() {
            missing.push("service_address");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.read_type.is_none() {
            missing.push("read_type");
        }
        if self.billing_period.is_none() {
            missing.push("billing_period");
        }
        if self.energy_used.is_none() {
            missing.push("energy_used");
        }
        if self.total_charges.is_none() {
            missing.push("total_charges");
        }
        missing
    }
}

/// Meter-read type of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadType {
    /// Meter was physically read.
    Actual,
    /// Consumption was estimated by the utility.
    Estimated,
}

impl ReadType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Actual" => Some(Self::Actual),
            "Estimated" => Some(Self::Estimated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actual => "Actual",
            Self::Estimated => "Estimated",
        }
    }
}

impl std::fmt::Display for ReadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the unified, typed bill table.
///
/// Coercion failures surface as `None`, never as a silent zero. A row with a
/// `None` date also has `None` month/year but is kept in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillRecord {
    pub invoice_no: Option<String>,
    pub service_address: Option<String>,
    pub date: Option<NaiveDate>,
    pub read_type: Option<ReadType>,
    pub billing_period: Option<u32>,
    pub energy_used: Option<Decimal>,
    pub total_charges: Option<Decimal>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_on_default() {
        let bill = RawBill::default();
        assert_eq!(bill.missing_fields().len(), 7);
    }

    #[test]
    fn test_read_type_round_trip() {
        assert_eq!(ReadType::from_str("Actual"), Some(ReadType::Actual));
        assert_eq!(ReadType::from_str(" Estimated "), Some(ReadType::Estimated));
        assert_eq!(ReadType::from_str("actual"), None);
        assert_eq!(ReadType::Estimated.to_string(), "Estimated");
    }
}
