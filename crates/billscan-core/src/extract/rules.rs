//! Built-in rule sets for the two known bill layouts.

use lazy_static::lazy_static;

use super::pattern::FieldPattern;

/// Extraction rules for one document layout: one pattern per logical field.
///
/// Patterns are compiled at construction; a malformed pattern fails fast
/// instead of surfacing lazily on the first extraction.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub invoice_no: FieldPattern,
    pub service_address: FieldPattern,
    pub date: FieldPattern,
    pub read_type: FieldPattern,
    pub billing_period: FieldPattern,
    pub energy_used: FieldPattern,
    pub total_charges: FieldPattern,
}

lazy_static! {
    static ref OLD_FORMAT: RuleSet = RuleSet {
        invoice_no: FieldPattern::new(r"\d{10,}").unwrap(),
        service_address: FieldPattern::with_group(r"Service Name / Address:\n(?:.*\n)?(.*)", 1)
            .unwrap(),
        date: FieldPattern::new(r"\b\d{2}-\d{2}-\d{2}\b").unwrap(),
        read_type: FieldPattern::new(r"Actual\b|Estimated").unwrap(),
        billing_period: FieldPattern::with_group(r"No\. of Days\s+(\d+)", 1).unwrap(),
        energy_used: FieldPattern::with_group(r"TOTAL AMOUNT DUE\s+(\d{2,}\.\d+)", 1).unwrap(),
        total_charges: FieldPattern::with_group(r"Current\s+Charges\s+\$([\d,]+\.\d{2})", 1)
            .unwrap(),
    };

    static ref NEW_FORMAT: RuleSet = RuleSet {
        invoice_no: FieldPattern::new(r"\d{10,}").unwrap(),
        service_address: FieldPattern::new(r"SERVICE ADDRESS: .{10,}").unwrap(),
        date: FieldPattern::new(r"BY:\s+\d{2}-[A-Za-z]{3}-\d{4}").unwrap(),
        read_type: FieldPattern::new(r"Actual\b|Estimated").unwrap(),
        billing_period: FieldPattern::with_group(r"(\d+)\s+Days", 1).unwrap(),
        // kWh reading sits a fixed number of lines below the ENERGY table header
        energy_used: FieldPattern::with_group(r"ENERGY[\s\S]*?\n(?:.*\n){8}(\d{2,3}\.\d{2})", 1)
            .unwrap(),
        total_charges: FieldPattern::new(r"Total:\s*\$?[\d,]+\.\d{2}").unwrap(),
    };
}

/// A named document-structure variant.
///
/// Each layout carries its own rule set and raw date encoding; a batch is
/// always processed under exactly one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutFormat {
    /// Historical bill layout (tabular, DD-MM-YY dates).
    Old,
    /// Current bill layout (labeled fields, DD-Mon-YYYY dates).
    New,
}

impl LayoutFormat {
    /// The built-in rule set for this layout.
    pub fn rule_set(&self) -> &'static RuleSet {
        match self {
            Self::Old => &OLD_FORMAT,
            Self::New => &NEW_FORMAT,
        }
    }

    /// chrono format string for this layout's raw date encoding.
    pub fn date_format(&self) -> &'static str {
        match self {
            Self::Old => "%d-%m-%y",
            Self::New => "%d-%b-%Y",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }
}

impl std::fmt::Display for LayoutFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Old => f.write_str("old"),
            Self::New => f.write_str("new"),
        }
    }
}
