//! Reconciliation and typing of collected bill batches.

mod normalize;
mod reconcile;

pub use normalize::{normalize, parse_charge, parse_energy};
pub use reconcile::{reconcile, Batch, ReconciledBill};

use crate::models::bill::BillRecord;

/// Reconcile per-layout batches and normalize them into the typed table.
pub fn build_table(batches: Vec<Batch>) -> Vec<BillRecord> {
    normalize(reconcile(batches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::LayoutFormat;
    use crate::models::bill::RawBill;
    use pretty_assertions::assert_eq;

    fn raw_bill(date: &str) -> RawBill {
        RawBill {
            date: Some(date.to_string()),
            ..RawBill::default()
        }
    }

    #[test]
    fn test_unified_table_spans_both_layouts() {
        let old = Batch {
            layout: LayoutFormat::Old,
            bills: vec![raw_bill("15-03-23"), raw_bill("14-04-23"), raw_bill("16-05-23")],
        };
        let new = Batch {
            layout: LayoutFormat::New,
            bills: vec![raw_bill("05-Jan-2024"), raw_bill("06-Feb-2024")],
        };

        let table = build_table(vec![old, new]);

        assert_eq!(table.len(), 5);
        assert!(table.iter().all(|r| r.date.is_some()));
        assert_eq!(table[0].year, Some(2023));
        assert_eq!(table[4].month, Some(2));
    }
}
