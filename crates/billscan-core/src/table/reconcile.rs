//! Merging per-layout batches under a single date representation.

use chrono::NaiveDate;
use tracing::warn;

use crate::extract::LayoutFormat;
use crate::models::bill::RawBill;

/// One collected batch with the layout it was extracted under.
#[derive(Debug, Clone)]
pub struct Batch {
    pub layout: LayoutFormat,
    pub bills: Vec<RawBill>,
}

/// A bill whose date string has been resolved against its source layout.
#[derive(Debug, Clone)]
pub struct ReconciledBill {
    pub raw: RawBill,
    pub date: Option<NaiveDate>,
}

/// Merge batches into one ordered sequence with calendar dates.
///
/// Each batch's date strings are parsed with that batch's own encoding before
/// concatenation; relative order within and across batches is preserved as
/// supplied by the caller. A date that fails to parse leaves the row in place
/// with no date.
pub fn reconcile(batches: Vec<Batch>) -> Vec<ReconciledBill> {
    let mut unified = Vec::new();

    for batch in batches {
        let format = batch.layout.date_format();

        for raw in batch.bills {
            let date = raw.date.as_deref().and_then(|s| {
                match NaiveDate::parse_from_str(s.trim(), format) {
                    Ok(d) => Some(d),
                    Err(e) => {
                        warn!(
                            "date {:?} does not match {} layout encoding: {}",
                            s, batch.layout, e
                        );
                        None
                    }
                }
            });

            unified.push(ReconciledBill { raw, date });
        }
    }

    unified
}
