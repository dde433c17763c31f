//! Core library for utility-bill data extraction.
//!
//! This crate provides:
//! - PDF text rendering (embedded-text extraction via pdf-extract)
//! - Regex-based field extraction for the two known bill layouts (old/new)
//! - Batch collection over a directory of bill documents
//! - Reconciliation of per-layout batches into one typed table

pub mod error;
pub mod models;
pub mod pdf;
pub mod extract;
pub mod batch;
pub mod table;

pub use error::{BillscanError, Result};
pub use models::bill::{BillRecord, RawBill, ReadType};
pub use models::config::BillscanConfig;
pub use pdf::{DocumentRenderer, PdfTextRenderer};
pub use extract::{build_bill, FieldPattern, LayoutFormat, RuleSet};
pub use batch::{collect, BatchReport, FileOutcome};
pub use table::{build_table, normalize, reconcile, Batch, ReconciledBill};
