//! Data models for bills and pipeline configuration.

pub mod bill;
pub mod config;

pub use bill::{BillRecord, RawBill, ReadType};
pub use config::BillscanConfig;
