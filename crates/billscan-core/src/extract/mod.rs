//! Field extraction for the two known bill layouts.

mod builder;
mod pattern;
mod rules;

pub use builder::build_bill;
pub use pattern::FieldPattern;
pub use rules::{LayoutFormat, RuleSet};
