//! Report types: severity model, risk tiers, findings, and aggregation.

mod types;

pub use types::{CategoryGroup, Finding, FindingCategory, Report, RiskTier, Severity};
