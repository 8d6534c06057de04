//! Shared substrate for the Lure dark-pattern detection engine.
//!
//! Everything in this crate is presentation-agnostic: constants, error
//! types with stable error codes, node identifiers, collection re-exports,
//! and tracing initialization. The engine proper lives in `lure-analysis`.

pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
