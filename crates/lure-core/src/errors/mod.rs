//! Error types shared across the Lure engine.

pub mod detect_error;
pub mod dom_error;
pub mod error_code;

pub use detect_error::DetectError;
pub use dom_error::DomError;
pub use error_code::LureErrorCode;
