//! LureErrorCode trait for embedding boundaries.

/// Trait for converting Lure errors to stable error code strings.
/// Every error enum implements this so embedders (overlay panel, CLI
/// wrappers) can branch on a structured code instead of a message.
pub trait LureErrorCode {
    /// Returns the stable error code string (e.g., "SNAPSHOT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the embedding boundary.
pub const SNAPSHOT_ERROR: &str = "SNAPSHOT_ERROR";
pub const MALFORMED_MARKUP: &str = "MALFORMED_MARKUP";
pub const DETECTION_ERROR: &str = "DETECTION_ERROR";
pub const PATTERN_ERROR: &str = "PATTERN_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
