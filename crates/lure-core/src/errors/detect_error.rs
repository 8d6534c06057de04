//! Detection run errors.

use super::error_code::{self, LureErrorCode};

/// Errors surfaced by the detection engine and reporters.
///
/// The run itself is best-effort: a detector that cannot evaluate a
/// candidate skips it silently. These variants cover the cases where the
/// engine cannot produce a report at all.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("pattern table failed to compile: {0}")]
    PatternCompile(String),

    #[error("detector {detector} panicked: {reason}")]
    DetectorPanicked { detector: String, reason: String },

    #[error("report serialization failed: {0}")]
    ReportSerialization(String),
}

impl LureErrorCode for DetectError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PatternCompile(_) => error_code::PATTERN_ERROR,
            Self::DetectorPanicked { .. } => error_code::DETECTION_ERROR,
            Self::ReportSerialization(_) => error_code::REPORT_ERROR,
        }
    }
}
