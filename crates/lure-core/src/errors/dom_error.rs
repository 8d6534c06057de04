//! Document snapshot errors.

use super::error_code::{self, LureErrorCode};

/// Errors that can occur while loading a document snapshot into the arena.
///
/// Malformed render metrics are deliberately not an error: an element
/// whose measurements cannot be parsed loads with zero size and is simply
/// skipped by every visibility-gated detector.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("malformed markup at byte {position}: {reason}")]
    MalformedMarkup { position: u64, reason: String },

    #[error("snapshot has no <body> element")]
    MissingBody,

    #[error("snapshot is empty")]
    EmptySnapshot,

    #[error("unbalanced element nesting: unexpected </{tag}>")]
    UnbalancedClose { tag: String },
}

impl LureErrorCode for DomError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedMarkup { .. } | Self::UnbalancedClose { .. } => {
                error_code::MALFORMED_MARKUP
            }
            _ => error_code::SNAPSHOT_ERROR,
        }
    }
}
