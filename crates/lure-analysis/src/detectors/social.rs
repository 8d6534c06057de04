//! Fabricated-popularity detector.

use crate::dom::Document;
use crate::engine::{walker, DetectionSession};
use crate::patterns::tables;
use crate::report::{FindingCategory, Severity};

use super::traits::Detector;

/// Viewer counts, recent-purchase claims, "trending now", and
/// low-stock claims: popularity signals the reader cannot verify.
pub struct SocialProofDetector;

impl Detector for SocialProofDetector {
    fn id(&self) -> &'static str {
        "social-proof"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::SocialProof
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        walker::walk_matching_text(doc, tables::social_proof(), |element, _| {
            session.record(
                doc,
                Some(element),
                self.category(),
                Severity::Medium,
                "Unverifiable popularity claim pressures the decision",
            );
        });
    }
}
