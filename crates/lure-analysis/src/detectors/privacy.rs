//! Privacy-zuckering detector.

use lure_core::constants::SMALL_PRINT_FONT_SIZE;

use crate::dom::Document;
use crate::engine::{walker, DetectionSession};
use crate::patterns::tables;
use crate::report::{FindingCategory, Severity};

use super::traits::Detector;

/// Data-sharing and consent-bundling copy. Burying it in small print
/// raises the severity.
pub struct PrivacyZuckeringDetector;

impl Detector for PrivacyZuckeringDetector {
    fn id(&self) -> &'static str {
        "privacy-zuckering"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::PrivacyZuckering
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        walker::walk_matching_text(doc, tables::privacy(), |element, _| {
            let small_print = doc
                .element(element)
                .is_some_and(|el| el.metrics.font_size < SMALL_PRINT_FONT_SIZE);
            let severity = if small_print { Severity::High } else { Severity::Medium };
            session.record(
                doc,
                Some(element),
                self.category(),
                severity,
                "Broad data-sharing consent is bundled into the flow",
            );
        });
    }
}
