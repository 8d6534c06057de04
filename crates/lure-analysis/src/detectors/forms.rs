//! Form-consent detectors: pre-checked enrollment and trick questions.

use lure_core::types::NodeId;

use crate::dom::Document;
use crate::engine::DetectionSession;
use crate::patterns::tables;
use crate::report::{FindingCategory, Severity};

use super::traits::Detector;

/// Pre-checked checkbox/radio inputs: consent assumed rather than
/// asked. Critical when the associated label carries subscription,
/// marketing, third-party, or opt-in language; medium otherwise.
pub struct PrecheckedEnrollmentDetector;

impl Detector for PrecheckedEnrollmentDetector {
    fn id(&self) -> &'static str {
        "prechecked-enrollment"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::ForcedContinuity
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        let inputs = doc.elements_where(|el| {
            el.tag == "input"
                && el.has_attr("checked")
                && el
                    .attr("type")
                    .is_some_and(|t| t.eq_ignore_ascii_case("checkbox") || t.eq_ignore_ascii_case("radio"))
        });

        for input in inputs {
            let severity = match associated_label_text(doc, input) {
                Some(text) if tables::subscription_label().is_match(&text.to_lowercase()) => {
                    Severity::Critical
                }
                _ => Severity::Medium,
            };
            session.record(
                doc,
                Some(input),
                self.category(),
                severity,
                "Pre-checked enrollment option assumes consent instead of asking for it",
            );
        }
    }
}

/// Label text for an input, by decreasing specificity: enclosing
/// `<label>`, then `label[for=id]`, then the parent element. None when
/// no context exists; the detector degrades to the default severity.
fn associated_label_text(doc: &Document, input: NodeId) -> Option<String> {
    if let Some(label) = doc.closest(input, |el| el.tag == "label") {
        return Some(doc.normalized_text(label));
    }

    let input_id = doc.element(input)?.attr("id").map(str::to_string);
    if let Some(input_id) = input_id {
        let labelled = doc
            .elements_where(|el| el.tag == "label" && el.attr("for") == Some(input_id.as_str()));
        if let Some(&label) = labelled.first() {
            return Some(doc.normalized_text(label));
        }
    }

    doc.parent(input).map(|p| doc.normalized_text(p))
}

/// Labels phrased as double-negative opt-outs.
pub struct TrickQuestionDetector;

impl Detector for TrickQuestionDetector {
    fn id(&self) -> &'static str {
        "trick-question"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::TrickQuestions
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        for label in doc.elements_where(|el| el.tag == "label") {
            let text = doc.normalized_text(label).to_lowercase();
            if tables::trick_question().is_match(&text) {
                session.record(
                    doc,
                    Some(label),
                    self.category(),
                    Severity::Critical,
                    "Double-negative wording obscures what this choice actually does",
                );
            }
        }
    }
}
