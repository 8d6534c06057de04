//! Subscription-flow detectors: confirm-shaming, roach motel, and
//! misleading re-subscribe controls.

use crate::dom::{Document, ElementData};
use crate::engine::DetectionSession;
use crate::patterns::tables;
use crate::report::{FindingCategory, Severity};

use super::traits::Detector;

/// Decline options worded to guilt-trip the user.
pub struct ConfirmShamingDetector;

impl Detector for ConfirmShamingDetector {
    fn id(&self) -> &'static str {
        "confirm-shaming"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::ConfirmShaming
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        let interactive =
            doc.elements_where(|el| matches!(el.tag.as_str(), "a" | "button" | "label"));
        for element in interactive {
            let text = doc.normalized_text(element).to_lowercase();
            if tables::confirm_shaming().is_match(&text) {
                session.record(
                    doc,
                    Some(element),
                    self.category(),
                    Severity::High,
                    "Decline option uses guilt-tripping language",
                );
            }
        }
    }
}

/// Easy sign-up with no visible way out: a subscription call to action
/// whose enclosing section never mentions how to cancel.
pub struct RoachMotelDetector;

fn is_section_like(el: &ElementData) -> bool {
    tables::SECTION_TAGS.contains(&el.tag.as_str())
}

impl Detector for RoachMotelDetector {
    fn id(&self) -> &'static str {
        "roach-motel"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::RoachMotel
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        let ctas = doc.elements_where(|el| matches!(el.tag.as_str(), "a" | "button"));
        for element in ctas {
            let own_text = doc.normalized_text(element).to_lowercase();
            if !tables::subscription_cta().is_match(&own_text) {
                continue;
            }
            let scope = doc
                .closest(element, is_section_like)
                .unwrap_or_else(|| doc.body());
            let scope_text = doc.normalized_text(scope).to_lowercase();
            if !tables::cancellation_ease().is_match(&scope_text) {
                session.record(
                    doc,
                    Some(element),
                    self.category(),
                    Severity::Medium,
                    "Sign-up is easy but the surrounding flow never says how to cancel",
                );
            }
        }
    }
}

/// Cancellation flows whose affirmative control keeps the subscription.
pub struct MisleadingResubscribeDetector;

fn is_resubscribe_candidate(el: &ElementData) -> bool {
    match el.tag.as_str() {
        "button" => true,
        "input" => el
            .attr("type")
            .is_some_and(|t| t.eq_ignore_ascii_case("submit")),
        "a" => el
            .attr("role")
            .is_some_and(|r| r.eq_ignore_ascii_case("button")),
        _ => false,
    }
}

impl Detector for MisleadingResubscribeDetector {
    fn id(&self) -> &'static str {
        "misleading-resubscribe"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::ForcedContinuity
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        for element in doc.elements_where(is_resubscribe_candidate) {
            // Submit inputs carry their caption in `value`, not in text.
            let caption = match doc.element(element) {
                Some(el) if el.tag == "input" => {
                    el.attr("value").unwrap_or_default().to_lowercase()
                }
                _ => doc.normalized_text(element).to_lowercase(),
            };
            if tables::resubscribe().is_match(&caption) {
                session.record(
                    doc,
                    Some(element),
                    self.category(),
                    Severity::High,
                    "Control steers toward staying subscribed",
                );
            }
        }
    }
}
