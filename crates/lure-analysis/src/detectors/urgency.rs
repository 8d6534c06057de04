//! Time-pressure detectors: urgency language and countdown timers.

use crate::dom::{Document, ElementData};
use crate::engine::{walker, DetectionSession};
use crate::patterns::tables;
use crate::report::{FindingCategory, Severity};

use super::traits::Detector;

/// Urgency phrases in page copy. Low-stock claims ("only 3 left in
/// stock") belong to the social-proof category and are skipped here,
/// so one claim is never filed twice.
pub struct UrgencyLanguageDetector;

impl Detector for UrgencyLanguageDetector {
    fn id(&self) -> &'static str {
        "urgency-language"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::ScarcityUrgency
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        walker::walk_matching_text(doc, tables::urgency(), |element, text| {
            if tables::low_stock().is_match(text) {
                return;
            }
            session.record(
                doc,
                Some(element),
                self.category(),
                Severity::High,
                "Urgency language pressures a quick decision",
            );
        });
    }
}

/// Timer-classed elements with a real time token in their text.
/// A badge saying just "Hurry!" fails the time-format guard and is
/// left to the urgency detector.
pub struct CountdownTimerDetector;

fn has_timer_marker(el: &ElementData) -> bool {
    let token_hit = |value: &str| {
        let lowered = value.to_ascii_lowercase();
        tables::TIMER_TOKENS.iter().any(|tok| lowered.contains(tok))
    };
    el.class_tokens().iter().any(|t| token_hit(t))
        || el.attr("id").is_some_and(token_hit)
        || el.has_attr("data-countdown")
        || el.has_attr("data-timer")
}

impl Detector for CountdownTimerDetector {
    fn id(&self) -> &'static str {
        "countdown-timer"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::ScarcityUrgency
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        for element in doc.elements_where(has_timer_marker) {
            let metrics = match doc.element(element) {
                Some(el) => el.metrics,
                None => continue,
            };
            if !metrics.displayed || metrics.height <= 0.0 {
                continue;
            }
            let text = doc.normalized_text(element).to_lowercase();
            if tables::clock_or_duration().is_match(&text) {
                session.record(
                    doc,
                    Some(element),
                    self.category(),
                    Severity::High,
                    "Countdown timer manufactures time pressure",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::RenderMetrics;

    fn rendered() -> RenderMetrics {
        RenderMetrics {
            width: 200.0,
            height: 40.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_urgency_phrase_is_flagged_once() {
        let mut doc = Document::new();
        let outer = doc.append_element(doc.root(), "div");
        let inner = doc.append_element(outer, "span");
        doc.append_text(inner, "Limited time offer, act now!");

        let mut session = DetectionSession::new();
        UrgencyLanguageDetector.detect(&doc, &mut session);
        assert_eq!(session.len(), 1);
        assert_eq!(session.findings()[0].node, Some(inner));
        assert_eq!(session.findings()[0].severity, Severity::High);
    }

    #[test]
    fn test_low_stock_claim_is_left_to_social_proof() {
        let mut doc = Document::new();
        let p = doc.append_element(doc.root(), "p");
        doc.append_text(p, "Only 3 left in stock");

        let mut session = DetectionSession::new();
        UrgencyLanguageDetector.detect(&doc, &mut session);
        assert!(session.is_empty());
    }

    #[test]
    fn test_only_n_left_without_stock_is_urgency() {
        let mut doc = Document::new();
        let p = doc.append_element(doc.root(), "p");
        doc.append_text(p, "Only 2 seats left at this price");

        let mut session = DetectionSession::new();
        UrgencyLanguageDetector.detect(&doc, &mut session);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_countdown_with_clock_token() {
        let mut doc = Document::new();
        let timer = doc.append_element(doc.root(), "div");
        doc.set_attr(timer, "class", "sale countdown-badge");
        doc.set_metrics(timer, rendered());
        doc.append_text(timer, "Offer ends in 1:59");

        let mut session = DetectionSession::new();
        CountdownTimerDetector.detect(&doc, &mut session);
        assert_eq!(session.len(), 1);
        assert_eq!(session.findings()[0].category, FindingCategory::ScarcityUrgency);
    }

    #[test]
    fn test_timer_class_without_time_token_is_clean() {
        let mut doc = Document::new();
        let timer = doc.append_element(doc.root(), "div");
        doc.set_attr(timer, "class", "countdown-badge");
        doc.set_metrics(timer, rendered());
        doc.append_text(timer, "Hurry!");

        let mut session = DetectionSession::new();
        CountdownTimerDetector.detect(&doc, &mut session);
        assert!(session.is_empty());
    }

    #[test]
    fn test_zero_height_timer_is_skipped() {
        let mut doc = Document::new();
        let timer = doc.append_element(doc.root(), "div");
        doc.set_attr(timer, "class", "timer");
        doc.append_text(timer, "ends in 10 minutes");

        let mut session = DetectionSession::new();
        CountdownTimerDetector.detect(&doc, &mut session);
        assert!(session.is_empty());
    }
}
