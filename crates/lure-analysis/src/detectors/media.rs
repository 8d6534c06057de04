//! Surface-level detectors: disguised ads, autoplaying media, and
//! intrusive popups.

use lure_core::constants::{MIN_AD_DIMENSION, MIN_POPUP_HEIGHT};

use crate::dom::{Document, ElementData};
use crate::engine::DetectionSession;
use crate::patterns::tables;
use crate::report::{FindingCategory, Severity};

use super::traits::Detector;

/// Ad-classed elements large enough to see, with no disclosure word in
/// their own text.
pub struct DisguisedAdsDetector;

fn has_ad_marker(el: &ElementData) -> bool {
    el.class_tokens()
        .iter()
        .any(|t| tables::AD_TOKENS.contains(&t.as_str()))
        || el
            .attr("id")
            .is_some_and(|id| tables::AD_TOKENS.contains(&id.to_ascii_lowercase().as_str()))
        || el.has_attr("data-ad")
        || el.has_attr("data-ad-client")
        || el.has_attr("data-sponsored")
}

impl Detector for DisguisedAdsDetector {
    fn id(&self) -> &'static str {
        "disguised-ads"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::DisguisedAds
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        for element in doc.elements_where(has_ad_marker) {
            let metrics = match doc.element(element) {
                Some(el) => el.metrics,
                None => continue,
            };
            if !metrics.displayed
                || metrics.width < MIN_AD_DIMENSION
                || metrics.height < MIN_AD_DIMENSION
            {
                continue;
            }
            let text = doc.normalized_text(element).to_lowercase();
            if !tables::ad_disclosure().is_match(&text) {
                session.record(
                    doc,
                    Some(element),
                    self.category(),
                    Severity::Medium,
                    "Advertisement is not clearly disclosed as such",
                );
            }
        }
    }
}

/// Audio/video that starts on its own. Muted autoplay is a lesser
/// offense.
pub struct AutoplayMediaDetector;

impl Detector for AutoplayMediaDetector {
    fn id(&self) -> &'static str {
        "autoplay-media"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::IntrusiveUx
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        let media = doc.elements_where(|el| {
            matches!(el.tag.as_str(), "audio" | "video") && el.has_attr("autoplay")
        });
        for element in media {
            let muted = doc.element(element).is_some_and(|el| el.has_attr("muted"));
            let severity = if muted { Severity::Low } else { Severity::Medium };
            session.record(
                doc,
                Some(element),
                self.category(),
                severity,
                "Media plays automatically without user action",
            );
        }
    }
}

/// Modal/popup-classed elements that are displayed and tall enough to
/// interrupt the page.
pub struct IntrusivePopupDetector;

fn has_popup_marker(el: &ElementData) -> bool {
    el.class_tokens()
        .iter()
        .any(|t| tables::POPUP_TOKENS.contains(&t.as_str()))
        || el
            .attr("id")
            .is_some_and(|id| tables::POPUP_TOKENS.contains(&id.to_ascii_lowercase().as_str()))
        || el
            .attr("role")
            .is_some_and(|r| r.eq_ignore_ascii_case("dialog"))
}

impl Detector for IntrusivePopupDetector {
    fn id(&self) -> &'static str {
        "intrusive-popup"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::IntrusiveUx
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        for element in doc.elements_where(has_popup_marker) {
            let metrics = match doc.element(element) {
                Some(el) => el.metrics,
                None => continue,
            };
            if metrics.displayed && metrics.height >= MIN_POPUP_HEIGHT {
                session.record(
                    doc,
                    Some(element),
                    self.category(),
                    Severity::Medium,
                    "Intrusive overlay interrupts the page content",
                );
            }
        }
    }
}
