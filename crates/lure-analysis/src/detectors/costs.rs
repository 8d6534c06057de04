//! Pricing detectors: hidden costs and price anchoring.

use crate::dom::{Document, ElementData};
use crate::engine::{walker, DetectionSession};
use crate::patterns::tables;
use crate::report::{FindingCategory, Severity};

use super::traits::Detector;

/// Fee and surcharge copy that defers the real price to checkout.
pub struct HiddenCostsDetector;

impl Detector for HiddenCostsDetector {
    fn id(&self) -> &'static str {
        "hidden-costs"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::HiddenCosts
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        walker::walk_matching_text(doc, tables::hidden_costs(), |element, _| {
            session.record(
                doc,
                Some(element),
                self.category(),
                Severity::High,
                "Extra costs are disclosed late instead of up front",
            );
        });
    }
}

/// Struck-out reference prices next to the displayed price.
///
/// The content guard (currency symbol or a 2-digit number) is coarse
/// by intent; the narrow candidate set is what keeps it precise.
pub struct PriceAnchoringDetector;

fn is_struck_price(el: &ElementData) -> bool {
    if matches!(el.tag.as_str(), "s" | "strike" | "del") {
        return true;
    }
    if el
        .attr("style")
        .is_some_and(|s| s.to_ascii_lowercase().contains("line-through"))
    {
        return true;
    }
    el.class_tokens().iter().any(|token| {
        token == "mrp"
            || token == "strikethrough"
            || (token.contains("price")
                && tables::PRICE_CLASS_TOKENS.iter().any(|m| token.contains(m)))
    })
}

impl Detector for PriceAnchoringDetector {
    fn id(&self) -> &'static str {
        "price-anchoring"
    }

    fn category(&self) -> FindingCategory {
        FindingCategory::PriceAnchoring
    }

    fn detect(&self, doc: &Document, session: &mut DetectionSession) {
        for element in doc.elements_where(is_struck_price) {
            let visible = doc.element(element).is_some_and(|el| el.metrics.visible());
            if !visible {
                continue;
            }
            let text = doc.normalized_text(element).to_lowercase();
            if tables::price_value().is_match(&text) {
                session.record(
                    doc,
                    Some(element),
                    self.category(),
                    Severity::Low,
                    "Struck-out reference price anchors the displayed price",
                );
            }
        }
    }
}
