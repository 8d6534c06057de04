//! Annotation apply/reverse: the side-effecting half of detection.
//!
//! Findings are decided first (see [`super::session`]); this module
//! applies them to the tree afterwards. Each element is marked at most
//! once, by the first finding that references it. Clearing removes
//! every marker and restores the exact pre-detection state, which is
//! what makes re-invocation (toggling) idempotent.

use crate::dom::{Document, Marker};
use crate::report::Finding;

/// Walk findings in order and set each referenced element's marker.
/// First finding wins; later findings on the same element stay in the
/// list but do not re-mark. Returns the number of markers set.
pub fn apply_annotations(doc: &mut Document, findings: &[Finding]) -> usize {
    let mut applied = 0;
    for finding in findings {
        if let Some(node) = finding.node {
            let marker = Marker {
                severity: finding.severity,
                message: finding.message,
            };
            if doc.set_marker(node, marker) {
                applied += 1;
            }
        }
    }
    tracing::debug!(applied, findings = findings.len(), "annotations applied");
    applied
}

/// Remove every marker. Returns the number cleared.
pub fn clear_annotations(doc: &mut Document) -> usize {
    doc.clear_all_markers()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{FindingCategory, Severity};

    fn make_finding(
        index: usize,
        node: Option<lure_core::types::NodeId>,
        severity: Severity,
        message: &'static str,
    ) -> Finding {
        Finding {
            index,
            category: FindingCategory::HiddenCosts,
            severity,
            node,
            message,
            excerpt: None,
        }
    }

    #[test]
    fn test_first_finding_wins_both_retained() {
        let mut doc = Document::new();
        let p = doc.append_element(doc.root(), "p");
        let findings = vec![
            make_finding(0, Some(p), Severity::High, "first"),
            make_finding(1, Some(p), Severity::Critical, "second"),
        ];

        assert_eq!(apply_annotations(&mut doc, &findings), 1);
        let marker = doc.element(p).unwrap().marker().unwrap();
        assert_eq!(marker.severity, Severity::High);
        assert_eq!(marker.message, "first");
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn test_elementless_findings_mark_nothing() {
        let mut doc = Document::new();
        let findings = vec![make_finding(0, None, Severity::Low, "m")];
        assert_eq!(apply_annotations(&mut doc, &findings), 0);
    }

    #[test]
    fn test_apply_then_clear_round_trips() {
        let mut doc = Document::new();
        let a = doc.append_element(doc.root(), "p");
        let b = doc.append_element(doc.root(), "p");
        let findings = vec![
            make_finding(0, Some(a), Severity::High, "m"),
            make_finding(1, Some(b), Severity::Low, "n"),
        ];

        apply_annotations(&mut doc, &findings);
        assert!(doc.is_marked(a) && doc.is_marked(b));
        assert_eq!(clear_annotations(&mut doc), 2);
        assert!(!doc.is_marked(a) && !doc.is_marked(b));
    }
}
