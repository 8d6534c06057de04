//! The detection session: the context object threaded through every
//! detector call. Owns the append-only findings list and the recorder.
//!
//! The decide phase is pure with respect to the document: recording a
//! finding never mutates the tree. Annotation is a separate apply
//! phase (see [`super::annotate`]).

use lure_core::constants::{EXCERPT_ELLIPSIS, EXCERPT_MAX_CHARS};
use lure_core::types::NodeId;

use crate::dom::Document;
use crate::report::{Finding, FindingCategory, Severity};

#[derive(Debug, Default)]
pub struct DetectionSession {
    findings: Vec<Finding>,
}

impl DetectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding. Silent no-op when the node lies inside the
    /// engine's own output surface; this is the canonical place
    /// self-flagging is prevented for all detectors.
    pub fn record(
        &mut self,
        doc: &Document,
        node: Option<NodeId>,
        category: FindingCategory,
        severity: Severity,
        message: &'static str,
    ) {
        if let Some(id) = node {
            if doc.in_overlay(id) {
                tracing::trace!(node = %id, "suppressed finding inside own output surface");
                return;
            }
        }

        let excerpt = node.and_then(|id| excerpt_of(doc, id));
        let index = self.findings.len();
        tracing::debug!(index, category = %category, severity = %severity, "finding recorded");
        self.findings.push(Finding {
            index,
            category,
            severity,
            node,
            message,
            excerpt,
        });
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

/// Whitespace-normalized visible text of the node's subtree, capped at
/// [`EXCERPT_MAX_CHARS`] characters with an ellipsis when truncated.
fn excerpt_of(doc: &Document, id: NodeId) -> Option<String> {
    let text = doc.normalized_text(id);
    if text.is_empty() {
        return None;
    }
    let mut chars = text.char_indices();
    match chars.nth(EXCERPT_MAX_CHARS) {
        Some((byte_end, _)) => {
            let mut capped = text[..byte_end].to_string();
            capped.push_str(EXCERPT_ELLIPSIS);
            Some(capped)
        }
        None => Some(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lure_core::constants::OVERLAY_ROOT_ID;

    #[test]
    fn test_record_appends_with_stable_index() {
        let mut doc = Document::new();
        let p = doc.append_element(doc.root(), "p");
        doc.append_text(p, "some fee");

        let mut session = DetectionSession::new();
        session.record(
            &doc,
            Some(p),
            FindingCategory::HiddenCosts,
            Severity::High,
            "m1",
        );
        session.record(&doc, None, FindingCategory::SocialProof, Severity::Medium, "m2");

        assert_eq!(session.len(), 2);
        assert_eq!(session.findings()[0].index, 0);
        assert_eq!(session.findings()[1].index, 1);
        assert_eq!(session.findings()[0].excerpt.as_deref(), Some("some fee"));
        assert!(session.findings()[1].excerpt.is_none());
    }

    #[test]
    fn test_overlay_node_is_silently_dropped() {
        let mut doc = Document::new();
        let overlay = doc.append_element(doc.root(), "div");
        doc.set_attr(overlay, "id", OVERLAY_ROOT_ID);
        let button = doc.append_element(overlay, "button");
        doc.append_text(button, "subscribe");

        let mut session = DetectionSession::new();
        session.record(
            &doc,
            Some(button),
            FindingCategory::RoachMotel,
            Severity::Medium,
            "m",
        );
        assert!(session.is_empty());
    }

    #[test]
    fn test_excerpt_is_capped_with_ellipsis() {
        let mut doc = Document::new();
        let p = doc.append_element(doc.root(), "p");
        doc.append_text(p, &"hidden fee ".repeat(30));

        let mut session = DetectionSession::new();
        session.record(&doc, Some(p), FindingCategory::HiddenCosts, Severity::High, "m");

        let excerpt = session.findings()[0].excerpt.as_ref().unwrap();
        assert!(excerpt.ends_with(EXCERPT_ELLIPSIS));
        assert_eq!(
            excerpt.chars().count(),
            EXCERPT_MAX_CHARS + EXCERPT_ELLIPSIS.chars().count()
        );
    }

    #[test]
    fn test_recording_does_not_mark_the_document() {
        let mut doc = Document::new();
        let p = doc.append_element(doc.root(), "p");

        let mut session = DetectionSession::new();
        session.record(&doc, Some(p), FindingCategory::HiddenCosts, Severity::High, "m");
        assert!(!doc.is_marked(p));
    }
}
