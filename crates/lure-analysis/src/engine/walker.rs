//! Leaf-deduplicating text walker.
//!
//! A naive tree walk re-visits a phrase once per ancestor in the match
//! chain. This walker deduplicates at the leaf-owning element: one
//! phrase yields exactly one callback invocation regardless of nesting
//! depth.

use lure_core::types::collections::FxHashSet;
use lure_core::types::NodeId;

use crate::dom::{is_non_visible_tag, normalize_whitespace, Document};
use crate::patterns::PatternSet;

/// Visit all text leaves under `body` in document order and invoke the
/// callback at most once per distinct parent element whose normalized
/// (trimmed, lowercased) text matches the pattern set.
///
/// Skipped before pattern testing: empty/whitespace leaves, leaves
/// whose parent is non-visible markup, leaves inside the engine's own
/// output surface, and leaves whose parent was already yielded.
pub fn walk_matching_text<F>(doc: &Document, patterns: &PatternSet, mut on_match: F)
where
    F: FnMut(NodeId, &str),
{
    let mut yielded: FxHashSet<NodeId> = FxHashSet::default();

    for leaf in doc.text_leaves(doc.body()) {
        let Some(raw) = doc.text(leaf) else { continue };
        if raw.trim().is_empty() {
            continue;
        }
        let Some(parent) = doc.parent(leaf) else { continue };
        if yielded.contains(&parent) {
            continue;
        }
        match doc.element(parent) {
            Some(el) if !is_non_visible_tag(&el.tag) => {}
            _ => continue,
        }
        if doc.in_overlay(parent) {
            continue;
        }

        let normalized = normalize_whitespace(raw).to_lowercase();
        if patterns.is_match(&normalized) {
            yielded.insert(parent);
            on_match(parent, &normalized);
        }
    }
}
