//! Arena-based document tree.
//!
//! The engine never holds raw references into the page: every node is an
//! index ([`NodeId`]) into the arena owned by [`Document`]. Findings
//! observe nodes through these indices, so annotation reversal and later
//! dereference by the presentation layer cannot dangle.

pub mod loader;

use lure_core::constants::{DEFAULT_FONT_SIZE, OVERLAY_ROOT_ID};
use lure_core::types::collections::{FxHashMap, SmallVec8};
use lure_core::types::NodeId;

use crate::report::Severity;

/// Computed render metrics captured alongside the snapshot.
///
/// A snapshot that carries no measurement for an element loads with zero
/// size; visibility-gated detectors treat that as "not visibly rendered".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderMetrics {
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    /// False when the element is display:none or visibility:hidden.
    pub displayed: bool,
}

impl Default for RenderMetrics {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            font_size: DEFAULT_FONT_SIZE,
            displayed: true,
        }
    }
}

impl RenderMetrics {
    /// Whether the element is displayed with a non-degenerate box.
    pub fn visible(&self) -> bool {
        self.displayed && self.width > 0.0 && self.height > 0.0
    }
}

/// The idempotent annotation marker set on a flagged element.
///
/// First writer wins: once set, later findings on the same element do not
/// replace it. Clearing all markers restores the pre-detection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub severity: Severity,
    pub message: &'static str,
}

/// Element payload: tag, attributes, metrics, and the annotation slot.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercased tag name.
    pub tag: String,
    attrs: FxHashMap<String, String>,
    pub metrics: RenderMetrics,
    marker: Option<Marker>,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: FxHashMap::default(),
            metrics: RenderMetrics::default(),
            marker: None,
        }
    }

    /// Attribute value, if present. Names are matched case-insensitively.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(&name.to_ascii_lowercase())
    }

    /// Whitespace-separated class tokens, lowercased.
    pub fn class_tokens(&self) -> Vec<String> {
        self.attr("class")
            .map(|c| c.split_whitespace().map(|t| t.to_ascii_lowercase()).collect())
            .unwrap_or_default()
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }
}

/// A node in the arena: an element or a text leaf.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub children: SmallVec8<NodeId>,
    pub kind: NodeKind,
}

/// Tags that never carry user-visible text; their text leaves are skipped
/// by every traversal primitive.
const NON_VISIBLE_TAGS: [&str; 6] = ["script", "style", "template", "noscript", "meta", "title"];

pub fn is_non_visible_tag(tag: &str) -> bool {
    NON_VISIBLE_TAGS.contains(&tag)
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The document tree: an arena of nodes with a single root element.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// A document with a bare `<body>` root, for programmatic
    /// construction by tests and embedders.
    pub fn new() -> Self {
        Self::with_root("body")
    }

    /// A document rooted at an element with the given tag.
    pub fn with_root(tag: &str) -> Self {
        let root = Node {
            parent: None,
            children: SmallVec8::new(),
            kind: NodeKind::Element(ElementData::new(tag)),
        };
        Self {
            nodes: vec![root],
            root: NodeId::new(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The `<body>` element, falling back to the root when the snapshot
    /// is rooted directly at a fragment.
    pub fn body(&self) -> NodeId {
        self.elements_where(|el| el.tag == "body")
            .into_iter()
            .next()
            .unwrap_or(self.root)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ---- construction ----

    /// Append a child element and return its id.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: SmallVec8::new(),
            kind: NodeKind::Element(ElementData::new(tag)),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Append a text leaf and return its id.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: SmallVec8::new(),
            kind: NodeKind::Text(text.to_string()),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Set an attribute on an element. No-op on text nodes.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let NodeKind::Element(el) = &mut self.nodes[id.index()].kind {
            el.attrs
                .insert(name.to_ascii_lowercase(), value.to_string());
        }
    }

    /// Set render metrics on an element. No-op on text nodes.
    pub fn set_metrics(&mut self, id: NodeId, metrics: RenderMetrics) {
        if let NodeKind::Element(el) = &mut self.nodes[id.index()].kind {
            el.metrics = metrics;
        }
    }

    // ---- queries ----

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Element payload, or None for text nodes.
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.nodes[id.index()].kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }

    /// Raw text of a text leaf, or None for elements.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.index()].kind {
            NodeKind::Text(t) => Some(t.as_str()),
            NodeKind::Element(_) => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Walk from a node's parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: self.parent(id),
        }
    }

    /// All descendants of a node in document (preorder) order, not
    /// including the node itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).iter().rev().copied());
        }
        out
    }

    /// Text leaves under a node in document order, including leaves of
    /// the node itself.
    pub fn text_leaves(&self, root: NodeId) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&n| matches!(self.nodes[n.index()].kind, NodeKind::Text(_)))
            .collect()
    }

    /// Whitespace-normalized visible text of a subtree. Text under
    /// non-visible markup is excluded.
    pub fn normalized_text(&self, root: NodeId) -> String {
        let mut parts = Vec::new();
        for leaf in self.text_leaves(root) {
            if let Some(parent) = self.parent(leaf) {
                if let Some(el) = self.element(parent) {
                    if is_non_visible_tag(&el.tag) {
                        continue;
                    }
                }
            }
            if let Some(t) = self.text(leaf) {
                if !t.trim().is_empty() {
                    parts.push(normalize_whitespace(t));
                }
            }
        }
        parts.join(" ")
    }

    /// All elements satisfying the predicate, in document order.
    pub fn elements_where<F>(&self, mut pred: F) -> Vec<NodeId>
    where
        F: FnMut(&ElementData) -> bool,
    {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(n) = stack.pop() {
            if let Some(el) = self.element(n) {
                if pred(el) {
                    out.push(n);
                }
            }
            stack.extend(self.children(n).iter().rev().copied());
        }
        out
    }

    /// Nearest element (self first, then ancestors) matching the
    /// predicate.
    pub fn closest<F>(&self, id: NodeId, mut pred: F) -> Option<NodeId>
    where
        F: FnMut(&ElementData) -> bool,
    {
        if let Some(el) = self.element(id) {
            if pred(el) {
                return Some(id);
            }
        }
        self.ancestors(id)
            .find(|&a| self.element(a).is_some_and(|el| pred(el)))
    }

    /// Self-surface exclusion: whether a node lies at or below the
    /// engine's own output surface. Pure predicate, applied by every
    /// traversal primitive and by the finding recorder.
    pub fn in_overlay(&self, id: NodeId) -> bool {
        let is_overlay = |n: NodeId| {
            self.element(n)
                .and_then(|el| el.attr("id"))
                .is_some_and(|v| v == OVERLAY_ROOT_ID)
        };
        is_overlay(id) || self.ancestors(id).any(is_overlay)
    }

    // ---- annotation markers ----

    /// Set the marker on an element if not already set. Returns true when
    /// this call set it, false when the element was already marked or is
    /// not an element.
    pub fn set_marker(&mut self, id: NodeId, marker: Marker) -> bool {
        if let NodeKind::Element(el) = &mut self.nodes[id.index()].kind {
            if el.marker.is_none() {
                el.marker = Some(marker);
                return true;
            }
        }
        false
    }

    pub fn is_marked(&self, id: NodeId) -> bool {
        self.element(id).is_some_and(|el| el.marker.is_some())
    }

    /// Remove every marker in the document, restoring the
    /// pre-detection state. Returns the number of markers cleared.
    pub fn clear_all_markers(&mut self) -> usize {
        let mut cleared = 0;
        for node in &mut self.nodes {
            if let NodeKind::Element(el) = &mut node.kind {
                if el.marker.take().is_some() {
                    cleared += 1;
                }
            }
        }
        cleared
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's ancestors, nearest first.
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.doc.parent(current);
        Some(current)
    }
}
