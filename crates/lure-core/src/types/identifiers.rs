//! Arena index types for document tree nodes.
//!
//! A `NodeId` is an index into the owning `Document`'s arena, never a
//! pointer. Findings observe nodes through these indices; the document
//! owns the nodes, so reversal and later dereference cannot dangle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node in a document arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create an id from a raw arena index.
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
