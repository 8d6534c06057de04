//! Shared type definitions.

pub mod collections;
pub mod identifiers;

pub use identifiers::NodeId;
