//! Detector system — 14 independent rules over one document snapshot.
//!
//! Each detector implements the [`Detector`] trait and is registered
//! in [`registry`]. Detectors share the traversal primitives and one
//! mutable session; no detector depends on another's findings, so the
//! final finding set is the same under any invocation order.

pub mod traits;
pub mod registry;
pub mod forms;
pub mod urgency;
pub mod costs;
pub mod subscription;
pub mod media;
pub mod social;
pub mod privacy;

pub use registry::registry;
pub use traits::Detector;
