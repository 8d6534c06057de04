//! Lure detection engine.
//!
//! Inspects a captured document tree for manipulative interface patterns
//! ("dark patterns") and produces a deduplicated, severity-scored report
//! tied to specific nodes. The run is deterministic, single-threaded, and
//! rule-based: 14 independent detectors share one traversal substrate and
//! one append-only findings collection, then an aggregation pass computes
//! the total score, risk tier, and category grouping.
//!
//! Entry point: [`engine::run_detection`].

pub mod detectors;
pub mod dom;
pub mod engine;
pub mod patterns;
pub mod report;
pub mod reporters;
