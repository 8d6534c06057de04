//! Engine orchestration: one synchronous detection run per invocation.
//!
//! A run clears any annotations left by a previous run, invokes the 14
//! detectors in registry order against one shared session, applies the
//! annotations decided by the findings, and aggregates the report. A
//! panicking detector is isolated: it logs a warning and the remaining
//! detectors still run.

pub mod annotate;
pub mod session;
pub mod walker;

use std::panic::{self, AssertUnwindSafe};

pub use session::DetectionSession;

use lure_core::errors::{DetectError, LureErrorCode};

use crate::detectors::{self, Detector};
use crate::dom::Document;
use crate::report::Report;

/// Run the full detector set against a document snapshot.
pub fn run_detection(doc: &mut Document) -> Report {
    run_detectors(doc, &detectors::registry())
}

/// Run an explicit detector list against a document snapshot. Each
/// detector is fault-isolated: one that panics is logged and skipped,
/// and the remaining detectors still run against the shared session.
pub fn run_detectors(doc: &mut Document, detectors: &[Box<dyn Detector>]) -> Report {
    let cleared = annotate::clear_annotations(doc);
    if cleared > 0 {
        tracing::debug!(cleared, "reversed annotations from a previous run");
    }

    let mut session = DetectionSession::new();
    for detector in detectors {
        let before = session.len();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            detector.detect(doc, &mut session);
        }));
        match outcome {
            Ok(()) => {
                tracing::trace!(
                    detector = detector.id(),
                    findings = session.len() - before,
                    "detector pass complete"
                );
            }
            Err(payload) => {
                let err = DetectError::DetectorPanicked {
                    detector: detector.id().to_string(),
                    reason: panic_reason(&payload).to_string(),
                };
                tracing::warn!(
                    error = %err.boundary_string(),
                    "detector failed, continuing with remaining detectors"
                );
            }
        }
    }

    let findings = session.into_findings();
    annotate::apply_annotations(doc, &findings);
    let report = Report::aggregate(findings);
    tracing::info!(
        findings = report.findings.len(),
        score = report.total_score,
        tier = %report.tier,
        "detection run complete"
    );
    report
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}
