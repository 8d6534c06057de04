//! JSON reporter — the machine-readable report shape.
//!
//! This shape, together with the stable finding indices and node ids,
//! is the contract consumed by the presentation layer and by any
//! external storage.

use serde_json::{json, Value};

use lure_core::errors::{DetectError, LureErrorCode};

use crate::report::Report;

use super::Reporter;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &Report) -> Result<String, String> {
        let findings: Vec<Value> = report
            .findings
            .iter()
            .map(|f| {
                json!({
                    "index": f.index,
                    "category": f.category.name(),
                    "severity": f.severity.to_string(),
                    "weight": f.severity.weight(),
                    "node": f.node.map(|n| n.index()),
                    "message": f.message,
                    "excerpt": f.excerpt,
                })
            })
            .collect();

        let groups: Vec<Value> = report
            .groups
            .iter()
            .map(|g| {
                json!({
                    "category": g.category.name(),
                    "findings": g.findings,
                })
            })
            .collect();

        let output = json!({
            "version": lure_core::constants::VERSION,
            "totalScore": report.total_score,
            "tier": report.tier.name(),
            "findings": findings,
            "groups": groups,
        });

        serde_json::to_string_pretty(&output)
            .map_err(|e| DetectError::ReportSerialization(e.to_string()).boundary_string())
    }
}
