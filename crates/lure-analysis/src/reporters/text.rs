//! Text reporter — human-readable grouped summary.

use std::fmt::Write as _;

use crate::report::Report;

use super::Reporter;

pub struct TextReporter;

impl Reporter for TextReporter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn generate(&self, report: &Report) -> Result<String, String> {
        let mut output = String::new();

        let _ = writeln!(output, "Dark Pattern Report");
        let _ = writeln!(
            output,
            "  score: {}  tier: {}  findings: {}",
            report.total_score,
            report.tier,
            report.findings.len()
        );

        if report.findings.is_empty() {
            let _ = writeln!(output, "  no patterns detected");
            return Ok(output);
        }

        for group in &report.groups {
            let _ = writeln!(output);
            let _ = writeln!(output, "{} ({})", group.category.name(), group.findings.len());
            for &index in &group.findings {
                let Some(finding) = report.finding(index) else {
                    continue;
                };
                let _ = writeln!(
                    output,
                    "  [{}] {}: {}",
                    index, finding.severity, finding.message
                );
                if let Some(excerpt) = &finding.excerpt {
                    let _ = writeln!(output, "      \"{excerpt}\"");
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Finding, FindingCategory, Severity};

    #[test]
    fn test_grouped_summary() {
        let report = Report::aggregate(vec![
            Finding {
                index: 0,
                category: FindingCategory::ScarcityUrgency,
                severity: Severity::High,
                node: None,
                message: "urgency language",
                excerpt: Some("act now".to_string()),
            },
            Finding {
                index: 1,
                category: FindingCategory::ScarcityUrgency,
                severity: Severity::High,
                node: None,
                message: "countdown timer",
                excerpt: None,
            },
        ]);

        let output = TextReporter.generate(&report).unwrap();
        assert!(output.contains("score: 12"));
        assert!(output.contains("Scarcity/Urgency (2)"));
        assert!(output.contains("\"act now\""));
    }

    #[test]
    fn test_clean_report_says_so() {
        let output = TextReporter.generate(&Report::aggregate(Vec::new())).unwrap();
        assert!(output.contains("no patterns detected"));
        assert!(output.contains("tier: Clean"));
    }
}
