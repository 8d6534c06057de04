//! Core types for the finding collection and the aggregate report.

use serde::{Deserialize, Serialize};
use std::fmt;

use lure_core::constants::{
    TIER_HIGH_MIN, TIER_LOW_MIN, TIER_MODERATE_MIN, TIER_VERY_HIGH_MIN,
};
use lure_core::types::NodeId;

/// Severity levels for findings. Immutable once a finding is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Score weight for aggregation.
    pub fn weight(&self) -> u32 {
        match self {
            Self::Critical => 10,
            Self::High => 6,
            Self::Medium => 3,
            Self::Low => 1,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// The 11 finding categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingCategory {
    ForcedContinuity,
    ScarcityUrgency,
    HiddenCosts,
    ConfirmShaming,
    RoachMotel,
    DisguisedAds,
    TrickQuestions,
    PriceAnchoring,
    IntrusiveUx,
    SocialProof,
    PrivacyZuckering,
}

impl FindingCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ForcedContinuity => "Forced Continuity",
            Self::ScarcityUrgency => "Scarcity/Urgency",
            Self::HiddenCosts => "Hidden Costs",
            Self::ConfirmShaming => "Confirm-shaming",
            Self::RoachMotel => "Roach Motel",
            Self::DisguisedAds => "Disguised Ads",
            Self::TrickQuestions => "Trick Questions",
            Self::PriceAnchoring => "Price Anchoring",
            Self::IntrusiveUx => "Intrusive UX",
            Self::SocialProof => "Social Proof Manipulation",
            Self::PrivacyZuckering => "Privacy Zuckering",
        }
    }
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Risk tier derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    Clean,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskTier {
    /// Map a total score to its tier using the fixed thresholds.
    pub fn from_score(score: u32) -> Self {
        if score >= TIER_VERY_HIGH_MIN {
            Self::VeryHigh
        } else if score >= TIER_HIGH_MIN {
            Self::High
        } else if score >= TIER_MODERATE_MIN {
            Self::Moderate
        } else if score >= TIER_LOW_MIN {
            Self::Low
        } else {
            Self::Clean
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Clean => "Clean",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single recorded detection.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Stable position in the run's findings list; the presentation
    /// layer references findings by this index.
    pub index: usize,
    pub category: FindingCategory,
    pub severity: Severity,
    /// The flagged node, or None when no single element applies.
    pub node: Option<NodeId>,
    /// Fixed per detection rule, never interpolated from matched text.
    pub message: &'static str,
    /// Whitespace-normalized element text, capped with an ellipsis.
    pub excerpt: Option<String>,
}

/// One category group in a report, in order of first appearance.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: FindingCategory,
    /// Indices into `Report::findings`, in insertion order.
    pub findings: Vec<usize>,
}

/// The aggregate report: derived from the findings list, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub findings: Vec<Finding>,
    pub total_score: u32,
    pub tier: RiskTier,
    pub groups: Vec<CategoryGroup>,
}

impl Report {
    /// Aggregate a findings list: total score, tier, and category
    /// grouping with group order following first appearance.
    pub fn aggregate(findings: Vec<Finding>) -> Self {
        let total_score = findings.iter().map(|f| f.severity.weight()).sum();
        let tier = RiskTier::from_score(total_score);

        let mut groups: Vec<CategoryGroup> = Vec::new();
        for finding in &findings {
            match groups.iter_mut().find(|g| g.category == finding.category) {
                Some(group) => group.findings.push(finding.index),
                None => groups.push(CategoryGroup {
                    category: finding.category,
                    findings: vec![finding.index],
                }),
            }
        }

        Self {
            findings,
            total_score,
            tier,
            groups,
        }
    }

    /// Look up a finding by its stable index.
    pub fn finding(&self, index: usize) -> Option<&Finding> {
        self.findings.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_weights() {
        assert_eq!(Severity::Critical.weight(), 10);
        assert_eq!(Severity::High.weight(), 6);
        assert_eq!(Severity::Medium.weight(), 3);
        assert_eq!(Severity::Low.weight(), 1);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(RiskTier::from_score(0), RiskTier::Clean);
        assert_eq!(RiskTier::from_score(1), RiskTier::Low);
        assert_eq!(RiskTier::from_score(9), RiskTier::Low);
        assert_eq!(RiskTier::from_score(10), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(24), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(25), RiskTier::High);
        assert_eq!(RiskTier::from_score(49), RiskTier::High);
        assert_eq!(RiskTier::from_score(50), RiskTier::VeryHigh);
        assert_eq!(RiskTier::from_score(1000), RiskTier::VeryHigh);
    }

    #[test]
    fn test_group_order_follows_first_appearance() {
        let findings = vec![
            Finding {
                index: 0,
                category: FindingCategory::HiddenCosts,
                severity: Severity::High,
                node: None,
                message: "m",
                excerpt: None,
            },
            Finding {
                index: 1,
                category: FindingCategory::SocialProof,
                severity: Severity::Medium,
                node: None,
                message: "m",
                excerpt: None,
            },
            Finding {
                index: 2,
                category: FindingCategory::HiddenCosts,
                severity: Severity::High,
                node: None,
                message: "m",
                excerpt: None,
            },
        ];
        let report = Report::aggregate(findings);
        assert_eq!(report.total_score, 6 + 3 + 6);
        assert_eq!(report.tier, RiskTier::Moderate);
        assert_eq!(report.groups.len(), 2);
        assert_eq!(report.groups[0].category, FindingCategory::HiddenCosts);
        assert_eq!(report.groups[0].findings, vec![0, 2]);
        assert_eq!(report.groups[1].category, FindingCategory::SocialProof);
        assert_eq!(report.groups[1].findings, vec![1]);
    }

    #[test]
    fn test_empty_report_is_clean() {
        let report = Report::aggregate(Vec::new());
        assert_eq!(report.total_score, 0);
        assert_eq!(report.tier, RiskTier::Clean);
        assert!(report.groups.is_empty());
    }
}
