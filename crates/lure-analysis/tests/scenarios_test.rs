//! Full-pipeline scenarios: snapshot markup in, report out.

use lure_analysis::dom::loader::load_snapshot;
use lure_analysis::engine::run_detection;
use lure_analysis::report::{FindingCategory, RiskTier, Severity};

/// A pre-checked newsletter checkbox inside its label.
#[test]
fn test_prechecked_newsletter_checkbox() {
    let mut doc = load_snapshot(
        r#"<body><form><label><input type="checkbox" checked="checked"/> Subscribe to our newsletter</label></form></body>"#,
    )
    .unwrap();

    let report = run_detection(&mut doc);
    assert_eq!(report.findings.len(), 1);
    let finding = &report.findings[0];
    assert_eq!(finding.category, FindingCategory::ForcedContinuity);
    assert_eq!(finding.severity, Severity::Critical);
}

/// A low-stock claim deep in the tree: one social-proof finding, not
/// a scarcity/urgency one, and exactly one despite the nesting.
#[test]
fn test_low_stock_claim_files_under_social_proof() {
    let mut doc = load_snapshot(
        r#"<body><main><div><div><div><span>Only 3 left in stock</span></div></div></div></main></body>"#,
    )
    .unwrap();

    let report = run_detection(&mut doc);
    assert_eq!(report.findings.len(), 1);
    let finding = &report.findings[0];
    assert_eq!(finding.category, FindingCategory::SocialProof);
    assert_eq!(finding.severity, Severity::Medium);
}

/// A countdown-classed badge with no time token: the timer rule stays
/// quiet, the urgency rule still catches "hurry".
#[test]
fn test_timer_badge_without_time_token() {
    let mut doc = load_snapshot(
        r#"<body><div class="countdown-badge" data-width="120" data-height="32">Hurry!</div></body>"#,
    )
    .unwrap();

    let report = run_detection(&mut doc);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].category, FindingCategory::ScarcityUrgency);
    assert_eq!(report.findings[0].severity, Severity::High);
    assert_eq!(report.findings[0].excerpt.as_deref(), Some("Hurry!"));
}

/// Muted autoplay is a lesser offense than unmuted autoplay.
#[test]
fn test_autoplay_severity_depends_on_muted() {
    let mut doc =
        load_snapshot(r#"<body><video autoplay="" muted=""/></body>"#).unwrap();
    let report = run_detection(&mut doc);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].category, FindingCategory::IntrusiveUx);
    assert_eq!(report.findings[0].severity, Severity::Low);

    let mut doc = load_snapshot(r#"<body><video autoplay=""/></body>"#).unwrap();
    let report = run_detection(&mut doc);
    assert_eq!(report.findings[0].severity, Severity::Medium);
}

/// A page with nothing manipulative comes back Clean.
#[test]
fn test_benign_page_is_clean() {
    let mut doc = load_snapshot(
        r#"<body>
            <main>
                <h1>Seasonal recipes</h1>
                <p>Browse our collection of soups and stews.</p>
                <a href="/about">About us</a>
                <label><input type="checkbox"/> Remember my settings</label>
            </main>
        </body>"#,
    )
    .unwrap();

    let report = run_detection(&mut doc);
    assert!(report.findings.is_empty());
    assert_eq!(report.total_score, 0);
    assert_eq!(report.tier, RiskTier::Clean);
    assert!(report.groups.is_empty());
}

/// A dense dark-pattern page accumulates into a high tier, with
/// groups ordered by first appearance.
#[test]
fn test_dense_page_accumulates() {
    let mut doc = load_snapshot(
        r#"<body>
            <div class="promo">
                <p>Limited time offer, act now!</p>
                <div class="countdown" data-width="200" data-height="40">Ends in 0:59</div>
            </div>
            <section>
                <button>Start free trial</button>
                <p>A convenience fee is added at checkout.</p>
            </section>
            <div class="modal" data-width="500" data-height="400">
                <p>23 people are viewing this</p>
                <a>No thanks, I like paying full price</a>
            </div>
        </body>"#,
    )
    .unwrap();

    let report = run_detection(&mut doc);
    assert!(report.findings.len() >= 6);
    assert!(report.total_score >= 25);
    assert!(report.tier >= RiskTier::High);

    let categories: Vec<_> = report.groups.iter().map(|g| g.category).collect();
    assert_eq!(categories[0], FindingCategory::ScarcityUrgency);
    assert!(categories.contains(&FindingCategory::RoachMotel));
    assert!(categories.contains(&FindingCategory::HiddenCosts));
    assert!(categories.contains(&FindingCategory::IntrusiveUx));
    assert!(categories.contains(&FindingCategory::SocialProof));
    assert!(categories.contains(&FindingCategory::ConfirmShaming));
}
