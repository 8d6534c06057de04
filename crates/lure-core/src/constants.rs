//! Shared constants for the Lure detection engine.

/// Lure version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reserved element id of the engine's own output surface. Any node at or
/// below an element with this id is excluded from analysis and recording.
pub const OVERLAY_ROOT_ID: &str = "lure-report-root";

/// Maximum excerpt length in characters before truncation.
pub const EXCERPT_MAX_CHARS: usize = 120;

/// Suffix appended to a truncated excerpt.
pub const EXCERPT_ELLIPSIS: &str = "…";

/// Minimum rendered width/height for a disguised-ad candidate to count as
/// visible.
pub const MIN_AD_DIMENSION: f32 = 20.0;

/// Minimum rendered height for a popup/modal candidate to count as
/// intrusive.
pub const MIN_POPUP_HEIGHT: f32 = 80.0;

/// Font size below which privacy-zuckering copy counts as small print.
pub const SMALL_PRINT_FONT_SIZE: f32 = 12.0;

/// Default font size assumed when a snapshot carries no measurement.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

// ---- Risk tier thresholds (inclusive lower bounds) ----

/// Total score at or above which the tier is Low (below: Clean).
pub const TIER_LOW_MIN: u32 = 1;

/// Total score at or above which the tier is Moderate.
pub const TIER_MODERATE_MIN: u32 = 10;

/// Total score at or above which the tier is High.
pub const TIER_HIGH_MIN: u32 = 25;

/// Total score at or above which the tier is VeryHigh.
pub const TIER_VERY_HIGH_MIN: u32 = 50;
