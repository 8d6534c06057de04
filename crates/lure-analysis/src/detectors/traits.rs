//! The detector contract.

use crate::dom::Document;
use crate::engine::DetectionSession;
use crate::report::FindingCategory;

/// One detection rule: a pure pass over the document snapshot that
/// records zero or more findings into the shared session.
///
/// Conventions every detector follows: candidates inside the engine's
/// own output surface are never recorded (the session enforces this),
/// missing optional context (no label, no enclosing section,
/// unmeasurable metrics) degrades silently, and the message is fixed
/// per rule, never interpolated from matched text.
pub trait Detector {
    /// Stable identifier used in logs.
    fn id(&self) -> &'static str;

    /// The category this rule files its findings under.
    fn category(&self) -> FindingCategory;

    fn detect(&self, doc: &Document, session: &mut DetectionSession);
}
