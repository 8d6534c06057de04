//! Fixed-order detector registry.

use super::costs::{HiddenCostsDetector, PriceAnchoringDetector};
use super::forms::{PrecheckedEnrollmentDetector, TrickQuestionDetector};
use super::media::{AutoplayMediaDetector, DisguisedAdsDetector, IntrusivePopupDetector};
use super::privacy::PrivacyZuckeringDetector;
use super::social::SocialProofDetector;
use super::subscription::{
    ConfirmShamingDetector, MisleadingResubscribeDetector, RoachMotelDetector,
};
use super::traits::Detector;
use super::urgency::{CountdownTimerDetector, UrgencyLanguageDetector};

/// The 14 detectors in invocation order. Display order of findings
/// follows this order; the finding *set* does not depend on it.
pub fn registry() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(PrecheckedEnrollmentDetector),
        Box::new(UrgencyLanguageDetector),
        Box::new(CountdownTimerDetector),
        Box::new(HiddenCostsDetector),
        Box::new(ConfirmShamingDetector),
        Box::new(RoachMotelDetector),
        Box::new(DisguisedAdsDetector),
        Box::new(TrickQuestionDetector),
        Box::new(PriceAnchoringDetector),
        Box::new(AutoplayMediaDetector),
        Box::new(IntrusivePopupDetector),
        Box::new(MisleadingResubscribeDetector),
        Box::new(SocialProofDetector),
        Box::new(PrivacyZuckeringDetector),
    ]
}
