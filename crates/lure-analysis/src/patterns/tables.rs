//! The per-detector pattern tables.
//!
//! All phrases are lowercase; callers lowercase the text before
//! matching. A table that fails to compile logs a warning and its
//! rule simply produces no matches.

use std::sync::LazyLock;

use super::PatternSet;

fn compile_or_empty(table: &str, literals: &[&str], regexes: &[&str]) -> PatternSet {
    PatternSet::compile(literals, regexes).unwrap_or_else(|e| {
        tracing::warn!(table, error = %e, "pattern table failed to compile, rule disabled");
        PatternSet::empty()
    })
}

// ---------------------------------------------------------------------------
// Attribute token vocabularies (matched against class tokens / id / data-*).

/// Countdown timer markers in class, id, or data attributes.
pub const TIMER_TOKENS: &[&str] = &["countdown", "timer", "count-down", "ticker"];

/// Ad / sponsored-content markers. Matched as whole class tokens, not
/// substrings, so `gradient` or `shadow` never trip it.
pub const AD_TOKENS: &[&str] = &[
    "ad",
    "ads",
    "advert",
    "advertisement",
    "ad-slot",
    "ad-banner",
    "ad-container",
    "adsbygoogle",
    "sponsored",
    "sponsor",
    "promo",
    "promoted",
];

/// Modal / popup markers in class tokens, id, or `role`.
pub const POPUP_TOKENS: &[&str] = &[
    "modal",
    "popup",
    "pop-up",
    "lightbox",
    "overlay",
    "dialog",
    "interstitial",
];

/// Struck-out original-price markers in class tokens.
pub const PRICE_CLASS_TOKENS: &[&str] = &["original", "was", "old", "list", "strike", "mrp"];

/// Containers treated as section-like scope for cancellation-ease lookups.
pub const SECTION_TAGS: &[&str] = &["section", "article", "form", "main"];

// ---------------------------------------------------------------------------
// Detector 1: pre-checked enrollment label language.

static SUBSCRIPTION_LABEL: LazyLock<PatternSet> = LazyLock::new(|| {
    compile_or_empty(
        "subscription_label",
        &[
            "subscribe",
            "newsletter",
            "marketing",
            "promotional",
            "special offers",
            "updates and offers",
            "third party",
            "third-party",
            "partners",
            "opt in",
            "opt-in",
            "sign me up",
        ],
        &[],
    )
});

/// Label language that turns a pre-checked box into forced enrollment.
pub fn subscription_label() -> &'static PatternSet {
    &SUBSCRIPTION_LABEL
}

// ---------------------------------------------------------------------------
// Detector 2: urgency language.

static URGENCY: LazyLock<PatternSet> = LazyLock::new(|| {
    compile_or_empty(
        "urgency",
        &[
            "limited time",
            "act now",
            "act fast",
            "hurry",
            "last chance",
            "ends soon",
            "ends tonight",
            "ends today",
            "today only",
            "offer expires",
            "expires soon",
            "while supplies last",
            "while stocks last",
            "don't miss out",
            "don't wait",
            "almost gone",
            "selling out",
        ],
        &[r"only \d+ (?:left|remaining|seats?|spots?)"],
    )
});

pub fn urgency() -> &'static PatternSet {
    &URGENCY
}

// ---------------------------------------------------------------------------
// Detector 3: countdown timer content guard.

static CLOCK_OR_DURATION: LazyLock<PatternSet> = LazyLock::new(|| {
    compile_or_empty(
        "clock_or_duration",
        &[],
        &[
            r"\b\d{1,2}:\d{2}\b",
            r"\b\d+\s*(?:hours?|hrs?|minutes?|mins?|seconds?|secs?)\b",
        ],
    )
});

/// Clock token (`H:MM`) or duration token (number + time unit). A
/// timer-classed element without one of these is not a countdown.
pub fn clock_or_duration() -> &'static PatternSet {
    &CLOCK_OR_DURATION
}

// ---------------------------------------------------------------------------
// Detector 4: hidden costs.

static HIDDEN_COSTS: LazyLock<PatternSet> = LazyLock::new(|| {
    compile_or_empty(
        "hidden_costs",
        &[
            "processing fee",
            "service fee",
            "handling fee",
            "convenience fee",
            "booking fee",
            "surcharge",
            "additional fees",
            "additional charges",
            "fees may apply",
            "added at checkout",
            "calculated at checkout",
            "applied at checkout",
            "plus shipping",
            "shipping and handling",
            "plus taxes and fees",
            "excludes taxes",
        ],
        &[],
    )
});

pub fn hidden_costs() -> &'static PatternSet {
    &HIDDEN_COSTS
}

// ---------------------------------------------------------------------------
// Detector 5: confirm-shaming decline copy.

static CONFIRM_SHAMING: LazyLock<PatternSet> = LazyLock::new(|| {
    compile_or_empty(
        "confirm_shaming",
        &[
            "no thanks, i",
            "no thank you, i",
            "i don't want to save",
            "i do not want to save",
            "i don't want a discount",
            "i'd rather pay full price",
            "i prefer to pay full price",
            "i like paying full price",
            "i don't care about",
            "i'll risk it",
            "i hate saving money",
            "i hate free stuff",
            "i don't need help",
        ],
        &[],
    )
});

pub fn confirm_shaming() -> &'static PatternSet {
    &CONFIRM_SHAMING
}

// ---------------------------------------------------------------------------
// Detector 6: roach motel (easy in, no visible way out).

static SUBSCRIPTION_CTA: LazyLock<PatternSet> = LazyLock::new(|| {
    compile_or_empty(
        "subscription_cta",
        &[
            "subscribe",
            "sign up",
            "join now",
            "start free trial",
            "start your free trial",
            "start trial",
            "become a member",
            "upgrade now",
            "enroll",
        ],
        &[],
    )
});

pub fn subscription_cta() -> &'static PatternSet {
    &SUBSCRIPTION_CTA
}

static CANCELLATION_EASE: LazyLock<PatternSet> = LazyLock::new(|| {
    compile_or_empty(
        "cancellation_ease",
        &[
            "cancel anytime",
            "cancel any time",
            "cancel at any time",
            "easy to cancel",
            "unsubscribe anytime",
            "unsubscribe at any time",
            "no commitment",
            "no obligation",
            "risk-free",
            "risk free",
        ],
        &[],
    )
});

/// Copy that makes a subscription CTA honest: its absence from the
/// enclosing section is what the roach-motel detector flags.
pub fn cancellation_ease() -> &'static PatternSet {
    &CANCELLATION_EASE
}

// ---------------------------------------------------------------------------
// Detector 7: ad disclosure words.

static AD_DISCLOSURE: LazyLock<PatternSet> = LazyLock::new(|| {
    compile_or_empty(
        "ad_disclosure",
        &[],
        &[r"\b(?:sponsored|advertisement|paid|promoted|ad)\b"],
    )
});

/// An explicit disclosure word in the element's own text exempts an
/// ad-classed element from the disguised-ads rule.
pub fn ad_disclosure() -> &'static PatternSet {
    &AD_DISCLOSURE
}

// ---------------------------------------------------------------------------
// Detector 8: trick-question double negatives.

static TRICK_QUESTION: LazyLock<PatternSet> = LazyLock::new(|| {
    compile_or_empty(
        "trick_question",
        &[],
        &[
            r"uncheck\s+(?:this\s+|the\s+)?box\s+if\s+you\s+(?:do\s+not|don't)",
            r"(?:do\s+not|don't)\s+(?:uncheck|untick|deselect)",
            r"check\s+(?:this\s+|the\s+)?box\s+if\s+you\s+(?:do\s+not|don't)\s+(?:want|wish)\s+(?:to\s+)?not\b",
            r"opt\s+out\s+of\s+not\s+receiving",
            r"(?:do\s+not|don't)\s+\w+\s+if\s+you\s+(?:do\s+not|don't)",
        ],
    )
});

pub fn trick_question() -> &'static PatternSet {
    &TRICK_QUESTION
}

// ---------------------------------------------------------------------------
// Detector 9: price-like content guard.

static PRICE_VALUE: LazyLock<PatternSet> = LazyLock::new(|| {
    compile_or_empty(
        "price_value",
        &[],
        &[r"[$€£¥₹]\s*\d", r"\d{2,}"],
    )
});

/// Currency-prefixed number or a bare number of at least two digits.
/// Deliberately coarse; the candidate set is what keeps it precise.
pub fn price_value() -> &'static PatternSet {
    &PRICE_VALUE
}

// ---------------------------------------------------------------------------
// Detector 12: misleading re-subscribe controls.

static RESUBSCRIBE: LazyLock<PatternSet> = LazyLock::new(|| {
    compile_or_empty(
        "resubscribe",
        &[
            "keep me subscribed",
            "stay subscribed",
            "keep my subscription",
            "remain subscribed",
            "continue my subscription",
            "keep my benefits",
            "keep my plan",
            "don't cancel",
        ],
        &[],
    )
});

pub fn resubscribe() -> &'static PatternSet {
    &RESUBSCRIBE
}

// ---------------------------------------------------------------------------
// Detector 13: fabricated popularity.

static SOCIAL_PROOF: LazyLock<PatternSet> = LazyLock::new(|| {
    compile_or_empty(
        "social_proof",
        &["trending now", "people are viewing", "selling fast"],
        &[
            r"\d+\s+(?:people|others|users|customers|shoppers)\s+(?:are\s+)?(?:currently\s+)?(?:viewing|looking|watching)",
            r"\d+\s+(?:people|customers)\s+(?:bought|purchased|ordered)",
            r"(?:bought|purchased|ordered)\s+in\s+the\s+last\s+\d+\s+(?:hours?|minutes?|days?)",
            LOW_STOCK_PATTERN,
        ],
    )
});

pub fn social_proof() -> &'static PatternSet {
    &SOCIAL_PROOF
}

const LOW_STOCK_PATTERN: &str = r"only\s+\d+\s+left\s+in\s+stock";

static LOW_STOCK: LazyLock<PatternSet> =
    LazyLock::new(|| compile_or_empty("low_stock", &[], &[LOW_STOCK_PATTERN]));

/// Low-stock claims belong to the social-proof category. The urgency
/// detector consults this set and skips texts it claims, so one claim
/// is never filed under both categories.
pub fn low_stock() -> &'static PatternSet {
    &LOW_STOCK
}

// ---------------------------------------------------------------------------
// Detector 14: privacy zuckering.

static PRIVACY: LazyLock<PatternSet> = LazyLock::new(|| {
    compile_or_empty(
        "privacy",
        &[
            "share your data",
            "share your information",
            "share your personal information",
            "sell your data",
            "sell your information",
            "we may share",
            "with our partners",
            "with third parties",
            "with third-party partners",
            "by continuing you agree",
            "by signing up you agree",
            "by signing up, you agree",
            "consent to receive",
            "combined with data from",
        ],
        &[],
    )
});

pub fn privacy() -> &'static PatternSet {
    &PRIVACY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        for (name, set) in [
            ("subscription_label", subscription_label()),
            ("urgency", urgency()),
            ("clock_or_duration", clock_or_duration()),
            ("hidden_costs", hidden_costs()),
            ("confirm_shaming", confirm_shaming()),
            ("subscription_cta", subscription_cta()),
            ("cancellation_ease", cancellation_ease()),
            ("ad_disclosure", ad_disclosure()),
            ("trick_question", trick_question()),
            ("price_value", price_value()),
            ("resubscribe", resubscribe()),
            ("social_proof", social_proof()),
            ("low_stock", low_stock()),
            ("privacy", privacy()),
        ] {
            assert!(set.pattern_count() > 0, "{name} table is empty");
        }
    }

    #[test]
    fn test_low_stock_is_social_proof_not_urgency_only() {
        let text = "only 3 left in stock";
        assert!(low_stock().is_match(text));
        assert!(social_proof().is_match(text));
    }

    #[test]
    fn test_urgency_examples() {
        assert!(urgency().is_match("limited time offer!"));
        assert!(urgency().is_match("hurry, only 2 seats remaining"));
        assert!(!urgency().is_match("free shipping on all orders"));
    }

    #[test]
    fn test_clock_and_duration_tokens() {
        assert!(clock_or_duration().is_match("ends in 1:59"));
        assert!(clock_or_duration().is_match("expires in 10 minutes"));
        assert!(!clock_or_duration().is_match("hurry!"));
    }

    #[test]
    fn test_trick_question_double_negatives() {
        assert!(trick_question().is_match("uncheck this box if you don't want updates"));
        assert!(trick_question().is_match("don't uncheck if you wish to continue"));
        assert!(!trick_question().is_match("check this box to receive updates"));
    }

    #[test]
    fn test_ad_disclosure_is_word_bounded() {
        assert!(ad_disclosure().is_match("sponsored content"));
        assert!(ad_disclosure().is_match("this is an ad"));
        assert!(!ad_disclosure().is_match("radical gradient shadow"));
    }
}
