//! Tests for the Lure error handling system.

use lure_core::errors::error_code;
use lure_core::errors::{DetectError, DomError, LureErrorCode};

#[test]
fn test_all_errors_have_error_code() {
    let dom = DomError::MissingBody;
    assert!(!dom.error_code().is_empty());

    let dom = DomError::MalformedMarkup {
        position: 12,
        reason: "unexpected EOF".into(),
    };
    assert_eq!(dom.error_code(), error_code::MALFORMED_MARKUP);

    let detect = DetectError::PatternCompile("bad regex".into());
    assert_eq!(detect.error_code(), error_code::PATTERN_ERROR);

    let detect = DetectError::DetectorPanicked {
        detector: "urgency-language".into(),
        reason: "boom".into(),
    };
    assert_eq!(detect.error_code(), error_code::DETECTION_ERROR);
}

#[test]
fn test_boundary_string_format() {
    let err = DomError::MissingBody;
    let s = err.boundary_string();
    assert!(s.starts_with("[SNAPSHOT_ERROR]"), "got: {s}");
    assert!(s.contains("no <body>"));
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = DomError::UnbalancedClose { tag: "div".into() };
    assert!(err.to_string().contains("</div>"));

    let err = DetectError::ReportSerialization("key error".into());
    assert!(err.to_string().contains("key error"));
}
