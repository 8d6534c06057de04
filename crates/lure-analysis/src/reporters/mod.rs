//! Reporters — output formats for the aggregate report.
//!
//! Two formats: JSON for machine consumers (the presentation layer and
//! any external storage) and a grouped text summary for terminals.

pub mod json;
pub mod text;

use crate::report::Report;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &Report) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "json" => Some(Box::new(json::JsonReporter)),
        "text" => Some(Box::new(text::TextReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["json", "text"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_by_name() {
        assert!(create_reporter("json").is_some());
        assert!(create_reporter("text").is_some());
        assert!(create_reporter("xml").is_none());
        assert_eq!(available_formats().len(), 2);
    }
}
