//! Pattern matching substrate: literal phrase sets and structured
//! regex sets compiled into single-pass matchers.
//!
//! Detection rules are data, not code: each detector's phrase table
//! lives in [`tables`] as static slices, compiled lazily into one
//! [`PatternSet`] per table. Extending a rule set means editing a
//! slice, never the traversal or dedup logic.

pub mod tables;

use aho_corasick::AhoCorasick;
use regex::RegexSet;

use lure_core::errors::DetectError;

/// A compiled pattern table: literal substrings go into one
/// Aho-Corasick automaton, structured patterns into one `RegexSet`,
/// so `is_match` costs at most two passes over the text.
///
/// Input text is expected to be lowercased by the caller; tables are
/// written in lowercase.
#[derive(Debug)]
pub struct PatternSet {
    literals: Option<AhoCorasick>,
    regexes: Option<RegexSet>,
    count: usize,
}

impl PatternSet {
    /// Compile a table. Either slice may be empty.
    pub fn compile(literals: &[&str], regexes: &[&str]) -> Result<Self, DetectError> {
        let compiled_literals = if literals.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::new(literals)
                    .map_err(|e| DetectError::PatternCompile(e.to_string()))?,
            )
        };
        let compiled_regexes = if regexes.is_empty() {
            None
        } else {
            Some(RegexSet::new(regexes).map_err(|e| DetectError::PatternCompile(e.to_string()))?)
        };
        Ok(Self {
            literals: compiled_literals,
            regexes: compiled_regexes,
            count: literals.len() + regexes.len(),
        })
    }

    /// A set that matches nothing. Used as the fallback when a table
    /// fails to compile, so a bad pattern disables its rule instead of
    /// aborting the run.
    pub fn empty() -> Self {
        Self {
            literals: None,
            regexes: None,
            count: 0,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.literals.as_ref().is_some_and(|ac| ac.is_match(text))
            || self.regexes.as_ref().is_some_and(|rs| rs.is_match(text))
    }

    /// Number of source patterns in the table.
    pub fn pattern_count(&self) -> usize {
        self.count
    }
}
