//! Branch-name pattern matching
//!
//! Patterns are unanchored regular expressions: `release/` matches
//! `old-release/1` too, anchor with `^` when that matters. A pattern that
//! does not compile never matches and never fails the caller.

use regex::Regex;
use tracing::warn;

/// True when at least one valid pattern matches `name`.
pub fn matches_any<S: AsRef<str>>(patterns: &[S], name: &str) -> bool {
    patterns.iter().any(|pattern| {
        Regex::new(pattern.as_ref())
            .map(|re| re.is_match(name))
            .unwrap_or(false)
    })
}

/// A compiled list of patterns; invalid entries are dropped with a warning.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    regexes: Vec<Regex>,
}

impl PatternSet {
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Self {
        let regexes = patterns
            .iter()
            .filter_map(|pattern| match Regex::new(pattern.as_ref()) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!(pattern = pattern.as_ref(), error = %e, "Ignoring invalid regex pattern");
                    None
                }
            })
            .collect();
        Self { regexes }
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regexes.iter().any(|re| re.is_match(name))
    }
}
