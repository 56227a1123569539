// Rules module
// This module exports the two rule sets applied to the effective scan text.

use regex::{Regex, RegexBuilder};

/// Rules for paid features. Any match fails the build.
pub mod paid;

/// Rules for cron triggers. Matches are reported as warnings only.
pub mod cron;

/// A single pattern paired with the message shown when it matches.
#[derive(Debug)]
pub struct Rule {
    /// Compiled, case-insensitive, ASCII-only pattern.
    pub pattern: Regex,
    /// Human-readable reason or note.
    pub message: &'static str,
}

impl Rule {
    /// Compiles `source` case-insensitively with ASCII-only classes and case folding.
    ///
    /// Rule sources are constants, so this is only called from `lazy_static` initializers.
    pub fn new(source: &str, message: &'static str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(source)
            .case_insensitive(true)
            .unicode(false)
            .build()?;
        Ok(Self { pattern, message })
    }

    /// Returns true if the pattern matches anywhere in `content`.
    pub fn is_match(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }

    /// The pattern as shown to users, e.g. `/vectorize/i`.
    pub fn display_pattern(&self) -> String {
        format!("/{}/i", self.pattern.as_str())
    }
}
