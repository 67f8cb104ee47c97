//! # Atomic Matchers
//!
//! The two leaf matchers everything else is built from:
//!
//! * [`Text`]: exact, case-sensitive literal text
//! * [`Pattern`]: a regular expression anchored at the current position
//!
//! Neither keeps any per-call state, so one instance can be shared by any
//! number of callers.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use super::core::{ParseError, ParseResult, Parser};

/// Text: Matches an exact literal at the current position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    literal: String,
}

impl Text {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }
}

impl Parser<String> for Text {
    fn parse(&self, source: &str, pos: usize) -> ParseResult<String> {
        let end = pos.saturating_add(self.literal.len());
        match source.get(pos..end) {
            Some(found) if found == self.literal => Ok((end, self.literal.clone())),
            _ => Err(ParseError::unexpected(format!("'{}'", self.literal), pos)),
        }
    }
}

/// Flags accepted by [`Pattern::with_flags`]. Both are off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternFlags {
    /// Case-insensitive matching
    pub ignore_case: bool,
    /// `.` also matches `\n`
    pub dot_all: bool,
}

/// The pattern source did not compile.
#[derive(Error, Debug, Clone)]
#[error("invalid pattern /{pattern}/: {cause}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub cause: regex::Error,
}

/// Pattern: Matches a regular expression starting exactly at the current position
///
/// A match found further along the input does not count. The expression
/// still sees the whole source, so `^`, `\b` and `\B` judge the text around
/// the position, not the start of a slice. An empty match is a successful
/// match that leaves the position where it was.
#[derive(Debug, Clone)]
pub struct Pattern {
    pattern: String,
    flags: PatternFlags,
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::with_flags(pattern, PatternFlags::default())
    }

    pub fn with_flags(pattern: &str, flags: PatternFlags) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(flags.ignore_case)
            .dot_matches_new_line(flags.dot_all)
            .build()
            .map_err(|cause| PatternError {
                pattern: pattern.to_string(),
                cause,
            })?;
        Ok(Self {
            pattern: pattern.to_string(),
            flags,
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }
}

impl Parser<String> for Pattern {
    fn parse(&self, source: &str, pos: usize) -> ParseResult<String> {
        // Leftmost-first: a match starting at `pos` is the one found, if any.
        Some(pos)
            .filter(|&pos| source.is_char_boundary(pos))
            .and_then(|pos| self.regex.find_at(source, pos))
            .filter(|found| found.start() == pos)
            .map(|found| (found.end(), found.as_str().to_string()))
            .ok_or_else(|| ParseError::unexpected(format!("/{}/", self.pattern), pos))
    }
}
