//! # Core Parser Definitions
//!
//! This module defines the matcher interface and the "no match" error type
//! that every atomic matcher and combinator in the crate shares.

use thiserror::Error;

/// Parser trait defines the core matching interface.
///
/// A parser is a pure function of `(source, pos)`. It either matches at `pos`
/// and reports the position just past the match together with the matched
/// value, or it reports a [`ParseError`] whose position is the `pos` it was
/// called with. Failure never consumes input.
///
/// Positions are byte offsets into `source`. An offset past the end of the
/// source, or one that does not fall on a char boundary, is a plain no-match.
///
/// # Type Parameters
///
/// * `O` - The output value type
pub trait Parser<O> {
    /// Attempts to match `source` starting exactly at `pos`.
    ///
    /// # Returns
    ///
    /// * `Ok((new_pos, output))` - If matching succeeds
    /// * `Err(error)` - If nothing matches at `pos`; `error.position() == pos`
    fn parse(&self, source: &str, pos: usize) -> ParseResult<O>;
}

impl<O, P> Parser<O> for Box<P>
where
    P: Parser<O> + ?Sized,
{
    fn parse(&self, source: &str, pos: usize) -> ParseResult<O> {
        (**self).parse(source, pos)
    }
}

/// Shared parsers, such as compile-once statics, are used by reference.
impl<O, P> Parser<O> for &P
where
    P: Parser<O> + ?Sized,
{
    fn parse(&self, source: &str, pos: usize) -> ParseResult<O> {
        (**self).parse(source, pos)
    }
}

/// Result type for matching operations.
///
/// On success, returns a tuple of the new position and the matched value.
pub type ParseResult<O> = Result<(usize, O), ParseError>;

/// "No match at this position".
///
/// This is an ordinary outcome of matching, not a fault. The variants only
/// differ in how much they tell about why nothing matched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The source at `position` is not what the parser expected
    #[error("Unexpected: expected {expected} at position {position}")]
    Unexpected { expected: String, position: usize },
    /// None of the alternatives of a choice matched
    #[error("No alternative matched at position {position}")]
    NoAlternative { position: usize },
    /// A labelled failure, wrapping the error of the inner parser
    #[error("{message} at position {position}: {inner}")]
    WithContext {
        message: String,
        position: usize,
        inner: Box<ParseError>,
    },
}

impl ParseError {
    pub fn unexpected(expected: impl Into<String>, position: usize) -> Self {
        ParseError::Unexpected {
            expected: expected.into(),
            position,
        }
    }

    /// The position the failed parser was called with.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Unexpected { position, .. } => *position,
            ParseError::NoAlternative { position } => *position,
            ParseError::WithContext { position, .. } => *position,
        }
    }

    /// Moves the reported position back to `position`.
    ///
    /// Composite parsers call this when a sub-parser fails part way through,
    /// so the caller sees the composite's own starting position.
    pub fn rewind(self, position: usize) -> Self {
        match self {
            ParseError::Unexpected { expected, .. } => ParseError::Unexpected { expected, position },
            ParseError::NoAlternative { .. } => ParseError::NoAlternative { position },
            ParseError::WithContext { message, inner, .. } => ParseError::WithContext {
                message,
                position,
                inner,
            },
        }
    }

    pub fn with_context(self, message: impl Into<String>) -> Self {
        let position = self.position();
        ParseError::WithContext {
            message: message.into(),
            position,
            inner: Box::new(self),
        }
    }
}
