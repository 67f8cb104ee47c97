//! # Parser Combinators
//!
//! This module implements the combinators that compose matchers into larger
//! ones. Every combinator keeps the matcher contract: on failure the reported
//! position is the combinator's own starting position, never a position some
//! sub-parser reached before giving up.
//!
//! ## Combinator Types
//!
//! * **Alternative Combinators**: `Choice` (first match wins)
//! * **Sequential Combinators**: `Sequence`, `Tuple2`..`Tuple4`, `Delimited`, `Preceded`
//! * **Repetition Combinators**: `Repetition` (template interleaved with a separator)
//! * **Transformation Combinators**: `Map`, `Optional`
//! * **Structural Combinators**: `Lazy` (deferred construction), `WithContext`

use std::marker::PhantomData;

use super::core::{ParseError, ParseResult, Parser};

/// Choice: Tries multiple parsers and succeeds with the first successful one
///
/// Alternatives are tried in order at the same position. The first one that
/// matches wins, even when it matched the empty string and a later one could
/// have matched more. If all of them fail, it returns a NoAlternative error.
pub struct Choice<O> {
    /// The list of parsers to try
    parsers: Vec<Box<dyn Parser<O>>>,
}

impl<O> Choice<O> {
    /// Creates a new Choice parser
    ///
    /// # Arguments
    ///
    /// * `parsers` - A vector of boxed parsers to try in order
    pub fn new(parsers: Vec<Box<dyn Parser<O>>>) -> Self {
        Self { parsers }
    }
}

impl<O> Parser<O> for Choice<O> {
    fn parse(&self, source: &str, pos: usize) -> ParseResult<O> {
        for parser in &self.parsers {
            if let Ok(result) = parser.parse(source, pos) {
                return Ok(result);
            }
        }
        Err(ParseError::NoAlternative { position: pos })
    }
}

/// Sequence: Applies multiple parsers in sequence
///
/// Each parser starts where the previous one stopped. The results are
/// collected in order. If any parser fails the whole sequence fails at its
/// starting position.
pub struct Sequence<O> {
    /// The list of parsers to apply in sequence
    parsers: Vec<Box<dyn Parser<O>>>,
}

impl<O> Sequence<O> {
    /// Creates a new Sequence parser
    ///
    /// # Arguments
    ///
    /// * `parsers` - A vector of boxed parsers to apply in sequence
    pub fn new(parsers: Vec<Box<dyn Parser<O>>>) -> Self {
        Self { parsers }
    }
}

impl<O> Parser<Vec<O>> for Sequence<O> {
    fn parse(&self, source: &str, pos: usize) -> ParseResult<Vec<O>> {
        let mut results = Vec::with_capacity(self.parsers.len());
        let mut current_pos = pos;
        for parser in &self.parsers {
            let (new_pos, result) = parser
                .parse(source, current_pos)
                .map_err(|e| e.rewind(pos))?;
            results.push(result);
            current_pos = new_pos;
        }
        Ok((current_pos, results))
    }
}

/// Repetition: One or more templates joined by separators
///
/// Matches the template, then keeps matching `(separator, template)` pairs
/// until a pair fails. Only the template values are collected. If the first
/// template does not match, the result is an empty list at the starting
/// position, so this parser never fails.
///
/// A pair in which both the separator and the template matched the empty
/// string counts as a failed pair. That is what ends the loop when both
/// parsers can match nothing.
pub struct Repetition<P, S, O, SO> {
    /// Parser for the repeated items
    template: P,
    /// Parser for the separator between items
    separator: S,
    _phantom: PhantomData<(O, SO)>,
}

impl<P, S, O, SO> Repetition<P, S, O, SO> {
    /// Creates a new Repetition parser
    ///
    /// # Arguments
    ///
    /// * `template` - Parser for the repeated items
    /// * `separator` - Parser for the separator between items
    pub fn new(template: P, separator: S) -> Self {
        Self {
            template,
            separator,
            _phantom: PhantomData,
        }
    }
}

impl<P, S, O, SO> Repetition<P, S, O, SO>
where
    P: Parser<O>,
    S: Parser<SO>,
{
    fn parse_pair(&self, source: &str, pos: usize) -> ParseResult<O> {
        let (sep_pos, _) = self.separator.parse(source, pos)?;
        let (new_pos, value) = self
            .template
            .parse(source, sep_pos)
            .map_err(|e| e.rewind(pos))?;
        if new_pos == pos {
            return Err(ParseError::unexpected("non-empty separator and template", pos));
        }
        Ok((new_pos, value))
    }
}

impl<P, S, O, SO> Parser<Vec<O>> for Repetition<P, S, O, SO>
where
    P: Parser<O>,
    S: Parser<SO>,
{
    fn parse(&self, source: &str, pos: usize) -> ParseResult<Vec<O>> {
        let Ok((mut current_pos, first)) = self.template.parse(source, pos) else {
            return Ok((pos, Vec::new()));
        };
        let mut results = vec![first];

        loop {
            match self.parse_pair(source, current_pos) {
                Ok((new_pos, value)) => {
                    results.push(value);
                    current_pos = new_pos;
                }
                Err(e) => {
                    tracing::trace!(
                        target: "parser::rep",
                        error = %e,
                        position = current_pos,
                        items_collected = results.len(),
                        "Repetition stopped at failed separator/template pair"
                    );
                    break;
                }
            }
        }

        Ok((current_pos, results))
    }
}

/// Map: Transforms the output of a parser using a function
#[derive(Clone)]
pub struct Map<P, F, A, B> {
    /// The parser whose output will be transformed
    parser: P,
    /// The transformation function
    f: F,
    _phantom: PhantomData<(A, B)>,
}

impl<P, F, A, B> Map<P, F, A, B> {
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<A, B, P, F> Parser<B> for Map<P, F, A, B>
where
    P: Parser<A>,
    F: Fn(A) -> B,
{
    fn parse(&self, source: &str, pos: usize) -> ParseResult<B> {
        self.parser
            .parse(source, pos)
            .map(|(pos, value)| (pos, (self.f)(value)))
    }
}

/// Preceded: Parses a prefix and discards it, returning the second result
pub struct Preceded<P1, P2, O1, O> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(O1, O)>,
}

impl<P1, P2, O1, O> Preceded<P1, P2, O1, O> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, O1, O> Parser<O> for Preceded<P1, P2, O1, O>
where
    P1: Parser<O1>,
    P2: Parser<O>,
{
    fn parse(&self, source: &str, pos: usize) -> ParseResult<O> {
        let start = pos;
        let (pos, _) = self.parser1.parse(source, pos)?;
        self.parser2
            .parse(source, pos)
            .map_err(|e| e.rewind(start))
    }
}

/// Optional: Matches the inner parser or nothing
///
/// Never fails. When the inner parser fails the result is `None` at the
/// starting position.
pub struct Optional<P, O> {
    parser: P,
    _phantom: PhantomData<O>,
}

impl<P, O> Optional<P, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<P, O> Parser<Option<O>> for Optional<P, O>
where
    P: Parser<O>,
{
    fn parse(&self, source: &str, pos: usize) -> ParseResult<Option<O>> {
        match self.parser.parse(source, pos) {
            Ok((new_pos, value)) => Ok((new_pos, Some(value))),
            Err(e) => {
                tracing::trace!(
                    target: "parser::optional",
                    error = %e,
                    position = pos,
                    "Optional parser matched nothing"
                );
                Ok((pos, None))
            }
        }
    }
}

#[derive(Clone)]
pub struct Tuple2<P1, P2, O1, O2> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(O1, O2)>,
}

impl<P1, P2, O1, O2> Tuple2<P1, P2, O1, O2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, O1, O2> Parser<(O1, O2)> for Tuple2<P1, P2, O1, O2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    fn parse(&self, source: &str, pos: usize) -> ParseResult<(O1, O2)> {
        let start = pos;
        let (pos, result1) = self.parser1.parse(source, pos)?;
        let (pos, result2) = self
            .parser2
            .parse(source, pos)
            .map_err(|e| e.rewind(start))?;
        Ok((pos, (result1, result2)))
    }
}

#[derive(Clone)]
pub struct Tuple3<P1, P2, P3, O1, O2, O3> {
    parser1: P1,
    parser2: P2,
    parser3: P3,
    _phantom: PhantomData<(O1, O2, O3)>,
}

impl<P1, P2, P3, O1, O2, O3> Tuple3<P1, P2, P3, O1, O2, O3> {
    pub fn new(parser1: P1, parser2: P2, parser3: P3) -> Self {
        Self {
            parser1,
            parser2,
            parser3,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, P3, O1, O2, O3> Parser<(O1, O2, O3)> for Tuple3<P1, P2, P3, O1, O2, O3>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
    P3: Parser<O3>,
{
    fn parse(&self, source: &str, pos: usize) -> ParseResult<(O1, O2, O3)> {
        let start = pos;
        let (pos, result1) = self.parser1.parse(source, pos)?;
        let (pos, result2) = self
            .parser2
            .parse(source, pos)
            .map_err(|e| e.rewind(start))?;
        let (pos, result3) = self
            .parser3
            .parse(source, pos)
            .map_err(|e| e.rewind(start))?;
        Ok((pos, (result1, result2, result3)))
    }
}

// Tuple4
#[derive(Clone)]
pub struct Tuple4<P1, P2, P3, P4, O1, O2, O3, O4> {
    parser1: P1,
    parser2: P2,
    parser3: P3,
    parser4: P4,
    _phantom: PhantomData<(O1, O2, O3, O4)>,
}

impl<P1, P2, P3, P4, O1, O2, O3, O4> Tuple4<P1, P2, P3, P4, O1, O2, O3, O4> {
    pub fn new(parser1: P1, parser2: P2, parser3: P3, parser4: P4) -> Self {
        Self {
            parser1,
            parser2,
            parser3,
            parser4,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, P3, P4, O1, O2, O3, O4> Parser<(O1, O2, O3, O4)>
    for Tuple4<P1, P2, P3, P4, O1, O2, O3, O4>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
    P3: Parser<O3>,
    P4: Parser<O4>,
{
    fn parse(&self, source: &str, pos: usize) -> ParseResult<(O1, O2, O3, O4)> {
        let start = pos;
        let (pos, result1) = self.parser1.parse(source, pos)?;
        let (pos, result2) = self
            .parser2
            .parse(source, pos)
            .map_err(|e| e.rewind(start))?;
        let (pos, result3) = self
            .parser3
            .parse(source, pos)
            .map_err(|e| e.rewind(start))?;
        let (pos, result4) = self
            .parser4
            .parse(source, pos)
            .map_err(|e| e.rewind(start))?;
        Ok((pos, (result1, result2, result3, result4)))
    }
}

/// Delimited: Parses content between left and right delimiters
///
/// Returns only the content parser's result.
#[derive(Clone)]
pub struct Delimited<L, P, R, LO, O, RO> {
    /// Parser for the left delimiter
    left: L,
    /// Parser for the content between delimiters
    parser: P,
    /// Parser for the right delimiter
    right: R,
    _phantom: PhantomData<(LO, O, RO)>,
}

impl<L, P, R, LO, O, RO> Delimited<L, P, R, LO, O, RO> {
    pub fn new(left: L, parser: P, right: R) -> Self {
        Self {
            left,
            parser,
            right,
            _phantom: PhantomData,
        }
    }
}

impl<L, P, R, LO, O, RO> Parser<O> for Delimited<L, P, R, LO, O, RO>
where
    L: Parser<LO>,
    P: Parser<O>,
    R: Parser<RO>,
{
    fn parse(&self, source: &str, pos: usize) -> ParseResult<O> {
        let start = pos;
        let (pos, _) = self.left.parse(source, pos)?;
        let (pos, value) = self
            .parser
            .parse(source, pos)
            .map_err(|e| e.rewind(start))?;
        let (pos, _) = self
            .right
            .parse(source, pos)
            .map_err(|e| e.rewind(start))?;
        Ok((pos, value))
    }
}

#[derive(Clone)]
pub struct WithContext<P, C> {
    parser: P,
    context: C,
}

impl<P, C> WithContext<P, C> {
    pub fn new(parser: P, context: C) -> Self {
        Self { parser, context }
    }
}

impl<O, P, C: ToString> Parser<O> for WithContext<P, C>
where
    P: Parser<O>,
{
    fn parse(&self, source: &str, pos: usize) -> ParseResult<O> {
        self.parser
            .parse(source, pos)
            .map_err(|e| e.with_context(self.context.to_string()))
    }
}

/// Lazy: Builds the inner parser only when it is used
///
/// Mutually recursive grammar rules refer to each other through `Lazy`, so
/// constructing one rule does not construct the rules it refers to.
#[derive(Clone)]
pub struct Lazy<F> {
    f: F,
}

impl<F> Lazy<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<O, F, P> Parser<O> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<O>,
{
    fn parse(&self, source: &str, pos: usize) -> ParseResult<O> {
        (self.f)().parse(source, pos)
    }
}
