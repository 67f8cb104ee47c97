use super::atomic::{Pattern, PatternError, PatternFlags, Text};
use super::combinators::*;
use super::core::Parser;

pub fn text(literal: &str) -> Text {
    Text::new(literal)
}

pub fn pattern(source: &str) -> Result<Pattern, PatternError> {
    Pattern::new(source)
}

pub fn pattern_with_flags(source: &str, flags: PatternFlags) -> Result<Pattern, PatternError> {
    Pattern::with_flags(source, flags)
}

/// Alternation: the first parser that matches wins.
pub fn union<O>(parsers: Vec<Box<dyn Parser<O>>>) -> Choice<O> {
    Choice::new(parsers)
}

/// Concatenation of parsers sharing an output type.
pub fn seq<O>(parsers: Vec<Box<dyn Parser<O>>>) -> Sequence<O> {
    Sequence::new(parsers)
}

/// One or more `template` matches joined by `separator`; never fails.
pub fn rep<P, S, O, SO>(template: P, separator: S) -> Repetition<P, S, O, SO>
where
    P: Parser<O>,
    S: Parser<SO>,
{
    Repetition::new(template, separator)
}

pub fn map<P, F, A, B>(parser: P, f: F) -> Map<P, F, A, B>
where
    P: Parser<A>,
    F: Fn(A) -> B,
{
    Map::new(parser, f)
}

pub fn preceded<P1, P2, O1, O>(parser1: P1, parser2: P2) -> Preceded<P1, P2, O1, O>
where
    P1: Parser<O1>,
    P2: Parser<O>,
{
    Preceded::new(parser1, parser2)
}

pub fn optional<P, O>(parser: P) -> Optional<P, O>
where
    P: Parser<O>,
{
    Optional::new(parser)
}

pub fn delimited<L, P, R, LO, O, RO>(left: L, parser: P, right: R) -> Delimited<L, P, R, LO, O, RO>
where
    L: Parser<LO>,
    P: Parser<O>,
    R: Parser<RO>,
{
    Delimited::new(left, parser, right)
}

pub fn tuple2<P1, P2, O1, O2>(parser1: P1, parser2: P2) -> Tuple2<P1, P2, O1, O2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    Tuple2::new(parser1, parser2)
}

pub fn tuple3<P1, P2, P3, O1, O2, O3>(
    parser1: P1,
    parser2: P2,
    parser3: P3,
) -> Tuple3<P1, P2, P3, O1, O2, O3>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
    P3: Parser<O3>,
{
    Tuple3::new(parser1, parser2, parser3)
}

pub fn tuple4<P1, P2, P3, P4, O1, O2, O3, O4>(
    parser1: P1,
    parser2: P2,
    parser3: P3,
    parser4: P4,
) -> Tuple4<P1, P2, P3, P4, O1, O2, O3, O4>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
    P3: Parser<O3>,
    P4: Parser<O4>,
{
    Tuple4::new(parser1, parser2, parser3, parser4)
}

pub fn with_context<P, O, C>(parser: P, c: C) -> WithContext<P, C>
where
    P: Parser<O>,
{
    WithContext::new(parser, c)
}

pub fn lazy<O, F, P>(f: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<O>,
{
    Lazy::new(f)
}
