//! Rule definitions: `name: expression`.
//!
//! The reader is position based. It reads one rule starting at the given
//! offset and reports where the rule ended; it does not split lines or
//! require the rest of the input to be empty.

use lazy_static::lazy_static;
use tracing::debug;

use super::super::{atomic::Pattern, core::*, prelude::*};
use super::expression::{parse_identifier, parse_union_item};
use crate::ast::Rule;
use crate::normalizer::normalize;

lazy_static! {
    static ref OPTIONAL_SPACES: Pattern = Pattern::new(r"[ \t]*").unwrap();
}

/// An identifier immediately followed by `:`.
pub fn parse_rule_name() -> impl Parser<String> {
    map(tuple2(parse_identifier(), text(":")), |(name, _)| name)
}

pub fn parse_rule() -> impl Parser<Rule> {
    with_context(
        map(
            tuple3(parse_rule_name(), &*OPTIONAL_SPACES, parse_union_item()),
            |(name, _, raw)| Rule {
                name,
                expression: normalize(raw),
            },
        ),
        "rule",
    )
}

/// Reads one rule definition starting at `pos`.
#[tracing::instrument(level = "debug", skip(source))]
pub fn read_rule(source: &str, pos: usize) -> ParseResult<Rule> {
    let (end, rule) = parse_rule().parse(source, pos)?;
    debug!(
        name = %rule.name,
        kind = rule.expression.kind(),
        end,
        "rule read"
    );
    Ok((end, rule))
}
