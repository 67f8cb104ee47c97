//! # Rule Expression Parsers
//!
//! The expression language of rule definitions, from tightest to loosest
//! binding:
//!
//! | Tier       | Syntax                                  | Associativity |
//! |------------|-----------------------------------------|---------------|
//! | Atomic     | `'text'`, `/pattern/i`, `name`, `( … )` | -             |
//! | Repetition | `atomic ^ repetition-or-atomic`         | right         |
//! | Sequence   | `item item` (at least one space/tab)    | right         |
//! | Union      | `item \| item`                          | right         |
//!
//! Each tier only uses tighter tiers as its left operand and recurses into
//! itself on the right, so precedence needs no table and no rule is left
//! recursive. The parsers here return the raw binary tree; see
//! [`parse_expression`] for the normalized form.
//!
//! Only a trailing `i` is recognised as a pattern flag. It is taken when the
//! character after it is not another `i`/`I`; any other trailing letter is
//! left in the input.

use lazy_static::lazy_static;

use super::super::{atomic::Pattern, core::*, prelude::*};
use crate::ast::{Expression, RawExpression};
use crate::normalizer::normalize;

lazy_static! {
    static ref IDENTIFIER: Pattern = Pattern::new("[_a-zA-Z][_a-zA-Z0-9]+").unwrap();
    static ref TEXT_BODY: Pattern = Pattern::new(r"(?:\\.|[^'\\])+").unwrap();
    static ref PATTERN_BODY: Pattern = Pattern::new(r"(?:\\.|[^/\\])+").unwrap();
    static ref REPEAT_OPERATOR: Pattern = Pattern::new(r"[ \t]*\^[ \t]*").unwrap();
    static ref SEQUENCE_GAP: Pattern = Pattern::new(r"[ \t]+").unwrap();
    static ref UNION_OPERATOR: Pattern = Pattern::new(r"[ \t]*\|[ \t]*").unwrap();
    static ref GROUP_OPEN: Pattern = Pattern::new(r"\([ \t]*").unwrap();
    static ref GROUP_CLOSE: Pattern = Pattern::new(r"[ \t]*\)").unwrap();
}

/// Optional `i` right after the closing slash of a pattern template.
struct IgnoreCaseFlag;

impl Parser<bool> for IgnoreCaseFlag {
    fn parse(&self, source: &str, pos: usize) -> ParseResult<bool> {
        let mut chars = source.get(pos..).unwrap_or_default().chars();
        match (chars.next(), chars.next()) {
            (Some('i'), next) if !matches!(next, Some('i' | 'I')) => Ok((pos + 1, true)),
            _ => Ok((pos, false)),
        }
    }
}

/// `[_a-zA-Z]` followed by one or more word characters.
pub fn parse_identifier() -> impl Parser<String> {
    &*IDENTIFIER
}

/// `'…'`: non-empty, `\'` and `\\` escapes are kept as written.
pub fn parse_text_template() -> impl Parser<RawExpression> {
    with_context(
        map(
            delimited(text("'"), &*TEXT_BODY, text("'")),
            RawExpression::Text,
        ),
        "text template",
    )
}

/// `/…/` with an optional `i` flag: non-empty, `\/` and `\\` escapes are kept as written.
pub fn parse_pattern_template() -> impl Parser<RawExpression> {
    with_context(
        map(
            tuple4(text("/"), &*PATTERN_BODY, text("/"), IgnoreCaseFlag),
            |(_, source, _, ignore_case)| RawExpression::Pattern {
                source,
                ignore_case,
                dot_all: false,
            },
        ),
        "pattern template",
    )
}

pub fn parse_rule_ref() -> impl Parser<RawExpression> {
    map(parse_identifier(), RawExpression::RuleRef)
}

pub fn parse_group() -> impl Parser<RawExpression> {
    with_context(
        map(
            delimited(
                &*GROUP_OPEN,
                lazy(parse_union_item),
                &*GROUP_CLOSE,
            ),
            RawExpression::group,
        ),
        "group",
    )
}

pub fn parse_atomic() -> impl Parser<RawExpression> {
    union::<RawExpression>(vec![
        Box::new(parse_text_template()),
        Box::new(parse_pattern_template()),
        Box::new(parse_rule_ref()),
        Box::new(parse_group()),
    ])
}

/// `atomic ^ item`, the operator required.
pub fn parse_repetition() -> impl Parser<RawExpression> {
    map(
        tuple3(
            parse_atomic(),
            &*REPEAT_OPERATOR,
            lazy(parse_repetition_item),
        ),
        |(template, _, separator)| RawExpression::repetition(template, separator),
    )
}

/// A repetition or a lone atomic.
///
/// The left operand is parsed once; the operator and the right-hand side
/// are optional. The same holds for the two tiers above, which keeps parse
/// time linear in the nesting depth of groups.
pub fn parse_repetition_item() -> impl Parser<RawExpression> {
    map(
        tuple2(
            parse_atomic(),
            optional(preceded(&*REPEAT_OPERATOR, lazy(parse_repetition_item))),
        ),
        |(template, separator)| match separator {
            Some(separator) => RawExpression::repetition(template, separator),
            None => template,
        },
    )
}

pub fn parse_sequence() -> impl Parser<RawExpression> {
    map(
        tuple3(
            parse_repetition_item(),
            &*SEQUENCE_GAP,
            lazy(parse_sequence_item),
        ),
        |(left, _, right)| RawExpression::sequence(left, right),
    )
}

pub fn parse_sequence_item() -> impl Parser<RawExpression> {
    map(
        tuple2(
            parse_repetition_item(),
            optional(preceded(&*SEQUENCE_GAP, lazy(parse_sequence_item))),
        ),
        |(left, right)| match right {
            Some(right) => RawExpression::sequence(left, right),
            None => left,
        },
    )
}

pub fn parse_union() -> impl Parser<RawExpression> {
    map(
        tuple3(
            parse_sequence_item(),
            &*UNION_OPERATOR,
            lazy(parse_union_item),
        ),
        |(left, _, right)| RawExpression::union(left, right),
    )
}

pub fn parse_union_item() -> impl Parser<RawExpression> {
    with_context(
        map(
            tuple2(
                parse_sequence_item(),
                optional(preceded(&*UNION_OPERATOR, lazy(parse_union_item))),
            ),
            |(left, right)| match right {
                Some(right) => RawExpression::union(left, right),
                None => left,
            },
        ),
        "expression",
    )
}

/// A complete expression, normalized.
pub fn parse_expression() -> impl Parser<Expression> {
    map(parse_union_item(), normalize)
}
