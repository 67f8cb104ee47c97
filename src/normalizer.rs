//! # Tree Normalizer
//!
//! The expression grammar encodes precedence and associativity structurally,
//! so what it produces is a tree of binary, right-nested chains with explicit
//! groups:
//!
//! ```text
//! 'a' 'b' 'c'   →   Sequence('a', Sequence('b', 'c'))
//! ```
//!
//! Normalization turns that into the canonical n-ary form:
//!
//! * groups disappear, leaving their normalized content
//! * a `Sequence`/`Union` absorbs the items of any operand of the same variant
//! * a `Repetition` keeps its two operands and is never flattened
//! * leaves are copied unchanged
//!
//! ```text
//! Sequence('a', Sequence('b', 'c'))   →   Sequence['a', 'b', 'c']
//! ```
//!
//! Both trees are closed enums, so there is no node the normalizer could fail
//! to recognise.

use crate::ast::{Expression, RawExpression};

pub fn normalize(raw: RawExpression) -> Expression {
    match raw {
        RawExpression::Text(value) => Expression::Text(value),
        RawExpression::Pattern {
            source,
            ignore_case,
            dot_all,
        } => Expression::Pattern {
            source,
            ignore_case,
            dot_all,
        },
        RawExpression::RuleRef(name) => Expression::RuleRef(name),
        RawExpression::Group(inner) => normalize(*inner),
        RawExpression::Repetition {
            template,
            separator,
        } => Expression::Repetition {
            template: Box::new(normalize(*template)),
            separator: Box::new(normalize(*separator)),
        },
        RawExpression::Sequence(left, right) => {
            let mut items = Vec::new();
            for operand in [*left, *right] {
                match normalize(operand) {
                    Expression::Sequence(nested) => items.extend(nested),
                    other => items.push(other),
                }
            }
            Expression::Sequence(items)
        }
        RawExpression::Union(left, right) => {
            let mut items = Vec::new();
            for operand in [*left, *right] {
                match normalize(operand) {
                    Expression::Union(nested) => items.extend(nested),
                    other => items.push(other),
                }
            }
            Expression::Union(items)
        }
    }
}
