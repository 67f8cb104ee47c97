//! Property-based tests for the matchers and the rule syntax.

mod common;

use proptest::prelude::*;
use rulecomb::analyzer::Parser;
use rulecomb::analyzer::parsers::expression::{parse_expression, parse_union_item};
use rulecomb::analyzer::prelude::*;
use rulecomb::ast::RawExpression;
use rulecomb::normalizer::normalize;

/// Raw trees of every shape; normalizing them gives canonical trees.
fn raw_expression() -> impl Strategy<Value = RawExpression> {
    let leaf = prop_oneof![
        "[a-z ]{1,4}".prop_map(|value| RawExpression::text(&value)),
        ("[a-z]{1,3}", any::<bool>()).prop_map(|(source, ignore_case)| {
            RawExpression::Pattern {
                source,
                ignore_case,
                dot_all: false,
            }
        }),
        "[a-z_][a-z0-9_]{1,4}".prop_map(|name| RawExpression::rule_ref(&name)),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(RawExpression::group),
            (inner.clone(), inner.clone()).prop_map(|(t, s)| RawExpression::repetition(t, s)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| RawExpression::sequence(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| RawExpression::union(l, r)),
        ]
    })
}

proptest! {
    #[test]
    fn text_matches_exactly_at_position(
        prefix in "[a-z ]{0,6}",
        literal in "[a-z]{1,5}",
        suffix in "[a-z ]{0,6}",
    ) {
        let source = format!("{prefix}{literal}{suffix}");
        let pos = prefix.len();
        prop_assert_eq!(
            text(&literal).parse(&source, pos),
            Ok((pos + literal.len(), literal.clone()))
        );
    }

    #[test]
    fn text_failure_keeps_position(source in "[ab]{0,8}", literal in "[ab]{1,3}", pos in 0usize..10) {
        match text(&literal).parse(&source, pos) {
            Ok((end, value)) => {
                prop_assert_eq!(end, pos + literal.len());
                prop_assert_eq!(&source[pos..end], value.as_str());
            }
            Err(e) => prop_assert_eq!(e.position(), pos),
        }
    }

    #[test]
    fn rep_terminates_on_empty_matches(source in "[abc,; x]{0,20}") {
        let parser = rep(pattern("[abc]?").unwrap(), pattern("[,;]?").unwrap());
        let (end, items) = parser.parse(&source, 0).unwrap();
        prop_assert!(end <= source.len());
        prop_assert!(items.len() <= source.len() + 1);
    }

    #[test]
    fn expression_failure_keeps_position(source in "[a-z'/()|^ ]{0,16}", pos in 0usize..4) {
        prop_assume!(pos <= source.len());
        if let Err(e) = parse_union_item().parse(&source, pos) {
            prop_assert_eq!(e.position(), pos);
        }
    }

    #[test]
    fn formatted_expressions_parse_back(raw in raw_expression()) {
        let expression = normalize(raw);
        let rendered = expression.to_string();
        prop_assert_eq!(
            parse_expression().parse(&rendered, 0),
            Ok((rendered.len(), expression))
        );
    }
}
