use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use crate::analyzer::Parser;
use crate::analyzer::parsers::expression::*;
use crate::ast::{Expression, RawExpression};

fn text(value: &str) -> RawExpression {
    RawExpression::text(value)
}

fn pattern(source: &str) -> RawExpression {
    RawExpression::pattern(source)
}

fn rep(template: RawExpression, separator: RawExpression) -> RawExpression {
    RawExpression::repetition(template, separator)
}

fn seq(left: RawExpression, right: RawExpression) -> RawExpression {
    RawExpression::sequence(left, right)
}

fn union(left: RawExpression, right: RawExpression) -> RawExpression {
    RawExpression::union(left, right)
}

fn group(inner: RawExpression) -> RawExpression {
    RawExpression::group(inner)
}

#[test]
fn test_parse_identifier() {
    for input in ["abra", "_cadabra", "LaTeX", "ka_boom", "road66"] {
        assert_eq!(
            parse_identifier().parse(input, 0),
            Ok((input.len(), input.to_string()))
        );
    }
}

#[test]
fn test_parse_identifier_at_position() {
    assert_eq!(
        parse_identifier().parse("prefix^name", 7),
        Ok((11, "name".to_string()))
    );
    assert_eq!(
        parse_identifier().parse("valid_name:   some value", 0),
        Ok((10, "valid_name".to_string()))
    );
}

#[test]
fn test_parse_identifier_stops_on_non_word() {
    assert_eq!(
        parse_identifier().parse("li$tener", 0),
        Ok((2, "li".to_string()))
    );
}

#[test]
fn test_parse_identifier_rejects() {
    assert!(parse_identifier().parse("5nizza", 0).is_err());
    // at least two characters
    assert!(parse_identifier().parse("a", 0).is_err());
    assert!(parse_identifier().parse("", 0).is_err());
}

#[test]
fn test_parse_text_template() {
    let input = "'some template'";
    assert_eq!(
        parse_text_template().parse(input, 0),
        Ok((input.len(), text("some template")))
    );
}

#[test]
fn test_parse_text_template_keeps_escapes() {
    let input = r"'\'quoted\''";
    assert_eq!(
        parse_text_template().parse(input, 0),
        Ok((input.len(), text(r"\'quoted\'")))
    );
    let input = r"'back\\'";
    assert_eq!(
        parse_text_template().parse(input, 0),
        Ok((input.len(), text(r"back\\")))
    );
}

#[test]
fn test_parse_text_template_at_position() {
    assert_eq!(
        parse_text_template().parse("name: 'template'", 6),
        Ok((16, text("template")))
    );
}

#[test]
fn test_parse_text_template_rejects() {
    assert!(parse_text_template().parse("''", 0).is_err());

    let error = parse_text_template().parse("'not closed", 0).unwrap_err();
    assert_eq!(error.position(), 0);
    assert!(error.to_string().starts_with("text template"));
}

#[test]
fn test_parse_pattern_template() {
    let input = "/(some|any)? ?regex/";
    assert_eq!(
        parse_pattern_template().parse(input, 0),
        Ok((input.len(), pattern("(some|any)? ?regex")))
    );
}

#[test]
fn test_parse_pattern_template_keeps_escapes() {
    let input = r"/reg w\/slash&\$ymbols\./";
    assert_eq!(
        parse_pattern_template().parse(input, 0),
        Ok((input.len(), pattern(r"reg w\/slash&\$ymbols\.")))
    );
}

#[test]
fn test_parse_pattern_template_at_position() {
    assert_eq!(
        parse_pattern_template().parse("regular: /expressions?/", 9),
        Ok((23, pattern("expressions?")))
    );
}

#[test]
fn test_parse_pattern_template_rejects() {
    assert!(parse_pattern_template().parse("//", 0).is_err());
    assert_eq!(
        parse_pattern_template()
            .parse("/close me", 0)
            .unwrap_err()
            .position(),
        0
    );
}

#[test]
fn test_parse_pattern_template_ignore_case_flag() {
    let ignore_case = RawExpression::Pattern {
        source: "abc".to_string(),
        ignore_case: true,
        dot_all: false,
    };
    assert_eq!(parse_pattern_template().parse("/abc/i", 0), Ok((6, ignore_case)));

    // a repeated flag is not a flag, and other letters are left in place
    for input in ["/abc/ii", "/abc/iI", "/abc/s", "/abc/m"] {
        assert_eq!(
            parse_pattern_template().parse(input, 0),
            Ok((5, pattern("abc"))),
            "input {input:?}"
        );
    }
}

#[test]
fn test_parse_rule_ref() {
    assert_eq!(
        parse_rule_ref().parse("/reg/ ruleName", 6),
        Ok((14, RawExpression::rule_ref("ruleName")))
    );
}

#[test]
fn test_parse_repetition() {
    assert_eq!(
        parse_repetition().parse("'ha'^'-'", 0),
        Ok((8, rep(text("ha"), text("-"))))
    );
}

#[test]
fn test_parse_repetition_chain_nests_right() {
    assert_eq!(
        parse_repetition().parse("'a'^'b'^'c'", 0),
        Ok((11, rep(text("a"), rep(text("b"), text("c")))))
    );
}

#[test]
fn test_parse_repetition_optional_spaces() {
    let input = "/a/  ^ 'b'";
    assert_eq!(
        parse_repetition().parse(input, 0),
        Ok((input.len(), rep(pattern("a"), text("b"))))
    );
}

#[test]
fn test_parse_repetition_at_position() {
    assert_eq!(
        parse_repetition().parse("repeat: /[hH]o/ ^ '!'", 8),
        Ok((21, rep(pattern("[hH]o"), text("!"))))
    );
}

#[test]
fn test_parse_repetition_item_falls_back_to_atomic() {
    assert_eq!(
        parse_repetition_item().parse("'alone' 'x'", 0),
        Ok((7, text("alone")))
    );
}

#[test]
fn test_parse_sequence() {
    let input = "'Parse' 'It'";
    assert_eq!(
        parse_sequence().parse(input, 0),
        Ok((input.len(), seq(text("Parse"), text("It"))))
    );
}

#[test]
fn test_parse_sequence_chain_nests_right() {
    let input = "'we ' /go(nna|ing to) / 'parse'";
    assert_eq!(
        parse_sequence().parse(input, 0),
        Ok((
            input.len(),
            seq(text("we "), seq(pattern("go(nna|ing to) "), text("parse")))
        ))
    );
}

#[test]
fn test_parse_sequence_multiple_spaces() {
    let input = "'many'   'spaces'";
    assert_eq!(
        parse_sequence().parse(input, 0),
        Ok((input.len(), seq(text("many"), text("spaces"))))
    );
    let input = "'tab'\t'separated'";
    assert_eq!(
        parse_sequence().parse(input, 0),
        Ok((input.len(), seq(text("tab"), text("separated"))))
    );
}

#[test]
fn test_parse_sequence_at_position() {
    assert_eq!(
        parse_sequence().parse("key: 'sequential' /parser/", 5),
        Ok((26, seq(text("sequential"), pattern("parser"))))
    );
}

#[test]
fn test_parse_sequence_requires_whitespace() {
    let error = parse_sequence().parse("'cannot''parse'", 0).unwrap_err();
    assert_eq!(error.position(), 0);

    // the item alone still parses, leaving the rest
    assert_eq!(
        parse_sequence_item().parse("'cannot''parse'", 0),
        Ok((8, text("cannot")))
    );
}

#[test]
fn test_parse_sequence_of_repetitions() {
    let input = "'a' ^ ',' 'b'";
    assert_eq!(
        parse_sequence().parse(input, 0),
        Ok((input.len(), seq(rep(text("a"), text(",")), text("b"))))
    );
}

#[test]
fn test_parse_union() {
    assert_eq!(
        parse_union().parse("'this'|'that'", 0),
        Ok((13, union(text("this"), text("that"))))
    );
}

#[test]
fn test_parse_union_chain_nests_right() {
    let input = "'parse'|'translate'|/read/";
    assert_eq!(
        parse_union().parse(input, 0),
        Ok((
            input.len(),
            union(text("parse"), union(text("translate"), pattern("read")))
        ))
    );
}

#[test]
fn test_parse_union_optional_spaces() {
    let input = "'connecting'  |   'people'";
    assert_eq!(
        parse_union().parse(input, 0),
        Ok((input.len(), union(text("connecting"), text("people"))))
    );
}

#[test]
fn test_parse_union_at_position() {
    assert_eq!(
        parse_union().parse("union: /reg(ex)?/ | 'regular expression'", 7),
        Ok((40, union(pattern("reg(ex)?"), text("regular expression"))))
    );
}

#[test]
fn test_parse_union_of_sequences() {
    let input = "'a' 'b' | 'c'";
    assert_eq!(
        parse_union().parse(input, 0),
        Ok((input.len(), union(seq(text("a"), text("b")), text("c"))))
    );
}

#[test]
fn test_parse_group_wraps_every_tier() {
    let cases = [
        ("('group')", text("group")),
        ("(/group/)", pattern("group")),
        ("('group' ^ 'and')", rep(text("group"), text("and"))),
        ("('long' 'group')", seq(text("long"), text("group"))),
        (
            "('group' | 'group anyway')",
            union(text("group"), text("group anyway")),
        ),
    ];
    for (input, inner) in cases {
        assert_eq!(
            parse_group().parse(input, 0),
            Ok((input.len(), group(inner))),
            "input {input:?}"
        );
    }
}

#[test]
fn test_parse_group_with_mixed_tiers() {
    let input = "(/a/ 'b' ^ 'c')";
    assert_eq!(
        parse_group().parse(input, 0),
        Ok((
            input.len(),
            group(seq(pattern("a"), rep(text("b"), text("c"))))
        ))
    );
}

#[test]
fn test_parse_nested_groups() {
    let input = "(('a' ^ 'b') ^ 'c')";
    assert_eq!(
        parse_group().parse(input, 0),
        Ok((
            input.len(),
            group(rep(group(rep(text("a"), text("b"))), text("c")))
        ))
    );
}

#[test]
fn test_parse_deeply_nested_groups_in_linear_time() {
    const DEPTH: usize = 24;
    let input = format!("{}'a' 'b' | 'c'{}", "(".repeat(DEPTH), ")".repeat(DEPTH));
    let mut expected = union(seq(text("a"), text("b")), text("c"));
    for _ in 0..DEPTH {
        expected = group(expected);
    }

    let started = Instant::now();
    assert_eq!(parse_union_item().parse(&input, 0), Ok((input.len(), expected)));
    assert_eq!(
        parse_expression().parse(&input, 0),
        Ok((
            input.len(),
            Expression::Union(vec![
                Expression::Sequence(vec![Expression::text("a"), Expression::text("b")]),
                Expression::text("c"),
            ])
        ))
    );
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_parse_group_inner_spaces() {
    let input = "(  'I '  'love '  'spaces!!!'     )";
    assert_eq!(
        parse_group().parse(input, 0),
        Ok((
            input.len(),
            group(seq(text("I "), seq(text("love "), text("spaces!!!"))))
        ))
    );
}

#[test]
fn test_parse_group_at_position() {
    assert_eq!(
        parse_group().parse("littleGroup: (/little group/)", 13),
        Ok((29, group(pattern("little group"))))
    );
}

#[test]
fn test_parse_group_parentheses_inside_templates() {
    let input = "('test (passes)')";
    assert_eq!(
        parse_group().parse(input, 0),
        Ok((input.len(), group(text("test (passes)"))))
    );
    let input = r"(/passes (too|) (=\))?/)";
    assert_eq!(
        parse_group().parse(input, 0),
        Ok((input.len(), group(pattern(r"passes (too|) (=\))?"))))
    );
}

#[test]
fn test_parse_group_rejects() {
    assert!(parse_group().parse("()", 0).is_err());
    let error = parse_group().parse("('kill ' 'me'", 0).unwrap_err();
    assert_eq!(error.position(), 0);
    assert!(error.to_string().starts_with("group"));
}

#[test]
fn test_parse_atomic_order() {
    assert_eq!(parse_atomic().parse("'t'", 0), Ok((3, text("t"))));
    assert_eq!(parse_atomic().parse("/p/", 0), Ok((3, pattern("p"))));
    assert_eq!(
        parse_atomic().parse("ref", 0),
        Ok((3, RawExpression::rule_ref("ref")))
    );
    assert_eq!(parse_atomic().parse("('g')", 0), Ok((5, group(text("g")))));
    assert!(parse_atomic().parse("| 'x'", 0).is_err());
}

#[test]
fn test_parse_union_item_reports_context() {
    let error = parse_union_item().parse("^", 0).unwrap_err();
    assert_eq!(error.position(), 0);
    assert!(error.to_string().starts_with("expression at position 0"));
}

#[test]
fn test_parse_expression_flattens_sequence() {
    let input = "'a' 'b' 'c'";
    assert_eq!(
        parse_expression().parse(input, 0),
        Ok((
            input.len(),
            Expression::Sequence(vec![
                Expression::text("a"),
                Expression::text("b"),
                Expression::text("c"),
            ])
        ))
    );
}

#[test]
fn test_parse_expression_precedence() {
    let input = "'a' | 'b' 'c'";
    assert_eq!(
        parse_expression().parse(input, 0),
        Ok((
            input.len(),
            Expression::Union(vec![
                Expression::text("a"),
                Expression::Sequence(vec![Expression::text("b"), Expression::text("c")]),
            ])
        ))
    );
}

#[test]
fn test_parse_expression_keeps_repetition_nested() {
    let input = "'a'^'b'^'c'";
    assert_eq!(
        parse_expression().parse(input, 0),
        Ok((
            input.len(),
            Expression::repetition(
                Expression::text("a"),
                Expression::repetition(Expression::text("b"), Expression::text("c")),
            )
        ))
    );
}

#[test]
fn test_parse_expression_stops_before_trailing_text() {
    assert_eq!(
        parse_expression().parse("'a' 'b'  # comment", 0),
        Ok((7, Expression::Sequence(vec![Expression::text("a"), Expression::text("b")])))
    );
}
