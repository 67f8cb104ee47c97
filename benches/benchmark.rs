use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rulecomb::GrammarReader;
use rulecomb::analyzer::Parser;
use rulecomb::analyzer::parsers::rule::parse_rule;
use rulecomb::analyzer::prelude::*;

const GRAMMAR: &str = r#"# arithmetic
expression: term ^ (ws /[-+]/ ws)
term: factor ^ (ws /[*\/]/ ws)
factor: number | '(' ws expression ws ')' | name
number: /-?[0-9]+(\.[0-9]+)?/
name: /[a-z_][a-z0-9_]*/i
ws: /[ \t]*/
"#;

fn bench_rep(c: &mut Criterion) {
    let source = "ha-".repeat(500) + "ha";
    let laugh = rep(text("ha"), text("-"));
    c.bench_function("rep 501 items", |b| {
        b.iter(|| laugh.parse(black_box(&source), 0))
    });
}

fn bench_rule(c: &mut Criterion) {
    let parser = parse_rule();
    c.bench_function("parse nested rule", |b| {
        b.iter(|| {
            parser.parse(
                black_box("list: (item ^ (',' ws) | 'none') ('a' 'b' 'c' | /x+/i) ^ ';'"),
                0,
            )
        })
    });
}

fn bench_grammar(c: &mut Criterion) {
    let reader = GrammarReader::default();
    c.bench_function("read arithmetic grammar", |b| {
        b.iter(|| reader.read(black_box(GRAMMAR)))
    });
}

criterion_group!(benches, bench_rep, bench_rule, bench_grammar);
criterion_main!(benches);
