//! Expression trees for grammar rules.
//!
//! [`RawExpression`] is what the expression grammar produces: binary,
//! right-nested chains with explicit groups. [`Expression`] is the canonical
//! form the normalizer turns it into, and the form every consumer sees.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::analyzer::{Pattern, PatternError, PatternFlags};

/// Canonical expression tree.
///
/// `Sequence` and `Union` hold at least two items and never directly hold an
/// item of their own variant. `Repetition` is always binary; a chain
/// `a ^ b ^ c` stays nested in the separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Expression {
    Text(String),
    Pattern {
        source: String,
        ignore_case: bool,
        dot_all: bool,
    },
    RuleRef(String),
    Repetition {
        template: Box<Expression>,
        separator: Box<Expression>,
    },
    Sequence(Vec<Expression>),
    Union(Vec<Expression>),
}

/// Expression tree as parsed, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawExpression {
    Text(String),
    Pattern {
        source: String,
        ignore_case: bool,
        dot_all: bool,
    },
    RuleRef(String),
    /// Parenthesized expression; transparent once normalized
    Group(Box<RawExpression>),
    Repetition {
        template: Box<RawExpression>,
        separator: Box<RawExpression>,
    },
    Sequence(Box<RawExpression>, Box<RawExpression>),
    Union(Box<RawExpression>, Box<RawExpression>),
}

impl RawExpression {
    pub fn text(value: &str) -> Self {
        RawExpression::Text(value.to_string())
    }

    pub fn pattern(source: &str) -> Self {
        RawExpression::Pattern {
            source: source.to_string(),
            ignore_case: false,
            dot_all: false,
        }
    }

    pub fn rule_ref(name: &str) -> Self {
        RawExpression::RuleRef(name.to_string())
    }

    pub fn group(inner: RawExpression) -> Self {
        RawExpression::Group(Box::new(inner))
    }

    pub fn repetition(template: RawExpression, separator: RawExpression) -> Self {
        RawExpression::Repetition {
            template: Box::new(template),
            separator: Box::new(separator),
        }
    }

    pub fn sequence(left: RawExpression, right: RawExpression) -> Self {
        RawExpression::Sequence(Box::new(left), Box::new(right))
    }

    pub fn union(left: RawExpression, right: RawExpression) -> Self {
        RawExpression::Union(Box::new(left), Box::new(right))
    }
}

impl Expression {
    pub fn text(value: &str) -> Self {
        Expression::Text(value.to_string())
    }

    pub fn pattern(source: &str) -> Self {
        Expression::Pattern {
            source: source.to_string(),
            ignore_case: false,
            dot_all: false,
        }
    }

    pub fn rule_ref(name: &str) -> Self {
        Expression::RuleRef(name.to_string())
    }

    pub fn repetition(template: Expression, separator: Expression) -> Self {
        Expression::Repetition {
            template: Box::new(template),
            separator: Box::new(separator),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Compiles every pattern in the tree, stopping at the first invalid one.
    pub fn check_patterns(&self) -> Result<(), PatternError> {
        match self {
            Expression::Pattern {
                source,
                ignore_case,
                dot_all,
            } => {
                let flags = PatternFlags {
                    ignore_case: *ignore_case,
                    dot_all: *dot_all,
                };
                Pattern::with_flags(source, flags).map(|_| ())
            }
            Expression::Repetition {
                template,
                separator,
            } => {
                template.check_patterns()?;
                separator.check_patterns()
            }
            Expression::Sequence(items) | Expression::Union(items) => {
                items.iter().try_for_each(Expression::check_patterns)
            }
            Expression::Text(_) | Expression::RuleRef(_) => Ok(()),
        }
    }

    /// Names of all rules referenced from this expression, in order of appearance.
    pub fn rule_refs(&self) -> Vec<&str> {
        let mut refs = Vec::new();
        self.collect_rule_refs(&mut refs);
        refs
    }

    fn collect_rule_refs<'a>(&'a self, refs: &mut Vec<&'a str>) {
        match self {
            Expression::RuleRef(name) => refs.push(name),
            Expression::Repetition {
                template,
                separator,
            } => {
                template.collect_rule_refs(refs);
                separator.collect_rule_refs(refs);
            }
            Expression::Sequence(items) | Expression::Union(items) => {
                for item in items {
                    item.collect_rule_refs(refs);
                }
            }
            Expression::Text(_) | Expression::Pattern { .. } => {}
        }
    }

    // Binding strength in the rule syntax; higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Expression::Union(_) => 0,
            Expression::Sequence(_) => 1,
            Expression::Repetition { .. } => 2,
            Expression::Text(_) | Expression::Pattern { .. } | Expression::RuleRef(_) => 3,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, min_precedence: u8) -> fmt::Result {
        if self.precedence() < min_precedence {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }

    fn fmt_items(
        items: &[Expression],
        f: &mut fmt::Formatter<'_>,
        separator: &str,
        min_precedence: u8,
    ) -> fmt::Result {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            item.fmt_operand(f, min_precedence)?;
        }
        Ok(())
    }
}

/// Renders the expression in rule syntax. Parentheses are added wherever a
/// child binds looser than its position allows.
///
/// For trees the rule grammar produces, the output parses back to the same
/// tree. Others do not survive the trip: `dot_all` has no syntax and is not
/// written, and an empty `Text` renders as `''`, which does not parse.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Text(value) => write!(f, "'{}'", value),
            Expression::Pattern {
                source,
                ignore_case,
                ..
            } => {
                write!(f, "/{}/", source)?;
                if *ignore_case {
                    f.write_str("i")?;
                }
                Ok(())
            }
            Expression::RuleRef(name) => f.write_str(name),
            Expression::Repetition {
                template,
                separator,
            } => {
                template.fmt_operand(f, 3)?;
                f.write_str(" ^ ")?;
                separator.fmt_operand(f, 2)
            }
            Expression::Sequence(items) => Self::fmt_items(items, f, " ", 2),
            Expression::Union(items) => Self::fmt_items(items, f, " | ", 1),
        }
    }
}

/// A named rule: `name: expression`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub expression: Expression,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.expression)
    }
}

/// Rules read from one grammar source, in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    rules: Vec<Rule>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Adds a rule, replacing an earlier rule of the same name in place.
    /// Returns the replaced rule.
    pub fn insert(&mut self, rule: Rule) -> Option<Rule> {
        match self.rules.iter_mut().find(|existing| existing.name == rule.name) {
            Some(existing) => Some(std::mem::replace(existing, rule)),
            None => {
                self.rules.push(rule);
                None
            }
        }
    }

    /// Compiles the patterns of every rule, reporting the first invalid one.
    pub fn check_patterns(&self) -> Result<(), PatternError> {
        self.rules
            .iter()
            .try_for_each(|rule| rule.expression.check_patterns())
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}
