//! # Grammar Reader
//!
//! Reads a whole grammar source, one rule definition per line:
//!
//! ```text
//! # comment lines are skipped
//! list: item ^ ','     # so are trailing comments
//! item: /[a-z]+/i | number
//! ```
//!
//! Lines end with `\n` or `\r\n`. Blank lines are skipped. Every other line
//! must hold exactly one rule; the reader reports the 1-based line number of
//! the first one that does not.

use std::path::Path;

use tracing::{debug, warn};

use crate::analyzer::Parser;
use crate::analyzer::parsers::comment::parse_comment;
use crate::analyzer::parsers::rule::read_rule;
use crate::ast::{Grammar, Rule};
use crate::config::ReaderConfig;
use crate::{Error, InternalResult};

#[derive(Debug, Clone, Default)]
pub struct GrammarReader {
    config: ReaderConfig,
}

impl GrammarReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    #[tracing::instrument(level = "debug", skip(self, source), fields(bytes = source.len()))]
    pub fn read(&self, source: &str) -> InternalResult<Grammar> {
        let mut grammar = Grammar::new();

        for (index, line) in source.lines().enumerate() {
            let line_number = index + 1;
            let Some(rule) = self.read_line(line, line_number)? else {
                continue;
            };
            self.add_rule(&mut grammar, rule, line_number)?;
        }

        debug!(target: "grammar_reader", rules = grammar.len(), "grammar read");
        Ok(grammar)
    }

    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> InternalResult<Grammar> {
        let source = std::fs::read_to_string(path)?;
        self.read(&source)
    }

    /// Reads the rule on one line, or `None` for a blank or comment line.
    fn read_line(&self, line: &str, line_number: usize) -> InternalResult<Option<Rule>> {
        let start = skip_spaces(line, 0);
        if start == line.len() || self.is_comment(line, start) {
            return Ok(None);
        }

        let (end, rule) =
            read_rule(line, start).map_err(|e| Error::syntax(line_number, e.to_string()))?;

        let rest = skip_spaces(line, end);
        if self.config.require_full_line && rest < line.len() && !self.is_comment(line, rest) {
            return Err(Error::syntax(
                line_number,
                format!(
                    "unexpected `{}` after rule `{}`",
                    line[rest..].trim_end(),
                    rule.name
                ),
            ));
        }
        Ok(Some(rule))
    }

    fn is_comment(&self, line: &str, pos: usize) -> bool {
        self.config.skip_comments && parse_comment().parse(line, pos).is_ok()
    }

    fn add_rule(&self, grammar: &mut Grammar, rule: Rule, line_number: usize) -> InternalResult<()> {
        if grammar.contains(&rule.name) && !self.config.allow_duplicate_rules {
            return Err(Error::DuplicateRule {
                name: rule.name,
                line: line_number,
            });
        }
        if let Some(replaced) = grammar.insert(rule) {
            warn!(
                target: "grammar_reader",
                name = %replaced.name,
                line = line_number,
                "rule redefined"
            );
        }
        Ok(())
    }
}

fn skip_spaces(line: &str, pos: usize) -> usize {
    line[pos..]
        .find(|c: char| c != ' ' && c != '\t')
        .map_or(line.len(), |offset| pos + offset)
}
