//! # rulecomb: Parser Combinators and a Grammar Rule Reader
//!
//! rulecomb has two layers:
//!
//! 1. A small parser combinator engine over strings ([`analyzer`]): exact
//!    text and anchored patterns, combined by alternation, concatenation and
//!    separated repetition.
//! 2. A reader for grammar descriptions built on that engine. A rule such as
//!
//!    ```text
//!    list: item ^ ',' | 'none'
//!    ```
//!
//!    becomes a named [`Rule`] holding a canonical [`Expression`] tree.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Grammar Source → GrammarReader → Rule Parser → Normalizer → Grammar
//! ```
//!
//! ### Stage 1: Line Reading
//!
//! The [`grammar_reader`] module walks the source line by line, skipping
//! blank lines and `#` comments, and hands each remaining line to the rule
//! parser. Its behaviour is tuned by [`config::ReaderConfig`].
//!
//! ### Stage 2: Parsing
//!
//! The [`analyzer::parsers`] module parses `name: expression`. The expression
//! grammar encodes precedence in its structure, so it yields a raw binary
//! tree ([`ast::RawExpression`]).
//!
//! ### Stage 3: Normalization
//!
//! The [`normalizer`] removes groups and flattens nested sequences and unions
//! into the canonical form.
//!
//! ## Example
//!
//! ```
//! use rulecomb::{Expression, GrammarReader};
//!
//! let grammar = GrammarReader::default()
//!     .read("greeting: 'hello' | 'hi'\n# done\n")
//!     .unwrap();
//! let rule = grammar.get("greeting").unwrap();
//! assert_eq!(
//!     rule.expression,
//!     Expression::Union(vec![Expression::text("hello"), Expression::text("hi")])
//! );
//! assert_eq!(rule.to_string(), "greeting: 'hello' | 'hi'");
//! ```

pub mod analyzer;
pub mod ast;
pub mod config;
pub mod error;
pub mod grammar_reader;
pub mod normalizer;

// Re-exports
pub use ast::*;
pub use config::ReaderConfig;
pub use error::*;
pub use grammar_reader::GrammarReader;
