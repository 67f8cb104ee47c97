//! # Analyzer: Combinator Engine and Grammar Parsers
//!
//! The analyzer turns grammar rule definitions into expression trees using
//! a parser combinator pattern over plain strings.
//!
//! ## Core Components
//!
//! * **Parser Trait**: Defines the matcher contract ([`core`])
//! * **Atomic Matchers**: Literal text and anchored patterns ([`atomic`])
//! * **Combinators**: Building blocks for composing matchers ([`combinators`])
//! * **Grammar Parsers**: The rule definition language itself ([`parsers`])
//!
//! ## Position in the Pipeline
//!
//! ```text
//! Rule Source → Analyzer (raw tree) → Normalizer → Rule / Grammar
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use rulecomb::analyzer::Parser;
//! use rulecomb::analyzer::prelude::*;
//!
//! let laugh = rep(text("ha"), text("-"));
//! let (pos, found) = laugh.parse("ha-ha-ha!", 0).unwrap();
//! assert_eq!(pos, 8);
//! assert_eq!(found, vec!["ha", "ha", "ha"]);
//! ```

pub mod atomic;
pub mod combinators;
pub mod core;
pub mod parsers;
pub mod prelude;

pub use atomic::{Pattern, PatternError, PatternFlags, Text};
pub use self::core::ParseError;
pub use self::core::ParseResult;
pub use self::core::Parser;
