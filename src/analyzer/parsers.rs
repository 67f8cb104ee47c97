//! # Grammar Definition Parsers
//!
//! Parsers for the rule definition language, built from the combinators in
//! [`super::combinators`]:
//!
//! * [`expression`]: the expression tiers, from atomic templates up to union
//! * [`rule`]: `name: expression` definitions
//! * [`comment`]: `#` line comments

pub mod comment;
pub mod expression;
pub mod rule;

#[cfg(test)]
mod tests;
