//! # Comment Handling
//!
//! Grammar sources use `#` line comments. A comment runs to the end of the
//! line and takes the line terminator (`\n`, `\r\n` or `\r`) with it; a
//! comment may also end the input.

use lazy_static::lazy_static;

use super::super::{atomic::Pattern, core::*, prelude::*};

lazy_static! {
    static ref COMMENT_BODY: Pattern = Pattern::new(r"[^\r\n]*").unwrap();
    static ref LINE_END: Pattern = Pattern::new(r"\r\n|\n|\r|\z").unwrap();
}

/// Marker value for a skipped comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment;

/// Parses a line comment, leaving the position at the start of the next line.
///
/// # Examples
///
/// ```
/// # use rulecomb::analyzer::Parser;
/// # use rulecomb::analyzer::parsers::comment::{parse_comment, Comment};
/// let source = "# about this grammar\nname: 'value'";
/// assert_eq!(parse_comment().parse(source, 0), Ok((21, Comment)));
/// ```
pub fn parse_comment() -> impl Parser<Comment> {
    with_context(
        map(
            tuple3(text("#"), &*COMMENT_BODY, &*LINE_END),
            |_| Comment,
        ),
        "comment",
    )
}
