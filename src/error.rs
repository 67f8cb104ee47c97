use thiserror::Error;

use crate::analyzer::PatternError;

#[derive(Error, Debug)]
pub enum Error {
    /// A line of a grammar source is not a rule definition.
    #[error("Syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },
    #[error("Rule `{name}` on line {line} is already defined")]
    DuplicateRule { name: String, line: usize },
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }

    pub fn syntax<S: Into<String>>(line: usize, message: S) -> Self {
        Error::Syntax {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Pattern;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::syntax(3, "expected a rule").to_string(),
            "Syntax error on line 3: expected a rule"
        );
        assert_eq!(
            Error::DuplicateRule {
                name: "item".to_string(),
                line: 7
            }
            .to_string(),
            "Rule `item` on line 7 is already defined"
        );
        assert_eq!(Error::internal("boom").to_string(), "Internal error: boom");
    }

    #[test]
    fn test_from_pattern_error() {
        let error: Error = Pattern::new("(unclosed").unwrap_err().into();
        assert!(matches!(error, Error::Pattern(_)));
        assert!(error.to_string().starts_with("Pattern error: invalid pattern /(unclosed/"));
    }
}
