use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{Error, InternalResult};

/// Options for [`GrammarReader`](crate::GrammarReader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Skip `#` comment lines and trailing comments.
    #[serde(default = "default_true")]
    pub skip_comments: bool,

    /// Accept a rule name defined twice; the later definition wins.
    #[serde(default)]
    pub allow_duplicate_rules: bool,

    /// Reject lines with anything other than whitespace or a comment after the rule.
    #[serde(default = "default_true")]
    pub require_full_line: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            skip_comments: default_true(),
            allow_duplicate_rules: false,
            require_full_line: default_true(),
        }
    }
}

impl ReaderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> InternalResult<Self> {
        let config = serde_json::from_str(s)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }
}

fn default_true() -> bool {
    true
}
