//! Error type shared by the knowledge base and the consultation log.

use std::path::PathBuf;

use major_rules::RuleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rule file exists but does not hold a well-formed rule list.
    #[error("rule file {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize rules: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A 1-based rule position outside the list.
    #[error("rule number {index} does not exist (there are {len} rules)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl AdvisorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
