//! Errors raised while building rules, fact sets or configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the rule book.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("score {0} is out of range (expected 0-100)")]
    ScoreOutOfRange(i64),

    #[error("invalid subject key '{0}' (use lowercase letters, digits and '_')")]
    InvalidSubjectKey(String),

    #[error("interest tag must not be empty")]
    EmptyInterest,

    #[error("recommended field must not be empty")]
    EmptyField,

    #[error("condition '{0}' has the wrong kind of value")]
    LegacyCondition(String),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
