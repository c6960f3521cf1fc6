use advisor_core::AdvisorError;
use major_rules::RuleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error(transparent)]
    Advisor(#[from] AdvisorError),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl CliError {
    /// Errors the menu reports and recovers from instead of exiting.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CliError::Terminal(_) => false,
            CliError::Advisor(AdvisorError::Parse { .. }) => false,
            CliError::Advisor(_) | CliError::Rule(_) => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
