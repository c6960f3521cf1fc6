//! Rule definitions for the knowledge base.

mod condition;
mod definition;
mod legacy;

pub use condition::*;
pub use definition::*;
pub use legacy::LegacyRule;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleId(pub Uuid);

impl RuleId {
    /// Create a new random rule ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RuleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
