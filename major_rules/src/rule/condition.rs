//! Preconditions a rule places on a student's facts.

use serde::{Deserialize, Serialize};

use crate::error::{RuleError, RuleResult};
use crate::subjects::{Score, SubjectCatalog, SubjectKey};

/// An interest tag such as `komputer` or `kesehatan`.
///
/// Tags are trimmed and lowercased on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interest(String);

impl Interest {
    pub fn new(raw: impl AsRef<str>) -> RuleResult<Self> {
        let tag = raw.as_ref().trim().to_lowercase();
        if tag.is_empty() {
            return Err(RuleError::EmptyInterest);
        }
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check this rule tag against the interest a student typed.
    pub fn matches(&self, stated: &str, mode: InterestMatch) -> bool {
        let stated = stated.trim().to_lowercase();
        match mode {
            InterestMatch::Exact => stated == self.0,
            InterestMatch::Contains => stated.contains(self.0.as_str()),
        }
    }
}

impl TryFrom<String> for Interest {
    type Error = RuleError;

    fn try_from(value: String) -> RuleResult<Self> {
        Self::new(value)
    }
}

impl From<Interest> for String {
    fn from(interest: Interest) -> Self {
        interest.0
    }
}

impl std::fmt::Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a rule's interest tag is compared with the student's stated interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestMatch {
    /// Tags must be equal after lowercasing.
    #[default]
    Exact,
    /// The rule's tag only has to appear inside the stated interest,
    /// so `komputer` matches `suka komputer`.
    Contains,
}

/// A single precondition of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The student's interest must match this tag.
    Interest(Interest),
    /// The student's score for `subject` must be at least `minimum`.
    MinScore { subject: SubjectKey, minimum: Score },
}

impl Condition {
    /// One-line description, e.g. `Interest: komputer` or `Matematika >= 70`.
    pub fn describe(&self, catalog: &SubjectCatalog) -> String {
        match self {
            Condition::Interest(tag) => format!("Interest: {}", tag),
            Condition::MinScore { subject, minimum } => {
                format!("{} >= {}", catalog.label(subject), minimum)
            }
        }
    }
}
