//! Subjects and scores: the numeric side of a rule.

use serde::{Deserialize, Serialize};

use crate::error::{RuleError, RuleResult};

/// Lowest score a subject can have.
pub const MIN_SCORE: u8 = 0;
/// Highest score a subject can have.
pub const MAX_SCORE: u8 = 100;

/// A school report score in the range 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    /// Create a score, rejecting values outside 0-100.
    pub fn new(value: i64) -> RuleResult<Self> {
        if (i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RuleError::ScoreOutOfRange(value))
        }
    }

    /// Parse a score typed by a user.
    pub fn parse(input: &str) -> Option<RuleResult<Self>> {
        input.trim().parse::<i64>().ok().map(Self::new)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Score {
    type Error = RuleError;

    fn try_from(value: i64) -> RuleResult<Self> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a subject, e.g. `mtk` or `b_inggris`.
///
/// Keys are normalized to lowercase and may only contain ASCII letters,
/// digits and underscores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubjectKey(String);

impl SubjectKey {
    pub fn new(raw: impl AsRef<str>) -> RuleResult<Self> {
        let key = raw.as_ref().trim().to_lowercase();
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if valid {
            Ok(Self(key))
        } else {
            Err(RuleError::InvalidSubjectKey(raw.as_ref().to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-friendly label derived from the key: `b_inggris` -> `B Inggris`.
    pub fn display_label(&self) -> String {
        self.0
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TryFrom<String> for SubjectKey {
    type Error = RuleError;

    fn try_from(value: String) -> RuleResult<Self> {
        Self::new(value)
    }
}

impl From<SubjectKey> for String {
    fn from(key: SubjectKey) -> Self {
        key.0
    }
}

impl std::fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subject offered in consultations and rule editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSpec {
    pub key: SubjectKey,
    /// Label shown in prompts. Falls back to the key's display label when empty.
    #[serde(default)]
    pub label: String,
}

impl SubjectSpec {
    pub fn new(key: SubjectKey, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }

    pub fn label(&self) -> String {
        if self.label.trim().is_empty() {
            self.key.display_label()
        } else {
            self.label.clone()
        }
    }
}

/// The fixed, ordered set of subjects the console asks about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCatalog {
    subjects: Vec<SubjectSpec>,
}

impl SubjectCatalog {
    pub fn new(subjects: Vec<SubjectSpec>) -> Self {
        Self { subjects }
    }

    /// Subjects in prompt order.
    pub fn iter(&self) -> impl Iterator<Item = &SubjectSpec> {
        self.subjects.iter()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn contains(&self, key: &SubjectKey) -> bool {
        self.subjects.iter().any(|s| &s.key == key)
    }

    /// Label for a key, whether or not the catalog knows it.
    pub fn label(&self, key: &SubjectKey) -> String {
        self.subjects
            .iter()
            .find(|s| &s.key == key)
            .map(SubjectSpec::label)
            .unwrap_or_else(|| key.display_label())
    }
}

impl Default for SubjectCatalog {
    fn default() -> Self {
        Self::new(default_subjects())
    }
}

/// The report-card subjects asked for out of the box.
pub fn default_subjects() -> Vec<SubjectSpec> {
    [
        ("mtk", "Matematika"),
        ("b_inggris", "B.Inggris"),
        ("b_indonesia", "B.Indonesia"),
        ("fisika", "Fisika"),
        ("kimia", "Kimia"),
        ("biologi", "Biologi"),
        ("ekonomi", "Ekonomi"),
    ]
    .into_iter()
    .filter_map(|(key, label)| SubjectKey::new(key).ok().map(|k| SubjectSpec::new(k, label)))
    .collect()
}
