//! Fact sets - what a student tells the advisor during one consultation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::subjects::{Score, SubjectKey};

/// The student's interest and report scores.
///
/// A subject the student did not provide is absent from the set; it is never
/// treated as a score of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSet {
    interest: String,
    scores: BTreeMap<SubjectKey, Score>,
}

impl FactSet {
    /// Create a fact set for the given stated interest (lowercased).
    pub fn new(interest: impl AsRef<str>) -> Self {
        Self {
            interest: interest.as_ref().trim().to_lowercase(),
            scores: BTreeMap::new(),
        }
    }

    /// Add a score.
    pub fn with_score(mut self, subject: SubjectKey, score: Score) -> Self {
        self.set_score(subject, score);
        self
    }

    /// Record or replace a score.
    pub fn set_score(&mut self, subject: SubjectKey, score: Score) {
        self.scores.insert(subject, score);
    }

    pub fn interest(&self) -> &str {
        &self.interest
    }

    /// Score for a subject, `None` when the student did not give one.
    pub fn score(&self, subject: &SubjectKey) -> Option<Score> {
        self.scores.get(subject).copied()
    }

    pub fn scores(&self) -> impl Iterator<Item = (&SubjectKey, &Score)> {
        self.scores.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_set_interest_is_lowercased() {
        let facts = FactSet::new("  Komputer ");
        assert_eq!(facts.interest(), "komputer");
        assert_eq!(facts.scores().count(), 0);
    }

    #[test]
    fn test_missing_score_is_absent() {
        let mtk = SubjectKey::new("mtk").unwrap();
        let fisika = SubjectKey::new("fisika").unwrap();
        let facts = FactSet::new("teknik").with_score(mtk.clone(), Score::new(0).unwrap());

        assert_eq!(facts.score(&mtk), Some(Score::new(0).unwrap()));
        assert_eq!(facts.score(&fisika), None);
    }

    #[test]
    fn test_set_score_replaces() {
        let mtk = SubjectKey::new("mtk").unwrap();
        let mut facts = FactSet::new("teknik").with_score(mtk.clone(), Score::new(50).unwrap());
        facts.set_score(mtk.clone(), Score::new(90).unwrap());
        assert_eq!(facts.score(&mtk).map(Score::value), Some(90));
        assert_eq!(facts.scores().count(), 1);
    }
}
