//! Outcome types - what the engine found for each rule.

use major_rules::{Interest, RuleId, Score, SubjectCatalog, SubjectKey};

/// Why a condition held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    InterestMatched(Interest),
    ScoreMet {
        subject: SubjectKey,
        minimum: Score,
        actual: Score,
    },
}

impl Reason {
    /// Human-readable explanation, e.g. `Matematika: 75 (min 70)`.
    pub fn describe(&self, catalog: &SubjectCatalog) -> String {
        match self {
            Reason::InterestMatched(tag) => format!("Interest matches ({})", tag),
            Reason::ScoreMet {
                subject,
                minimum,
                actual,
            } => format!("{}: {} (min {})", catalog.label(subject), actual, minimum),
        }
    }
}

/// Why a rule did not fire. Only the first failing condition is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    InterestMismatch { required: Interest },
    /// The student gave no score for a subject the rule requires.
    MissingScore(SubjectKey),
    BelowMinimum {
        subject: SubjectKey,
        minimum: Score,
        actual: Score,
    },
}

/// Result of evaluating one rule against a fact set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Matched(Vec<Reason>),
    Rejected(Rejection),
}

impl RuleOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, RuleOutcome::Matched(_))
    }
}

/// A rule that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub rule_id: RuleId,
    /// 1-based position of the rule in the knowledge base.
    pub position: usize,
    pub field: String,
    pub reasons: Vec<Reason>,
}

impl Recommendation {
    /// Reasons joined into one line.
    pub fn explanation(&self, catalog: &SubjectCatalog) -> String {
        self.reasons
            .iter()
            .map(|r| r.describe(catalog))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Everything one consultation produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Consultation {
    pub recommendations: Vec<Recommendation>,
    pub rules_evaluated: usize,
}

impl Consultation {
    /// Recommended fields in rule order, duplicates included.
    pub fn fields(&self) -> Vec<&str> {
        self.recommendations
            .iter()
            .map(|r| r.field.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_describe() {
        let catalog = SubjectCatalog::default();

        let interest = Reason::InterestMatched(Interest::new("komputer").unwrap());
        assert_eq!(interest.describe(&catalog), "Interest matches (komputer)");

        let score = Reason::ScoreMet {
            subject: SubjectKey::new("b_inggris").unwrap(),
            minimum: Score::new(80).unwrap(),
            actual: Score::new(92).unwrap(),
        };
        assert_eq!(score.describe(&catalog), "B.Inggris: 92 (min 80)");
    }

    #[test]
    fn test_empty_consultation() {
        let consultation = Consultation::default();
        assert!(consultation.is_empty());
        assert!(consultation.fields().is_empty());
    }
}
