//! Consultation - single-pass forward chaining over the rule base.
//!
//! The matching pass works as follows:
//! 1. **Facts**: Receive the student's interest and scores
//! 2. **Scan**: Visit every rule in knowledge-base order
//! 3. **Evaluate**: The interest must match and every threshold must be met
//! 4. **Collect**: Keep every rule that fired; nothing is ranked or dropped
//!
//! Derived recommendations are never fed back as facts.

mod outcome;
mod record;

pub use outcome::*;
pub use record::*;

use major_rules::{FactSet, InterestMatch, MatchingConfig, Rule};
use tracing::{debug, trace};

/// Configuration for rule matching.
#[derive(Debug, Clone, Default)]
pub struct MatchConfig {
    /// How interest tags are compared.
    pub interest_mode: InterestMatch,
}

impl From<&MatchingConfig> for MatchConfig {
    fn from(config: &MatchingConfig) -> Self {
        Self {
            interest_mode: config.interest_mode,
        }
    }
}

/// Matches fact sets against rules. Never mutates the rule base.
pub struct ConsultationEngine {
    config: MatchConfig,
}

impl ConsultationEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Create an engine with exact interest matching.
    pub fn with_defaults() -> Self {
        Self::new(MatchConfig::default())
    }

    /// Evaluate a single rule.
    ///
    /// A rule without an interest places no constraint on interest. A
    /// threshold on a subject the student did not provide fails the rule.
    pub fn evaluate(&self, rule: &Rule, facts: &FactSet) -> RuleOutcome {
        let mut reasons = Vec::with_capacity(rule.thresholds.len() + 1);

        if let Some(required) = &rule.interest {
            if !required.matches(facts.interest(), self.config.interest_mode) {
                return RuleOutcome::Rejected(Rejection::InterestMismatch {
                    required: required.clone(),
                });
            }
            reasons.push(Reason::InterestMatched(required.clone()));
        }

        for (subject, minimum) in &rule.thresholds {
            let Some(actual) = facts.score(subject) else {
                return RuleOutcome::Rejected(Rejection::MissingScore(subject.clone()));
            };
            if actual < *minimum {
                return RuleOutcome::Rejected(Rejection::BelowMinimum {
                    subject: subject.clone(),
                    minimum: *minimum,
                    actual,
                });
            }
            reasons.push(Reason::ScoreMet {
                subject: subject.clone(),
                minimum: *minimum,
                actual,
            });
        }

        RuleOutcome::Matched(reasons)
    }

    /// Run a consultation: evaluate every rule and collect all matches.
    pub fn consult(&self, rules: &[Rule], facts: &FactSet) -> Consultation {
        let mut consultation = Consultation::default();

        for (slot, rule) in rules.iter().enumerate() {
            consultation.rules_evaluated += 1;
            match self.evaluate(rule, facts) {
                RuleOutcome::Matched(reasons) => {
                    trace!(rule_id = %rule.id, field = %rule.recommended_field, "rule matched");
                    consultation.recommendations.push(Recommendation {
                        rule_id: rule.id,
                        position: slot + 1,
                        field: rule.recommended_field.clone(),
                        reasons,
                    });
                }
                RuleOutcome::Rejected(rejection) => {
                    trace!(rule_id = %rule.id, ?rejection, "rule rejected");
                }
            }
        }

        debug!(
            rules = consultation.rules_evaluated,
            matches = consultation.len(),
            mode = ?self.config.interest_mode,
            "consultation finished"
        );
        consultation
    }
}
