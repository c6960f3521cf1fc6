//! The rule record stored in the knowledge base.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::{Condition, Interest, RuleId};
use crate::error::{RuleError, RuleResult};
use crate::subjects::{Score, SubjectKey};

/// A recommendation rule: preconditions mapped to a field of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    /// Files written by hand may omit the id; a fresh one is assigned on load.
    #[serde(default)]
    pub id: RuleId,

    /// Field of study recommended when every condition holds.
    #[serde(deserialize_with = "deserialize_field")]
    pub recommended_field: String,

    /// Required interest, if any.
    #[serde(
        rename = "interest_tag",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub interest: Option<Interest>,

    /// Minimum score per subject.
    #[serde(rename = "numeric_thresholds", default)]
    pub thresholds: BTreeMap<SubjectKey, Score>,
}

impl Rule {
    /// Create a rule with no conditions for the given field.
    pub fn new(recommended_field: impl AsRef<str>) -> RuleResult<Self> {
        Ok(Self {
            id: RuleId::new(),
            recommended_field: normalize_field(recommended_field.as_ref())?,
            interest: None,
            thresholds: BTreeMap::new(),
        })
    }

    /// Set the required interest.
    pub fn with_interest(mut self, interest: Interest) -> Self {
        self.interest = Some(interest);
        self
    }

    /// Add or replace a minimum score.
    pub fn with_threshold(mut self, subject: SubjectKey, minimum: Score) -> Self {
        self.thresholds.insert(subject, minimum);
        self
    }

    /// Rename the recommended field.
    pub fn set_field(&mut self, recommended_field: impl AsRef<str>) -> RuleResult<()> {
        self.recommended_field = normalize_field(recommended_field.as_ref())?;
        Ok(())
    }

    /// Minimum score required for a subject, if the rule has one.
    pub fn threshold(&self, subject: &SubjectKey) -> Option<Score> {
        self.thresholds.get(subject).copied()
    }

    /// All preconditions: the interest first, then thresholds in key order.
    pub fn conditions(&self) -> Vec<Condition> {
        self.interest
            .iter()
            .cloned()
            .map(Condition::Interest)
            .chain(
                self.thresholds
                    .iter()
                    .map(|(subject, minimum)| Condition::MinScore {
                        subject: subject.clone(),
                        minimum: *minimum,
                    }),
            )
            .collect()
    }

    /// Check if the rule has no preconditions at all.
    pub fn is_unconditional(&self) -> bool {
        self.interest.is_none() && self.thresholds.is_empty()
    }
}

fn normalize_field(raw: &str) -> RuleResult<String> {
    let field = raw.trim();
    if field.is_empty() {
        return Err(RuleError::EmptyField);
    }
    Ok(field.to_string())
}

fn deserialize_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    normalize_field(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> SubjectKey {
        SubjectKey::new(raw).unwrap()
    }

    fn score(value: i64) -> Score {
        Score::new(value).unwrap()
    }

    #[test]
    fn test_new_rule() {
        let rule = Rule::new("  Informatics ").unwrap();
        assert_eq!(rule.recommended_field, "Informatics");
        assert!(rule.is_unconditional());
        assert!(matches!(Rule::new(" "), Err(RuleError::EmptyField)));
    }

    #[test]
    fn test_rule_builder() {
        let rule = Rule::new("Teknik Sipil")
            .unwrap()
            .with_interest(Interest::new("teknik").unwrap())
            .with_threshold(key("mtk"), score(75))
            .with_threshold(key("fisika"), score(70))
            .with_threshold(key("mtk"), score(80));

        assert_eq!(rule.thresholds.len(), 2);
        assert_eq!(rule.threshold(&key("mtk")), Some(score(80)));
        assert_eq!(rule.threshold(&key("kimia")), None);
    }

    #[test]
    fn test_conditions_order() {
        let rule = Rule::new("Kedokteran")
            .unwrap()
            .with_threshold(key("kimia"), score(80))
            .with_threshold(key("biologi"), score(85))
            .with_interest(Interest::new("kesehatan").unwrap());

        let conditions = rule.conditions();
        assert_eq!(conditions.len(), 3);
        assert!(matches!(&conditions[0], Condition::Interest(t) if t.as_str() == "kesehatan"));
        assert!(matches!(&conditions[1], Condition::MinScore { subject, .. } if subject.as_str() == "biologi"));
        assert!(matches!(&conditions[2], Condition::MinScore { subject, .. } if subject.as_str() == "kimia"));
    }

    #[test]
    fn test_deserialize_without_id_or_interest() {
        let rule: Rule = serde_json::from_str(
            r#"{"recommended_field": "Akuntansi", "numeric_thresholds": {"ekonomi": 80}}"#,
        )
        .unwrap();
        assert_eq!(rule.recommended_field, "Akuntansi");
        assert!(rule.interest.is_none());
        assert_eq!(rule.threshold(&key("ekonomi")), Some(score(80)));
    }

    #[test]
    fn test_deserialize_rejects_bad_threshold() {
        let result = serde_json::from_str::<Rule>(
            r#"{"recommended_field": "Akuntansi", "numeric_thresholds": {"ekonomi": 180}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_missing_interest() {
        let rule = Rule::new("Sastra Inggris").unwrap();
        let json = serde_json::to_string(&rule).unwrap();
        assert!(!json.contains("interest_tag"));
        assert!(json.contains("\"numeric_thresholds\":{}"));
    }

    #[test]
    fn test_serialize_uses_file_field_names() {
        let rule = Rule::new("Informatika")
            .unwrap()
            .with_interest(Interest::new("komputer").unwrap())
            .with_threshold(key("mtk"), score(70));
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("\"interest_tag\":\"komputer\""));
        assert!(json.contains("\"numeric_thresholds\":{\"mtk\":70}"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        let result = serde_json::from_str::<Rule>(
            r#"{"recommended_field": "Informatika", "treshold": {"mtk": 70}}"#,
        );
        assert!(result.is_err());

        let result = serde_json::from_str::<Rule>(
            r#"{"recommended_field": "Informatika", "thresholds": {"mtk": 70}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_trims_and_rejects_blank_field() {
        let rule: Rule =
            serde_json::from_str(r#"{"recommended_field": "  Akuntansi  "}"#).unwrap();
        assert_eq!(rule.recommended_field, "Akuntansi");

        let result = serde_json::from_str::<Rule>(r#"{"recommended_field": "   "}"#);
        assert!(result.is_err());
    }
}
