//! Rules in the older `jurusan`/`syarat` file layout.
//!
//! That layout keeps the interest tag under the `minat` key of the same map
//! that holds the subject minimums, so it cannot be described with field
//! aliases on [`Rule`]. It is read only; saving always writes the current
//! layout.

use serde::Deserialize;
use std::collections::BTreeMap;

use super::{Interest, Rule};
use crate::error::RuleError;
use crate::subjects::{Score, SubjectKey};

const INTEREST_KEY: &str = "minat";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LegacyRecord {
    jurusan: String,
    #[serde(default)]
    syarat: BTreeMap<String, LegacyValue>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyValue {
    Text(String),
    Number(i64),
}

/// A rule read from the older layout, converted on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "LegacyRecord")]
pub struct LegacyRule(Rule);

impl TryFrom<LegacyRecord> for LegacyRule {
    type Error = RuleError;

    fn try_from(record: LegacyRecord) -> Result<Self, Self::Error> {
        let mut rule = Rule::new(&record.jurusan)?;
        for (key, value) in record.syarat {
            if key == INTEREST_KEY {
                match value {
                    LegacyValue::Text(tag) if tag.trim().is_empty() => {}
                    LegacyValue::Text(tag) => rule.interest = Some(Interest::new(tag)?),
                    LegacyValue::Number(_) => return Err(RuleError::LegacyCondition(key)),
                }
                continue;
            }
            match value {
                LegacyValue::Number(minimum) => {
                    rule.thresholds
                        .insert(SubjectKey::new(&key)?, Score::new(minimum)?);
                }
                LegacyValue::Text(_) => return Err(RuleError::LegacyCondition(key)),
            }
        }
        Ok(Self(rule))
    }
}

impl From<LegacyRule> for Rule {
    fn from(legacy: LegacyRule) -> Self {
        legacy.0
    }
}
