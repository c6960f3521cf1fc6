//! Rule editor - CRUD over the in-memory rule list.

use major_rules::{Interest, Rule, RuleResult, Score, SubjectCatalog, SubjectKey};
use std::collections::BTreeMap;
use tracing::info;

use super::RuleStore;
use crate::error::{AdvisorError, Result};
use crate::presentation::render_rules;

/// A change to one part of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    /// Leave the current value alone (blank input).
    Keep,
    /// Overwrite with a new value.
    Set(T),
    /// Remove the value.
    Clear,
}

impl<T> Default for Edit<T> {
    fn default() -> Self {
        Edit::Keep
    }
}

impl<T> Edit<T> {
    /// Apply the edit to an optional current value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Edit::Keep => current,
            Edit::Set(value) => Some(value),
            Edit::Clear => None,
        }
    }
}

/// Partial update of a rule.
///
/// Anything left unspecified keeps its previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleUpdate {
    pub recommended_field: Option<String>,
    pub interest: Edit<Interest>,
    pub thresholds: BTreeMap<SubjectKey, Edit<Score>>,
}

impl RuleUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, recommended_field: impl Into<String>) -> Self {
        self.recommended_field = Some(recommended_field.into());
        self
    }

    pub fn with_interest(mut self, edit: Edit<Interest>) -> Self {
        self.interest = edit;
        self
    }

    pub fn with_threshold(mut self, subject: SubjectKey, edit: Edit<Score>) -> Self {
        self.thresholds.insert(subject, edit);
        self
    }

    /// Check if applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.recommended_field.is_none()
            && self.interest == Edit::Keep
            && self.thresholds.values().all(|edit| *edit == Edit::Keep)
    }

    /// Apply to a rule. The rule is left untouched when the update is invalid.
    pub fn apply_to(self, rule: &mut Rule) -> RuleResult<()> {
        let mut updated = rule.clone();
        if let Some(field) = &self.recommended_field {
            updated.set_field(field)?;
        }

        updated.interest = self.interest.apply(updated.interest.take());

        for (subject, edit) in self.thresholds {
            match edit.apply(updated.threshold(&subject)) {
                Some(minimum) => {
                    updated.thresholds.insert(subject, minimum);
                }
                None => {
                    updated.thresholds.remove(&subject);
                }
            }
        }

        *rule = updated;
        Ok(())
    }
}

/// Owns the rule list and persists it after every change.
///
/// Rules are addressed by their 1-based position in the list.
#[derive(Debug)]
pub struct RuleEditor {
    store: RuleStore,
    rules: Vec<Rule>,
}

impl RuleEditor {
    /// Load the store's rules into a new editor.
    pub fn open(store: RuleStore) -> Result<Self> {
        let rules = store.load()?;
        Ok(Self { store, rules })
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// All rules in display order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Get the rule at a 1-based position.
    pub fn get(&self, index: usize) -> Result<&Rule> {
        let slot = self.slot(index)?;
        Ok(&self.rules[slot])
    }

    /// Append a rule and save.
    pub fn add(&mut self, rule: Rule) -> Result<&Rule> {
        info!(rule_id = %rule.id, field = %rule.recommended_field, "adding rule");
        self.rules.push(rule);
        self.persist()?;
        let last = self.rules.len() - 1;
        Ok(&self.rules[last])
    }

    /// Update the rule at a 1-based position and save.
    pub fn update(&mut self, index: usize, update: RuleUpdate) -> Result<&Rule> {
        let slot = self.slot(index)?;
        update.apply_to(&mut self.rules[slot])?;
        info!(
            index,
            rule_id = %self.rules[slot].id,
            field = %self.rules[slot].recommended_field,
            "updated rule"
        );
        self.persist()?;
        Ok(&self.rules[slot])
    }

    /// Remove the rule at a 1-based position and save.
    pub fn delete(&mut self, index: usize) -> Result<Rule> {
        let slot = self.slot(index)?;
        let removed = self.rules.remove(slot);
        info!(index, rule_id = %removed.id, field = %removed.recommended_field, "deleted rule");
        self.persist()?;
        Ok(removed)
    }

    /// Render every rule as a table.
    pub fn view(&self, catalog: &SubjectCatalog) -> String {
        render_rules(&self.rules, catalog)
    }

    fn slot(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.rules.len() {
            return Err(AdvisorError::IndexOutOfRange {
                index,
                len: self.rules.len(),
            });
        }
        Ok(index - 1)
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use major_rules::RuleError;
    use tempfile::TempDir;

    fn key(raw: &str) -> SubjectKey {
        SubjectKey::new(raw).unwrap()
    }

    fn score(value: i64) -> Score {
        Score::new(value).unwrap()
    }

    fn editor_in(temp_dir: &TempDir) -> RuleEditor {
        RuleEditor::open(RuleStore::new(temp_dir.path().join("rules.json"))).unwrap()
    }

    fn seeded_editor(temp_dir: &TempDir) -> RuleEditor {
        let mut editor = editor_in(temp_dir);
        for field in ["Informatika", "Teknik Sipil", "Kedokteran"] {
            editor.add(Rule::new(field).unwrap()).unwrap();
        }
        editor
    }

    fn fields(editor: &RuleEditor) -> Vec<&str> {
        editor
            .rules()
            .iter()
            .map(|r| r.recommended_field.as_str())
            .collect()
    }

    #[test]
    fn test_add_appends_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let mut editor = editor_in(&temp_dir);
        assert!(editor.is_empty());

        let added = editor
            .add(
                Rule::new("Informatika")
                    .unwrap()
                    .with_threshold(key("mtk"), score(80)),
            )
            .unwrap();
        assert_eq!(added.recommended_field, "Informatika");

        let reopened = editor_in(&temp_dir);
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.rules(), editor.rules());
    }

    #[test]
    fn test_delete_shifts_positions() {
        let temp_dir = TempDir::new().unwrap();
        let mut editor = seeded_editor(&temp_dir);

        let removed = editor.delete(1).unwrap();
        assert_eq!(removed.recommended_field, "Informatika");
        assert_eq!(fields(&editor), vec!["Teknik Sipil", "Kedokteran"]);
        assert_eq!(editor.get(1).unwrap().recommended_field, "Teknik Sipil");

        let reopened = editor_in(&temp_dir);
        assert_eq!(fields(&reopened), vec!["Teknik Sipil", "Kedokteran"]);
    }

    #[test]
    fn test_delete_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let mut editor = seeded_editor(&temp_dir);

        assert!(matches!(
            editor.delete(0),
            Err(AdvisorError::IndexOutOfRange { index: 0, len: 3 })
        ));
        assert!(matches!(
            editor.delete(4),
            Err(AdvisorError::IndexOutOfRange { index: 4, len: 3 })
        ));
        assert_eq!(editor.len(), 3);
    }

    #[test]
    fn test_update_preserves_length_and_id() {
        let temp_dir = TempDir::new().unwrap();
        let mut editor = seeded_editor(&temp_dir);
        let id = editor.get(2).unwrap().id;

        editor
            .update(2, RuleUpdate::new().with_field("Teknik Mesin"))
            .unwrap();

        assert_eq!(editor.len(), 3);
        assert_eq!(editor.get(2).unwrap().id, id);
        assert_eq!(fields(&editor), vec!["Informatika", "Teknik Mesin", "Kedokteran"]);
        assert_eq!(fields(&editor_in(&temp_dir))[1], "Teknik Mesin");
    }

    #[test]
    fn test_update_blank_keeps_previous_values() {
        let temp_dir = TempDir::new().unwrap();
        let mut editor = editor_in(&temp_dir);
        editor
            .add(
                Rule::new("Kedokteran")
                    .unwrap()
                    .with_interest(Interest::new("kesehatan").unwrap())
                    .with_threshold(key("biologi"), score(85))
                    .with_threshold(key("kimia"), score(80)),
            )
            .unwrap();

        let update = RuleUpdate::new()
            .with_threshold(key("biologi"), Edit::Keep)
            .with_threshold(key("kimia"), Edit::Set(score(75)));
        let rule = editor.update(1, update).unwrap();

        assert_eq!(rule.recommended_field, "Kedokteran");
        assert_eq!(rule.interest.as_ref().unwrap().as_str(), "kesehatan");
        assert_eq!(rule.threshold(&key("biologi")), Some(score(85)));
        assert_eq!(rule.threshold(&key("kimia")), Some(score(75)));
    }

    #[test]
    fn test_update_clear_and_set() {
        let temp_dir = TempDir::new().unwrap();
        let mut editor = editor_in(&temp_dir);
        editor
            .add(
                Rule::new("Farmasi")
                    .unwrap()
                    .with_interest(Interest::new("kesehatan").unwrap())
                    .with_threshold(key("kimia"), score(80)),
            )
            .unwrap();

        let update = RuleUpdate::new()
            .with_interest(Edit::Clear)
            .with_threshold(key("kimia"), Edit::Clear)
            .with_threshold(key("biologi"), Edit::Set(score(70)));
        let rule = editor.update(1, update).unwrap();

        assert!(rule.interest.is_none());
        assert_eq!(rule.threshold(&key("kimia")), None);
        assert_eq!(rule.threshold(&key("biologi")), Some(score(70)));
    }

    #[test]
    fn test_update_invalid_field_leaves_rule_intact() {
        let temp_dir = TempDir::new().unwrap();
        let mut editor = seeded_editor(&temp_dir);

        let result = editor.update(
            1,
            RuleUpdate::new()
                .with_field("   ")
                .with_interest(Edit::Set(Interest::new("komputer").unwrap())),
        );

        assert!(matches!(result, Err(AdvisorError::Rule(RuleError::EmptyField))));
        let rule = editor.get(1).unwrap();
        assert_eq!(rule.recommended_field, "Informatika");
        assert!(rule.interest.is_none());
    }

    #[test]
    fn test_update_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let mut editor = seeded_editor(&temp_dir);

        assert!(matches!(
            editor.update(9, RuleUpdate::new()),
            Err(AdvisorError::IndexOutOfRange { index: 9, len: 3 })
        ));
    }

    #[test]
    fn test_empty_update() {
        assert!(RuleUpdate::new().is_empty());
        assert!(RuleUpdate::new()
            .with_threshold(key("mtk"), Edit::Keep)
            .is_empty());
        assert!(!RuleUpdate::new().with_interest(Edit::Clear).is_empty());
    }

    #[test]
    fn test_view_empty() {
        let temp_dir = TempDir::new().unwrap();
        let editor = editor_in(&temp_dir);
        assert_eq!(editor.view(&SubjectCatalog::default()), "No rules stored yet.");
    }
}
