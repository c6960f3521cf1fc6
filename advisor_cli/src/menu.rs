//! The main menu and the operations behind each entry.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use advisor_core::{
    render_consultation, ConsultationEngine, ConsultationLog, Edit, MatchConfig, RuleEditor,
    RuleStore, RuleUpdate,
};
use major_rules::{AdvisorConfig, FactSet, Interest, Rule, SubjectCatalog};
use tracing::debug;

use crate::error::Result;
use crate::prompt::{Prompter, CLEAR_MARKER};

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Consult,
    ViewRules,
    AddRule,
    UpdateRule,
    DeleteRule,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Consult,
        MenuChoice::ViewRules,
        MenuChoice::AddRule,
        MenuChoice::UpdateRule,
        MenuChoice::DeleteRule,
        MenuChoice::Exit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Consult),
            "2" => Some(MenuChoice::ViewRules),
            "3" => Some(MenuChoice::AddRule),
            "4" => Some(MenuChoice::UpdateRule),
            "5" => Some(MenuChoice::DeleteRule),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> usize {
        match self {
            MenuChoice::Consult => 1,
            MenuChoice::ViewRules => 2,
            MenuChoice::AddRule => 3,
            MenuChoice::UpdateRule => 4,
            MenuChoice::DeleteRule => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Consult => "Student consultation",
            MenuChoice::ViewRules => "View knowledge base",
            MenuChoice::AddRule => "Add rule",
            MenuChoice::UpdateRule => "Update rule",
            MenuChoice::DeleteRule => "Delete rule",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// One interactive session over a rule base.
pub struct Menu {
    editor: RuleEditor,
    engine: ConsultationEngine,
    log: ConsultationLog,
    catalog: SubjectCatalog,
}

impl Menu {
    pub fn new(
        editor: RuleEditor,
        engine: ConsultationEngine,
        log: ConsultationLog,
        catalog: SubjectCatalog,
    ) -> Self {
        Self {
            editor,
            engine,
            log,
            catalog,
        }
    }

    /// Open the rule base described by a config. Fails if the rule file is corrupt.
    pub fn open(config: &AdvisorConfig) -> Result<Self> {
        let editor = RuleEditor::open(RuleStore::new(&config.storage.rules_path))?;
        debug!(rules = editor.len(), path = %config.storage.rules_path.display(), "knowledge base opened");
        Ok(Self::new(
            editor,
            ConsultationEngine::new(MatchConfig::from(&config.matching)),
            ConsultationLog::new(&config.storage.log_path),
            config.catalog(),
        ))
    }

    pub fn editor(&self) -> &RuleEditor {
        &self.editor
    }

    /// Run the menu until the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        loop {
            p.header("MAIN MENU")?;
            for choice in MenuChoice::ALL {
                p.line(format!("{}. {}", choice.number(), choice.label()))?;
            }

            let Some(input) = p.text(">> Choose: ")? else {
                return Ok(());
            };
            let Some(choice) = MenuChoice::parse(&input) else {
                p.error("Invalid choice.")?;
                continue;
            };

            let outcome = match choice {
                MenuChoice::Consult => self.consult(p),
                MenuChoice::ViewRules => self.view(p),
                MenuChoice::AddRule => self.add(p),
                MenuChoice::UpdateRule => self.update(p),
                MenuChoice::DeleteRule => self.delete(p),
                MenuChoice::Exit => return Ok(()),
            };

            if let Err(e) = outcome {
                if !e.is_recoverable() {
                    return Err(e);
                }
                p.error(&e.to_string())?;
            }
        }
    }

    fn consult<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        p.header("MAJOR ADVISOR CONSULTATION")?;
        let Some(student) = p.required_text("Student name: ")? else {
            return Ok(());
        };

        let known = self.known_interests();
        if !known.is_empty() {
            p.info(&format!("Known interests: {}", known.join(", ")))?;
        }
        let Some(interest) = p.text("Dominant interest: ")? else {
            return Ok(());
        };

        let mut facts = FactSet::new(&interest);
        p.line("Enter report scores (0-100). Leave blank if you did not take the subject.")?;
        for subject in self.catalog.iter() {
            let Some(answer) = p.optional_score(&format!("{} score: ", subject.label()))? else {
                return Ok(());
            };
            if let Some(score) = answer {
                facts.set_score(subject.key.clone(), score);
            }
        }

        let consultation = self.engine.consult(self.editor.rules(), &facts);
        p.blank()?;
        p.line(render_consultation(&student, &consultation, &self.catalog))?;

        if self.log.record(&student, &consultation)?.is_some() {
            p.blank()?;
            p.info(&format!("Saved to {}", self.log.path().display()))?;
        }
        Ok(())
    }

    fn view<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        p.header("KNOWLEDGE BASE")?;
        p.line(self.editor.view(&self.catalog))?;
        Ok(())
    }

    fn add<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        p.header("ADD RULE")?;
        let Some(field) = p.required_text("Recommended field: ")? else {
            return Ok(());
        };
        let mut rule = Rule::new(&field)?;

        p.line("Enter the requirements. Leave blank for none.")?;
        let Some(interest) = p.text("Interest (e.g. komputer, teknik, kesehatan): ")? else {
            return Ok(());
        };
        if !interest.is_empty() {
            rule = rule.with_interest(Interest::new(&interest)?);
        }

        for subject in self.catalog.iter() {
            let Some(answer) = p.optional_score(&format!("Minimum {}: ", subject.label()))? else {
                return Ok(());
            };
            if let Some(minimum) = answer {
                rule = rule.with_threshold(subject.key.clone(), minimum);
            }
        }

        self.editor.add(rule)?;
        p.success("Rule saved.")?;
        Ok(())
    }

    fn update<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        self.view(p)?;
        if self.editor.is_empty() {
            return Ok(());
        }

        let Some(Some(index)) = p.number("Rule number to edit: ")? else {
            return Ok(());
        };
        let current = self.editor.get(index)?.clone();

        p.info(&format!(
            "Editing '{}'. Press Enter to keep a value, '{}' to remove it.",
            current.recommended_field, CLEAR_MARKER
        ))?;

        let mut update = RuleUpdate::new();
        let Some(field) = p.text(&format!("Recommended field [{}]: ", current.recommended_field))?
        else {
            return Ok(());
        };
        if !field.is_empty() {
            update = update.with_field(field);
        }

        let shown = current
            .interest
            .as_ref()
            .map(|i| i.to_string())
            .unwrap_or_else(|| "none".to_string());
        let Some(interest) = p.text(&format!("Interest [{}]: ", shown))? else {
            return Ok(());
        };
        update = update.with_interest(match interest.as_str() {
            "" => Edit::Keep,
            CLEAR_MARKER => Edit::Clear,
            tag => Edit::Set(Interest::new(tag)?),
        });

        let mut subjects: Vec<_> = self.catalog.iter().map(|s| s.key.clone()).collect();
        subjects.extend(
            current
                .thresholds
                .keys()
                .filter(|key| !self.catalog.contains(key))
                .cloned(),
        );
        for subject in subjects {
            let shown = current
                .threshold(&subject)
                .map(|s| s.to_string())
                .unwrap_or_else(|| "none".to_string());
            let prompt = format!("Minimum {} [{}]: ", self.catalog.label(&subject), shown);
            let Some(edit) = p.score_edit(&prompt)? else {
                return Ok(());
            };
            update = update.with_threshold(subject, edit);
        }

        if update.is_empty() {
            p.info("Nothing changed.")?;
            return Ok(());
        }
        self.editor.update(index, update)?;
        p.success("Rule updated.")?;
        Ok(())
    }

    fn delete<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        self.view(p)?;
        if self.editor.is_empty() {
            return Ok(());
        }

        let Some(Some(index)) = p.number("Rule number to delete: ")? else {
            return Ok(());
        };
        let removed = self.editor.delete(index)?;
        p.success(&format!("Rule '{}' deleted.", removed.recommended_field))?;
        Ok(())
    }

    /// Distinct interest tags used by the rule base, for the consultation hint.
    fn known_interests(&self) -> Vec<String> {
        self.editor
            .rules()
            .iter()
            .filter_map(|r| r.interest.as_ref().map(|i| i.to_string()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
