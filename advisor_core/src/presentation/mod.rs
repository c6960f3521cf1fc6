//! Presentation - plain-text rendering of rules and consultation results.

mod table;

pub use table::*;

use major_rules::{Rule, SubjectCatalog};

use crate::consultation::Consultation;

/// Shown instead of a table when the knowledge base is empty.
pub const NO_RULES_MESSAGE: &str = "No rules stored yet.";

/// Render the rule base as a grid table numbered from 1.
pub fn render_rules(rules: &[Rule], catalog: &SubjectCatalog) -> String {
    if rules.is_empty() {
        return NO_RULES_MESSAGE.to_string();
    }

    let mut table = TextTable::new(["No", "Recommended Field", "Requirements"]);
    for (i, rule) in rules.iter().enumerate() {
        let requirements = if rule.is_unconditional() {
            "(none)".to_string()
        } else {
            rule.conditions()
                .iter()
                .map(|c| c.describe(catalog))
                .collect::<Vec<_>>()
                .join("\n")
        };
        table.push_row([
            (i + 1).to_string(),
            rule.recommended_field.clone(),
            requirements,
        ]);
    }
    table.render()
}

/// Render a consultation result for a student.
pub fn render_consultation(
    student: &str,
    consultation: &Consultation,
    catalog: &SubjectCatalog,
) -> String {
    let mut lines = vec![format!(
        "=== RECOMMENDATIONS FOR {} ===",
        student.trim().to_uppercase()
    )];

    if consultation.is_empty() {
        lines.push("No matching field of study was found.".to_string());
        lines.push("Tip: double-check the scores and interest you entered.".to_string());
        return lines.join("\n");
    }

    lines.push("Based on the analysis:".to_string());
    for recommendation in &consultation.recommendations {
        lines.push(String::new());
        lines.push(format!("* {}", recommendation.field));
        let explanation = recommendation.explanation(catalog);
        if !explanation.is_empty() {
            lines.push(format!("  Because: {}", explanation));
        }
    }
    lines.join("\n")
}
