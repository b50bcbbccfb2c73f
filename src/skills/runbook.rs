//! Safe troubleshooting runbook generator.
//!
//! Two required selections (domain and symptom category) pick a symptom
//! entry out of the domain's playbook; the runbook renders its diagnostic
//! steps, evidence checklist, stop conditions, and the domain escalation
//! path. Unknown domains and symptoms are lookup errors, and the symptom
//! error enumerates the valid categories.

use crate::defaults::Defaults;
use crate::error::{NetopsError, Result};
use crate::playbook::PlaybookStore;
use crate::render::{RenderContext, render_template, title_case};
use crate::schema::RunbookInput;

const RUNBOOK_TEMPLATE: &str = include_str!("templates/runbook.md");

/// Generate a troubleshooting runbook.
///
/// This is the main entry point for the skill: validates, merges with the
/// defaults table, loads the domain playbook, and renders the symptom.
pub fn generate(input: &RunbookInput, defaults: &Defaults, store: &PlaybookStore) -> Result<String> {
    input.ensure_valid()?;
    let merged = input.clone().merged(&defaults.runbook);

    let playbook = store.load(&merged.domain)?;
    let symptom = playbook
        .symptoms
        .get(&merged.symptom_category)
        .ok_or_else(|| {
            let available: Vec<&str> = playbook.symptoms.keys().map(String::as_str).collect();
            NetopsError::Lookup(format!(
                "unknown symptom '{}' for domain '{}'; available: {}",
                merged.symptom_category,
                merged.domain,
                available.join(", ")
            ))
        })?;

    let diagnostic_steps: Vec<String> = symptom
        .diagnostic_steps
        .iter()
        .map(|step| step.describe())
        .collect();

    let mut context = RenderContext::new();
    context.set("domain_title", title_case(&merged.domain));
    context.set("symptom_title", title_case(&merged.symptom_category));
    context.set("environment_upper", merged.environment.to_uppercase());
    context.set("access_mode_title", title_case(&merged.access_mode));
    context.set("symptom_explanation", symptom.explanation.trim());
    context.set("escalation_path", playbook.escalation_path.trim());
    context.set("timestamp", super::current_timestamp());
    context.set_list("diagnostic_steps", diagnostic_steps);
    context.set_list("evidence_checklist", symptom.evidence_checklist.clone());
    context.set_list("stop_conditions", symptom.stop_conditions.clone());

    Ok(render_template(RUNBOOK_TEMPLATE, &context)?)
}

/// Generate a runbook from a flat YAML mapping.
pub fn generate_from_yaml(yaml: &str, defaults: &Defaults, store: &PlaybookStore) -> Result<String> {
    let input: RunbookInput = serde_yaml::from_str(yaml)
        .map_err(|e| NetopsError::UserError(format!("failed to parse input YAML: {}", e)))?;
    generate(&input, defaults, store)
}
