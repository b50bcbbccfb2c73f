//! Incident update composer.
//!
//! Generates ready-to-send incident updates from two typed fields
//! (title and impact); everything else defaults. Next steps come from the
//! status lookup table, the update interval from the severity table, and
//! an evidence checklist is included whenever no evidence was supplied.
//! Both audience renderings are composed per call; the caller receives the
//! one matching the requested audience.

use crate::defaults::Defaults;
use crate::error::{NetopsError, Result};
use crate::render::{RenderContext, render_template};
use crate::schema::IncidentInput;

const MANAGER_TEMPLATE: &str = include_str!("templates/incident_manager.md");
const CLIENT_TEMPLATE: &str = include_str!("templates/incident_client.md");

/// Audience-specific renderings of one incident update.
#[derive(Debug, Clone)]
pub struct IncidentUpdate {
    /// Internal update for management.
    pub manager: String,
    /// External update for affected customers.
    pub client: String,
}

impl IncidentUpdate {
    /// The rendering for an audience. Audiences without a dedicated
    /// template (internal, executive, anything unknown) get the manager
    /// format.
    pub fn for_audience(&self, audience: &str) -> &str {
        match audience {
            "client" => &self.client,
            _ => &self.manager,
        }
    }
}

/// Compose both audience renderings from a validated, merged record.
pub fn compose(input: &IncidentInput, defaults: &Defaults) -> Result<IncidentUpdate> {
    let incident = &defaults.incident;

    let next_update_time = match &input.next_update_time {
        Some(time) => time.clone(),
        None => incident.next_update_time_for(&input.severity),
    };
    let next_steps = incident.next_steps_for(&input.current_status);

    let has_checks = !input.checks_done.is_empty();
    let has_evidence = !input.evidence.is_empty();

    let mut context = RenderContext::new();
    context.set("incident_title", &input.incident_title);
    context.set("impact_summary", &input.impact_summary);
    context.set("severity", &input.severity);
    context.set("current_status", &input.current_status);
    context.set("next_update_time", next_update_time);
    context.set("timestamp", super::current_timestamp());
    context.set_list("checks_done", input.checks_done.clone());
    context.set_list("evidence", input.evidence.clone());
    context.set_list("evidence_checklist", incident.evidence_checklist.clone());
    context.set_list("next_steps", next_steps);
    context.set_flag("has_checks", has_checks);
    context.set_flag("has_evidence", has_evidence);

    Ok(IncidentUpdate {
        manager: render_template(MANAGER_TEMPLATE, &context)?,
        client: render_template(CLIENT_TEMPLATE, &context)?,
    })
}

/// Generate an incident update for the record's audience.
///
/// This is the main entry point for the skill: validates, merges with the
/// defaults table, composes, and returns the requested audience rendering.
pub fn generate(input: &IncidentInput, defaults: &Defaults) -> Result<String> {
    input.ensure_valid()?;
    let merged = input.clone().merged(&defaults.incident);
    let update = compose(&merged, defaults)?;
    Ok(update.for_audience(&merged.audience).to_string())
}

/// Generate an incident update from a flat YAML mapping.
///
/// Same defaulting rules as [`generate`]: absent fields take defaults,
/// missing required fields fail validation.
pub fn generate_from_yaml(yaml: &str, defaults: &Defaults) -> Result<String> {
    let input: IncidentInput = serde_yaml::from_str(yaml)
        .map_err(|e| NetopsError::UserError(format!("failed to parse input YAML: {}", e)))?;
    generate(&input, defaults)
}
