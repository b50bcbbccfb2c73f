//! Question sequences for the three skills.
//!
//! Each flow collects a fully-populated input record and returns it; the
//! caller delegates to the skill's programmatic function. Required-field
//! enforcement stays in the pipeline's validation stage, so an empty
//! answer fails the same way an empty CLI argument does.

use super::prompter::Prompter;
use crate::defaults::Defaults;
use crate::error::{NetopsError, Result};
use crate::playbook::PlaybookStore;
use crate::schema::{FcrInput, IncidentInput, RunbookInput};

fn banner(title: &str, subtitle: &str) {
    println!();
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
    println!("{}", subtitle);
    println!();
}

/// Collect items line by line until an empty answer.
fn collect_items(prompter: &mut dyn Prompter, heading: &str) -> Result<Vec<String>> {
    println!("{} (empty line to finish):", heading);
    let mut items = Vec::new();
    loop {
        let item = prompter.text("  -")?;
        if item.is_empty() {
            return Ok(items);
        }
        items.push(item);
    }
}

/// Interactive incident update composer.
///
/// Quick mode asks the two required fields plus severity; detailed mode
/// additionally asks audience, status, diagnostic checks, and evidence.
pub fn run_incident(
    prompter: &mut dyn Prompter,
    detailed: bool,
    defaults: &Defaults,
) -> Result<IncidentInput> {
    banner(
        "INCIDENT UPDATE COMPOSER",
        if detailed {
            "Detailed mode: all options available"
        } else {
            "Quick mode: 2 required fields + severity (use -d for all options)"
        },
    );

    let incident_title = prompter.text("Incident title")?;
    let impact_summary = prompter.text("Impact summary")?;
    let severity = prompter.select(
        "Severity",
        &defaults.incident.options_for("severity"),
        &defaults.incident.severity,
    )?;

    let mut input = IncidentInput {
        incident_title,
        impact_summary,
        severity,
        ..Default::default()
    };

    if detailed {
        input.audience = prompter.select(
            "Audience",
            &defaults.incident.options_for("audience"),
            &defaults.incident.audience,
        )?;
        input.current_status = prompter.select(
            "Current status",
            &defaults.incident.options_for("current_status"),
            &defaults.incident.current_status,
        )?;

        if prompter.confirm("Add diagnostic checks done?", false)? {
            input.checks_done = collect_items(prompter, "Enter checks")?;
        }
        if prompter.confirm("Add evidence collected?", false)? {
            input.evidence = collect_items(prompter, "Enter evidence items")?;
        }
    }

    Ok(input)
}

/// Interactive runbook generator.
///
/// Discovers domains and symptoms from the playbook store before
/// prompting; both questions offer only what actually exists.
pub fn run_runbook(prompter: &mut dyn Prompter, store: &PlaybookStore) -> Result<RunbookInput> {
    banner(
        "SAFE TROUBLESHOOTING RUNBOOK GENERATOR",
        "Required: 2 selections | All steps are SAFE by default",
    );

    let domains = store.available_domains();
    if domains.is_empty() {
        return Err(NetopsError::Lookup(format!(
            "no playbooks found in '{}'",
            store.dir().display()
        )));
    }

    let domain = prompter.select("Domain", &domains, &domains[0])?;

    let symptoms = store.symptoms_for(&domain)?;
    if symptoms.is_empty() {
        return Err(NetopsError::Lookup(format!(
            "no symptoms defined for domain '{}'",
            domain
        )));
    }

    let symptom_category = prompter.select("Symptom category", &symptoms, &symptoms[0])?;

    Ok(RunbookInput {
        domain,
        symptom_category,
        ..Default::default()
    })
}

/// Interactive FCR autofill: one question, everything else defaults.
pub fn run_fcr(prompter: &mut dyn Prompter) -> Result<FcrInput> {
    banner("FCR SECTION AUTOFILL", "Required: 1 field | Everything else defaults");

    let purpose = prompter.text("Purpose")?;

    Ok(FcrInput {
        purpose,
        ..Default::default()
    })
}
