//! Playbook struct definitions.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A domain playbook: symptom categories plus the domain escalation path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Playbook {
    /// Who to hand the issue to when a stop condition fires.
    #[serde(default = "default_escalation_path")]
    pub escalation_path: String,

    /// Symptom categories keyed by name. BTreeMap keeps enumeration (and
    /// the unknown-symptom error message) in a stable order.
    #[serde(default)]
    pub symptoms: BTreeMap<String, Symptom>,
}

/// One symptom category: what it means and how to investigate it safely.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Symptom {
    /// What this symptom usually indicates.
    #[serde(default)]
    pub explanation: String,

    /// Ordered, non-disruptive diagnostic steps.
    #[serde(default)]
    pub diagnostic_steps: Vec<DiagnosticStep>,

    /// Evidence to capture while working the symptom.
    #[serde(default)]
    pub evidence_checklist: Vec<String>,

    /// Conditions that mean stop and escalate immediately.
    #[serde(default)]
    pub stop_conditions: Vec<String>,
}

/// A single diagnostic step.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DiagnosticStep {
    /// What to do.
    pub action: String,

    /// Where or how to do it (GUI path, dashboard, read-only command).
    #[serde(default)]
    pub how: String,

    /// What a healthy or confirming result looks like.
    #[serde(default)]
    pub expected: String,
}

impl DiagnosticStep {
    /// One-line rendering of the step for list output.
    pub fn describe(&self) -> String {
        let mut out = self.action.trim().to_string();
        if !self.how.trim().is_empty() {
            out.push_str(&format!(" ({})", self.how.trim()));
        }
        if !self.expected.trim().is_empty() {
            out.push_str(&format!("; expect: {}", self.expected.trim()));
        }
        out
    }
}

fn default_escalation_path() -> String {
    "Contact Tier 2 support".to_string()
}
