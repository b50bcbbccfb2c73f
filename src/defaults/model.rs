//! Defaults table struct definitions and built-in values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full defaults table, one section per skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Incident update defaults and lookup tables.
    pub incident: IncidentDefaults,

    /// Runbook generator defaults.
    pub runbook: RunbookDefaults,

    /// FCR autofill defaults.
    pub fcr: FcrDefaults,
}

/// Defaults for the incident update skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentDefaults {
    /// Default target audience.
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Default incident severity.
    #[serde(default = "default_severity")]
    pub severity: String,

    /// Default incident status.
    #[serde(default = "default_status")]
    pub current_status: String,

    /// Selectable values per field, in prompt order.
    #[serde(default = "default_incident_options")]
    pub options: BTreeMap<String, Vec<String>>,

    /// Status to auto-generated next steps.
    #[serde(default = "default_next_steps")]
    pub next_steps: BTreeMap<String, Vec<String>>,

    /// Severity to next update interval.
    #[serde(default = "default_next_update_time")]
    pub next_update_time: BTreeMap<String, String>,

    /// Evidence to collect when none was provided.
    #[serde(default = "default_evidence_checklist")]
    pub evidence_checklist: Vec<String>,
}

impl Default for IncidentDefaults {
    fn default() -> Self {
        Self {
            audience: default_audience(),
            severity: default_severity(),
            current_status: default_status(),
            options: default_incident_options(),
            next_steps: default_next_steps(),
            next_update_time: default_next_update_time(),
            evidence_checklist: default_evidence_checklist(),
        }
    }
}

/// Defaults for the runbook generator skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunbookDefaults {
    /// Default access mode (the safest one).
    #[serde(default = "default_access_mode")]
    pub access_mode: String,

    /// Default target environment.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Selectable values per field, in prompt order.
    #[serde(default = "default_runbook_options")]
    pub options: BTreeMap<String, Vec<String>>,
}

impl Default for RunbookDefaults {
    fn default() -> Self {
        Self {
            access_mode: default_access_mode(),
            environment: default_environment(),
            options: default_runbook_options(),
        }
    }
}

/// Defaults for the FCR autofill skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FcrDefaults {
    /// Default change type.
    #[serde(default = "default_change_type")]
    pub change_type: String,

    /// Default rule count descriptor.
    #[serde(default = "default_rule_count")]
    pub rule_count: String,

    /// Default traffic direction.
    #[serde(default = "default_direction")]
    pub direction: String,

    /// Default risk level.
    #[serde(default = "default_risk_level")]
    pub risk_level: String,

    /// Default target environment.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Selectable values per field, in prompt order.
    #[serde(default = "default_fcr_options")]
    pub options: BTreeMap<String, Vec<String>>,
}

impl Default for FcrDefaults {
    fn default() -> Self {
        Self {
            change_type: default_change_type(),
            rule_count: default_rule_count(),
            direction: default_direction(),
            risk_level: default_risk_level(),
            environment: default_environment(),
            options: default_fcr_options(),
        }
    }
}

fn default_audience() -> String {
    "manager".to_string()
}

fn default_severity() -> String {
    "P2".to_string()
}

fn default_status() -> String {
    "investigating".to_string()
}

fn default_access_mode() -> String {
    "gui_only".to_string()
}

fn default_environment() -> String {
    "prod".to_string()
}

fn default_change_type() -> String {
    "firewall_rule".to_string()
}

fn default_rule_count() -> String {
    "single".to_string()
}

fn default_direction() -> String {
    "inbound".to_string()
}

fn default_risk_level() -> String {
    "low".to_string()
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_incident_options() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        (
            "audience".to_string(),
            string_vec(&["manager", "client", "internal", "executive"]),
        ),
        (
            "severity".to_string(),
            string_vec(&["P1", "P2", "P3", "P4"]),
        ),
        (
            "current_status".to_string(),
            string_vec(&[
                "investigating",
                "identified",
                "monitoring",
                "resolved",
                "escalated",
            ]),
        ),
    ])
}

fn default_runbook_options() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        (
            "access_mode".to_string(),
            string_vec(&["gui_only", "cli_read_only", "cli_full"]),
        ),
        (
            "environment".to_string(),
            string_vec(&["prod", "uat", "dev", "lab"]),
        ),
    ])
}

fn default_fcr_options() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        (
            "change_type".to_string(),
            string_vec(&[
                "firewall_rule",
                "nat_change",
                "f5_ssl",
                "routing_change",
                "acl_update",
                "vpn_config",
            ]),
        ),
        (
            "rule_count".to_string(),
            string_vec(&["single", "multiple"]),
        ),
        (
            "direction".to_string(),
            string_vec(&["inbound", "outbound", "bidirectional"]),
        ),
        ("risk_level".to_string(), string_vec(&["low", "medium", "high"])),
        (
            "environment".to_string(),
            string_vec(&["prod", "uat", "dev", "lab"]),
        ),
    ])
}

fn default_next_steps() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        (
            "investigating".to_string(),
            string_vec(&[
                "Continue investigating root cause",
                "Review recent changes and deployments",
                "Monitor impacted services for changes",
            ]),
        ),
        (
            "identified".to_string(),
            string_vec(&[
                "Implement fix for identified root cause",
                "Prepare rollback plan in case fix fails",
                "Validate fix in test environment first",
            ]),
        ),
        (
            "monitoring".to_string(),
            string_vec(&[
                "Monitor service metrics for recurrence",
                "Confirm stability with affected users",
            ]),
        ),
        (
            "resolved".to_string(),
            string_vec(&[
                "Confirm resolution with affected users",
                "Complete incident documentation",
                "Schedule post-incident review",
            ]),
        ),
        (
            "escalated".to_string(),
            string_vec(&[
                "Engage vendor support with collected evidence",
                "Escalate to Tier 3 engineering",
                "Prepare interim mitigation options",
            ]),
        ),
    ])
}

fn default_next_update_time() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("P1".to_string(), "30 minutes".to_string()),
        ("P2".to_string(), "1 hour".to_string()),
        ("P3".to_string(), "4 hours".to_string()),
        ("P4".to_string(), "1 business day".to_string()),
    ])
}

fn default_evidence_checklist() -> Vec<String> {
    string_vec(&[
        "Screenshots of error messages/alerts",
        "Relevant log entries with timestamps",
        "Timeline of events",
    ])
}
