//! Input records for the three skills.
//!
//! Each record derives `Deserialize` so the YAML input mode shares the
//! exact struct the programmatic entry points take: fields absent from a
//! YAML mapping deserialize to blanks, then `merged` overlays the defaults
//! table. Validation happens before merging, so a record is immutable once
//! it has passed through the pipeline's first two stages.

use crate::defaults::{FcrDefaults, IncidentDefaults, RunbookDefaults};
use crate::error::{NetopsError, Result};
use serde::Deserialize;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Overlay rule shared by all records: a user value wins only when it is
/// non-blank; otherwise the default is kept.
fn overlay(field: &mut String, default: &str) {
    if is_blank(field) {
        *field = default.to_string();
    }
}

/// Input for the incident update skill.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IncidentInput {
    /// Short title describing the incident (required).
    pub incident_title: String,

    /// Brief description of user/business impact (required).
    pub impact_summary: String,

    /// Target audience for the update.
    pub audience: String,

    /// Incident severity (P1-P4).
    pub severity: String,

    /// Current incident status.
    pub current_status: String,

    /// When the next update will be provided; auto-filled from severity
    /// when absent.
    pub next_update_time: Option<String>,

    /// Diagnostic checks completed so far.
    pub checks_done: Vec<String>,

    /// Evidence collected so far.
    pub evidence: Vec<String>,
}

impl IncidentInput {
    /// Validate required fields. Returns every violated field, not just
    /// the first.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if is_blank(&self.incident_title) {
            errors.push("incident_title is required".to_string());
        }
        if is_blank(&self.impact_summary) {
            errors.push("impact_summary is required".to_string());
        }
        errors
    }

    /// Fail with a `Validation` error when any required field is blank.
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(NetopsError::Validation(errors))
        }
    }

    /// Overlay this record onto the defaults table: blank optional fields
    /// take the default, non-blank user values win. Pure and total.
    pub fn merged(mut self, defaults: &IncidentDefaults) -> Self {
        overlay(&mut self.audience, &defaults.audience);
        overlay(&mut self.severity, &defaults.severity);
        overlay(&mut self.current_status, &defaults.current_status);
        if self.next_update_time.as_deref().is_some_and(is_blank) {
            self.next_update_time = None;
        }
        self
    }
}

/// Input for the runbook generator skill.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunbookInput {
    /// Network domain (firewall, fmc, f5, circuit, api) (required).
    pub domain: String,

    /// Symptom category within the domain (required).
    pub symptom_category: String,

    /// Access level the operator has (gui_only is the safest).
    pub access_mode: String,

    /// Target environment.
    pub environment: String,
}

impl RunbookInput {
    /// Validate required fields. Returns every violated field.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if is_blank(&self.domain) {
            errors.push("domain is required".to_string());
        }
        if is_blank(&self.symptom_category) {
            errors.push("symptom_category is required".to_string());
        }
        errors
    }

    /// Fail with a `Validation` error when any required field is blank.
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(NetopsError::Validation(errors))
        }
    }

    /// Overlay this record onto the defaults table.
    pub fn merged(mut self, defaults: &RunbookDefaults) -> Self {
        overlay(&mut self.access_mode, &defaults.access_mode);
        overlay(&mut self.environment, &defaults.environment);
        self
    }
}

/// Input for the FCR autofill skill.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FcrInput {
    /// What the change is for (required).
    pub purpose: String,

    /// Kind of change being requested.
    pub change_type: String,

    /// Rule count descriptor.
    pub rule_count: String,

    /// Traffic direction.
    pub direction: String,

    /// Risk level of the change.
    pub risk_level: String,

    /// Target environment.
    pub environment: String,
}

impl FcrInput {
    /// Validate required fields. Returns every violated field.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if is_blank(&self.purpose) {
            errors.push("purpose is required".to_string());
        }
        errors
    }

    /// Fail with a `Validation` error when any required field is blank.
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(NetopsError::Validation(errors))
        }
    }

    /// Overlay this record onto the defaults table.
    pub fn merged(mut self, defaults: &FcrDefaults) -> Self {
        overlay(&mut self.change_type, &defaults.change_type);
        overlay(&mut self.rule_count, &defaults.rule_count);
        overlay(&mut self.direction, &defaults.direction);
        overlay(&mut self.risk_level, &defaults.risk_level);
        overlay(&mut self.environment, &defaults.environment);
        self
    }
}
