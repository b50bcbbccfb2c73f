//! Defaults loading, resolution, and lookup operations.

use super::model::{Defaults, IncidentDefaults};
use crate::error::{NetopsError, Result};
use std::path::Path;

/// Environment variable naming an override defaults file.
pub const DEFAULTS_ENV: &str = "NETOPS_DEFAULTS";

impl Defaults {
    /// Load the defaults table from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility; missing fields keep their built-in values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            NetopsError::UserError(format!(
                "failed to read defaults file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse the defaults table from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let defaults: Defaults = serde_yaml::from_str(yaml)
            .map_err(|e| NetopsError::UserError(format!("failed to parse defaults YAML: {}", e)))?;

        defaults.validate()?;
        Ok(defaults)
    }

    /// Resolve the defaults table for this invocation.
    ///
    /// Honors the `NETOPS_DEFAULTS` environment variable; otherwise returns
    /// the built-in table.
    pub fn resolve() -> Result<Self> {
        match std::env::var_os(DEFAULTS_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Validate table values.
    ///
    /// Each skill's default value must appear in its own option list, so a
    /// mistyped override file fails fast instead of producing documents
    /// that no selector recognizes.
    pub fn validate(&self) -> Result<()> {
        check_default("incident", "audience", &self.incident.audience, &self.incident.options)?;
        check_default("incident", "severity", &self.incident.severity, &self.incident.options)?;
        check_default(
            "incident",
            "current_status",
            &self.incident.current_status,
            &self.incident.options,
        )?;
        check_default("runbook", "access_mode", &self.runbook.access_mode, &self.runbook.options)?;
        check_default("runbook", "environment", &self.runbook.environment, &self.runbook.options)?;
        check_default("fcr", "change_type", &self.fcr.change_type, &self.fcr.options)?;
        check_default("fcr", "rule_count", &self.fcr.rule_count, &self.fcr.options)?;
        check_default("fcr", "direction", &self.fcr.direction, &self.fcr.options)?;
        check_default("fcr", "risk_level", &self.fcr.risk_level, &self.fcr.options)?;
        check_default("fcr", "environment", &self.fcr.environment, &self.fcr.options)?;
        Ok(())
    }
}

fn check_default(
    skill: &str,
    field: &str,
    value: &str,
    options: &std::collections::BTreeMap<String, Vec<String>>,
) -> Result<()> {
    let allowed = options.get(field).ok_or_else(|| {
        NetopsError::UserError(format!(
            "defaults validation failed: {}.options is missing '{}'",
            skill, field
        ))
    })?;
    if !allowed.iter().any(|option| option == value) {
        return Err(NetopsError::UserError(format!(
            "defaults validation failed: {}.{} default '{}' is not among its options [{}]",
            skill,
            field,
            value,
            allowed.join(", ")
        )));
    }
    Ok(())
}

impl IncidentDefaults {
    /// Next steps for a status. Unknown statuses fall back to a single
    /// generic step rather than failing (documented leniency).
    pub fn next_steps_for(&self, status: &str) -> Vec<String> {
        self.next_steps
            .get(status)
            .cloned()
            .unwrap_or_else(|| vec!["Continue investigation".to_string()])
    }

    /// Next update interval for a severity. Unknown severities fall back
    /// to one hour.
    pub fn next_update_time_for(&self, severity: &str) -> String {
        self.next_update_time
            .get(severity)
            .cloned()
            .unwrap_or_else(|| "1 hour".to_string())
    }

    /// Selectable values for a prompt field, empty when the field has no
    /// option list.
    pub fn options_for(&self, field: &str) -> Vec<String> {
        self.options.get(field).cloned().unwrap_or_default()
    }
}
