//! The three document-generation skills.
//!
//! Each skill is a stateless pipeline over the same stages: validate the
//! input record, merge it with the defaults table, select canned fragments,
//! render a template. Every skill exposes a programmatic `generate` and a
//! YAML-mapping `generate_from_yaml` with identical defaulting rules; the
//! interactive flows in `crate::interactive` delegate to the same
//! functions.

pub mod fcr;
pub mod incident;
pub mod runbook;

use chrono::Utc;

/// Timestamp stamped into every generated document.
///
/// This is the only non-deterministic value in a rendered document;
/// consumers comparing output strip the `Generated:` line.
pub(crate) fn current_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M UTC").to_string()
}
