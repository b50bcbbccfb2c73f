//! The defaults table for the three skills.
//!
//! This module defines the `Defaults` struct: per-skill default values,
//! selectable option lists, and the derived lookup tables (status to next
//! steps, severity to update interval, evidence checklist). The built-in
//! table lives in code; `config/defaults.yaml` is the shipped reference
//! copy, and the `NETOPS_DEFAULTS` environment variable points at an
//! override file. Unknown fields in override files are ignored for forward
//! compatibility.

mod model;
mod operations;


pub use model::{Defaults, FcrDefaults, IncidentDefaults, RunbookDefaults};
