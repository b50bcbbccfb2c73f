//! Playbook types and the filesystem-backed store.
//!
//! A playbook is one YAML file per network domain, holding symptom
//! categories with safe diagnostic guidance. Domains are operator
//! extensible: dropping `<domain>.yaml` into the playbook directory makes
//! the domain discoverable without a rebuild.
//!
//! # File Format
//!
//! ```yaml
//! escalation_path: "Escalate to Network Engineering on-call"
//! symptoms:
//!   high_cpu:
//!     explanation: >
//!       Sustained high CPU usually indicates ...
//!     diagnostic_steps:
//!       - action: "Check the CPU utilization graph"
//!         how: "Monitoring dashboard, device health view"
//!         expected: "Sustained plateaus above 80%"
//!     evidence_checklist:
//!       - "Screenshot of the CPU graph"
//!     stop_conditions:
//!       - "CPU is pegged at 100% and the device stops responding"
//! ```

mod store;
mod types;

#[cfg(test)]
mod tests;

pub use store::{PLAYBOOKS_ENV, PlaybookStore};
pub use types::{DiagnosticStep, Playbook, Symptom};
