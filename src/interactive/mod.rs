//! Interactive question sequencing.
//!
//! The flows in this module collect a fully-populated input record and
//! then hand off to the same validate/merge/select/render pipeline used by
//! direct and YAML-mode calls; the core pipeline never special-cases
//! interactive state. All prompting goes through the [`Prompter`] trait,
//! so tests drive the flows with scripted answers instead of a terminal.
//!
//! Quick mode asks only the required fields plus the most commonly changed
//! selection; detailed mode additionally prompts for the optional fields.

mod flows;
mod prompter;


pub use flows::{run_fcr, run_incident, run_runbook};
pub use prompter::{Prompter, StdPrompter};

#[cfg(test)]
pub(crate) use prompter::ScriptedPrompter;
