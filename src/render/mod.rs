//! Template rendering for generated documents.
//!
//! This module provides:
//!
//! - **Template**: variable substitution engine with list formatting and
//!   conditional sections
//! - **Format**: markdown list and casing helpers
//!
//! # Template Syntax
//!
//! Templates use `{variable}` placeholders over a typed context:
//!
//! ```text
//! Subject: [{severity}] {incident_title}
//!
//! ## Next Steps
//! {next_steps:numbered}
//!
//! {?has_evidence}
//! ## Evidence Collected
//! {evidence:bullets}
//! {/has_evidence}
//! ```
//!
//! - `{name}` substitutes a string value; `{{` escapes a literal `{`
//! - `{name:bullets}`, `{name:numbered}`, `{name:boxes}`, `{name:checked}`
//!   format a list value as markdown lines
//! - A line holding only `{?flag}` starts a section kept when the flag is
//!   true; `{^flag}` when it is false; `{/flag}` ends the section
//!
//! Rendering is pure: the same context always produces the same output.
//! Undefined variables are errors rather than silent blanks.

mod format;
mod template;

pub use format::{bullet_list, checkbox_list, checked_list, numbered_list, title_case};
pub use template::{RenderContext, TemplateError, Value, render_template};
