//! Error types for the netops CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Every variant maps to a fixed exit code; see `exit_codes`.

use crate::exit_codes;
use crate::render::TemplateError;
use thiserror::Error;

/// Main error type for netops operations.
#[derive(Error, Debug)]
pub enum NetopsError {
    /// User provided invalid arguments or an unreadable input file.
    #[error("{0}")]
    UserError(String),

    /// One or more required fields are missing or blank.
    ///
    /// The message lists every violated field, not just the first.
    #[error("invalid input: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Runbook lookup failed: no playbooks, unknown domain, or unknown
    /// symptom.
    #[error("{0}")]
    Lookup(String),

    /// Template rendering failed. Templates are embedded in the binary, so
    /// this indicates a template bug rather than bad user data.
    #[error("template rendering failed: {0}")]
    Render(#[from] TemplateError),
}

impl NetopsError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            NetopsError::UserError(_) => exit_codes::USER_ERROR,
            NetopsError::Validation(_) => exit_codes::VALIDATION_FAILURE,
            NetopsError::Lookup(_) => exit_codes::LOOKUP_FAILURE,
            NetopsError::Render(_) => exit_codes::RENDER_FAILURE,
        }
    }
}

/// Result type alias for netops operations.
pub type Result<T> = std::result::Result<T, NetopsError>;
