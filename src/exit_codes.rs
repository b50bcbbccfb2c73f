//! Exit code constants for the netops CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid state)
//! - 2: Validation failure (required fields missing or blank)
//! - 3: Lookup failure (playbook or symptom not found)
//! - 4: Render failure (template bug, never user data)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or invalid invocation mode.
pub const USER_ERROR: i32 = 1;

/// Validation failure: one or more required fields missing or blank.
pub const VALIDATION_FAILURE: i32 = 2;

/// Lookup failure: no playbook for a domain, or unknown symptom category.
pub const LOOKUP_FAILURE: i32 = 3;

/// Render failure: a template referenced an undefined or mistyped variable.
pub const RENDER_FAILURE: i32 = 4;
