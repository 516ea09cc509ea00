//! # Error Types
//!
//! Validation errors for ministore-core.
//!
//! The reducer itself never errors: every transition is a total function
//! and malformed payloads degrade to no-ops. Validation runs *before*
//! dispatch, at the edge where user input enters the system.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in every message
//! 3. Errors are enum variants, never bare strings

use thiserror::Error;

/// Input validation failures.
///
/// Each variant maps to a message the view layer can show next to the
/// offending form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A field was shorter than the allowed minimum.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// A field did not match its expected format.
    #[error("{field} is invalid: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}
