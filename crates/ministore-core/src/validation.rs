//! # Validation Module
//!
//! Input validation for user registration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View layer (external)                                         │
//! │  ├── Basic format checks (empty, length)                                │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before dispatch)                                 │
//! │  ├── Field rules checked by User::new                                   │
//! │  └── Only a valid User ever reaches Action::AddUser                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Reducer                                                       │
//! │  └── Total function: replaces user wholesale, no validation here        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ministore_core::types::User;
//!
//! let user = User::new("John Doe", "john@example.com", "password123").unwrap();
//! assert!(User::new("", "john@example.com", "password123").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::User;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a display name: non-empty after trimming.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }
    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Must contain exactly one `@` with text on both sides
///
/// This is deliberately shallow: real deliverability checks belong to
/// whatever sends mail, not a cart store.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required { field: "email" });
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || parts.next().is_some() {
        return Err(ValidationError::InvalidFormat {
            field: "email",
            reason: "expected a single @ with text on both sides",
        });
    }

    Ok(())
}

/// Validates a password: present and at least [`MIN_PASSWORD_LEN`] characters.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required { field: "password" });
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password",
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Validated Constructor
// =============================================================================

impl User {
    /// Builds a user after running all field validators.
    ///
    /// This is the only intended path from form input to `Action::AddUser`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let email = email.into();
        let password = password.into();

        validate_name(&name)?;
        validate_email(&email)?;
        validate_password(&password)?;

        Ok(User {
            name,
            email,
            password,
        })
    }
}
