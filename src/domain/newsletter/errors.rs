//! Newsletter-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | SpamDetected | 422 |
//! | InvalidEmail | 422 |
//! | InvalidContact | 422 |
//! | Storage | 500 |

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Rejections of a signup submission, raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    /// The honeypot field was filled in.
    #[error("honeypot field was filled in")]
    SpamDetected,

    #[error("invalid email: {0}")]
    InvalidEmail(ValidationError),

    #[error("invalid contact: {0}")]
    InvalidContact(ValidationError),
}

impl SignupError {
    /// Form field the error is attached to.
    pub fn field(&self) -> &str {
        match self {
            SignupError::SpamDetected => "hp",
            SignupError::InvalidEmail(_) => "email",
            SignupError::InvalidContact(e) => e.field(),
        }
    }

    /// User-facing message.
    pub fn message(&self) -> String {
        match self {
            SignupError::SpamDetected => "Spam detected!".to_string(),
            SignupError::InvalidEmail(_) => "Please enter a valid email address.".to_string(),
            SignupError::InvalidContact(e) => e.to_string(),
        }
    }
}

/// Failures of the settings workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("settings storage failed: {0}")]
    Storage(String),
}

impl SettingsError {
    pub fn storage(reason: impl Into<String>) -> Self {
        SettingsError::Storage(reason.into())
    }

    /// User-facing message.
    pub fn message(&self) -> String {
        match self {
            SettingsError::Storage(_) => {
                "The configuration could not be saved. Please try again.".to_string()
            }
        }
    }
}
