//! Persisted newsletter settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{OrganizationHost, SubscriberEmail};
use crate::domain::foundation::ValidationError;

/// Placeholder replaced by the subscriber's address in the confirmation message.
pub const EMAIL_PLACEHOLDER: &str = "[email]";

/// Confirmation shown when the administrator has not configured one.
pub const DEFAULT_CONFIRMATION_MESSAGE: &str = "Thank you for signing up. Please check your email and click the confirmation link to complete your subscription.";

/// Site-wide newsletter configuration.
///
/// The bearer token is only ever held encrypted here; decrypting it is the
/// job of the API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSettings {
    /// Organization host as entered by the administrator. May be invalid.
    #[serde(default)]
    pub organization_host: String,

    /// Base64 `IV || ciphertext` blob of the bearer token.
    #[serde(default)]
    pub encrypted_bearer_token: String,

    /// Segment new contacts are subscribed to.
    #[serde(default)]
    pub segment_id: String,

    /// Message shown after signup; may contain `[email]`.
    #[serde(default = "default_confirmation_message")]
    pub confirmation_message: String,

    /// When the settings were last saved.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl NewsletterSettings {
    /// Validated organization host.
    pub fn organization(&self) -> Result<OrganizationHost, ValidationError> {
        OrganizationHost::try_new(&self.organization_host)
    }

    pub fn has_encrypted_token(&self) -> bool {
        !self.encrypted_bearer_token.is_empty()
    }

    pub fn has_segment(&self) -> bool {
        !self.segment_id.trim().is_empty()
    }

    /// The configured template, or the default when blank.
    pub fn confirmation_template(&self) -> &str {
        if self.confirmation_message.trim().is_empty() {
            DEFAULT_CONFIRMATION_MESSAGE
        } else {
            &self.confirmation_message
        }
    }

    /// Confirmation message with `[email]` substituted.
    pub fn render_confirmation(&self, email: &SubscriberEmail) -> String {
        self.confirmation_template()
            .replace(EMAIL_PLACEHOLDER, email.as_str())
    }
}

impl Default for NewsletterSettings {
    fn default() -> Self {
        Self {
            organization_host: String::new(),
            encrypted_bearer_token: String::new(),
            segment_id: String::new(),
            confirmation_message: default_confirmation_message(),
            updated_at: None,
        }
    }
}

fn default_confirmation_message() -> String {
    DEFAULT_CONFIRMATION_MESSAGE.to_string()
}
