//! Result of a subscribe attempt.
//!
//! Every failure mode of the subscribe call collapses into a
//! [`SubscriptionStatus`]; callers show [`SubscriptionOutcome::message`]
//! to the visitor as-is.

use serde::Serialize;

/// Why a subscribe attempt ended the way it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionStatus {
    /// Remote API answered 200 or 201.
    Subscribed,

    /// No segment id stored.
    SegmentNotConfigured,

    /// No bearer token stored, or it no longer decrypts.
    TokenNotConfigured,

    /// Organization host missing or malformed.
    OrganizationNotConfigured,

    /// The settings record could not be read.
    SettingsUnavailable,

    /// Error response mentioning "login": the remote side bounced us to its
    /// login page.
    TokenExpired,

    /// Remote API answered 404.
    EndpointNotFound,

    /// Any other transport or HTTP error.
    RequestFailed(String),

    /// A 2xx answer other than 200/201.
    UnknownError,
}

impl SubscriptionStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, SubscriptionStatus::Subscribed)
    }

    /// Missing or unreadable local configuration, as opposed to a remote failure.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SubscriptionStatus::SegmentNotConfigured
                | SubscriptionStatus::TokenNotConfigured
                | SubscriptionStatus::OrganizationNotConfigured
                | SubscriptionStatus::SettingsUnavailable
        )
    }

    /// User-facing message.
    pub fn message(&self) -> String {
        match self {
            SubscriptionStatus::Subscribed => "Thank you for subscribing!".to_string(),
            SubscriptionStatus::SegmentNotConfigured => {
                "Newsletter segment is not configured.".to_string()
            }
            SubscriptionStatus::TokenNotConfigured => {
                "API bearer token is not configured.".to_string()
            }
            SubscriptionStatus::OrganizationNotConfigured => {
                "Organization name is not configured.".to_string()
            }
            SubscriptionStatus::SettingsUnavailable => {
                "Newsletter settings are unavailable.".to_string()
            }
            SubscriptionStatus::TokenExpired => {
                "Failed to subscribe: The token seems to be expired".to_string()
            }
            SubscriptionStatus::EndpointNotFound => {
                "Failed to subscribe: Endpoint not found".to_string()
            }
            SubscriptionStatus::RequestFailed(error) => format!("Failed to subscribe: {}", error),
            SubscriptionStatus::UnknownError => "Failed to subscribe: Unknown error".to_string(),
        }
    }
}

/// Normalized `{success, message}` pair handed back to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip)]
    pub status: SubscriptionStatus,
}

impl From<SubscriptionStatus> for SubscriptionOutcome {
    fn from(status: SubscriptionStatus) -> Self {
        Self {
            success: status.is_success(),
            message: status.message(),
            status,
        }
    }
}
