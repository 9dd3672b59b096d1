//! Form and response types for newsletter endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::newsletter::{SubmitSignupCommand, UpdateSettingsCommand};
use crate::domain::newsletter::Segment;

// ════════════════════════════════════════════════════════════════════════════════
// Request Types
// ════════════════════════════════════════════════════════════════════════════════

/// Public signup form body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    /// Honeypot, rendered hidden.
    #[serde(default)]
    pub hp: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl From<SignupForm> for SubmitSignupCommand {
    fn from(form: SignupForm) -> Self {
        Self {
            honeypot: form.hp,
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
        }
    }
}

/// Admin settings form body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub api_bearer_token: Option<String>,
    #[serde(default)]
    pub organization_name: String,
    #[serde(default)]
    pub segment_id: Option<String>,
    #[serde(default)]
    pub confirmation_message: String,
}

impl From<SettingsForm> for UpdateSettingsCommand {
    fn from(form: SettingsForm) -> Self {
        Self {
            api_bearer_token: form.api_bearer_token,
            organization_name: form.organization_name,
            segment_id: form.segment_id,
            confirmation_message: form.confirmation_message,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response Types
// ════════════════════════════════════════════════════════════════════════════════

/// One selectable segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentResponse {
    pub id: String,
    pub name: String,
}

impl From<Segment> for SegmentResponse {
    fn from(segment: Segment) -> Self {
        Self {
            id: segment.id,
            name: segment.name,
        }
    }
}

/// Body of `GET /admin/newsletter/segments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentsResponse {
    pub segments: Vec<SegmentResponse>,
}

impl From<Vec<Segment>> for SegmentsResponse {
    fn from(segments: Vec<Segment>) -> Self {
        Self {
            segments: segments.into_iter().map(SegmentResponse::from).collect(),
        }
    }
}
