//! GetSettingsFormHandler - Query handler assembling the admin settings form.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::newsletter::{OrganizationHost, Segment, SettingsError};
use crate::ports::{NewsletterApi, SettingsRepository};

/// Shown when a stored organization host fails validation.
pub const INVALID_ORGANIZATION_MESSAGE: &str =
    "The organisation name can't be empty and must end with .ngo.tools";

/// Shown when the segment lookup came back empty.
pub const SEGMENTS_UNAVAILABLE_MESSAGE: &str =
    "Could not load segments. Please verify the bearer token and organization name.";

/// Query for the settings form.
#[derive(Debug, Clone, Default)]
pub struct GetSettingsFormQuery;

/// Everything the settings page needs to render.
///
/// The bearer token itself never appears here, only whether one is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsFormView {
    pub organization_host: String,
    pub organization_error: Option<String>,
    pub token_configured: bool,
    pub segments: Vec<Segment>,
    pub segments_warning: Option<String>,
    pub selected_segment_id: String,
    pub confirmation_message: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Handler for rendering the settings form.
pub struct GetSettingsFormHandler {
    settings: Arc<dyn SettingsRepository>,
    api: Arc<dyn NewsletterApi>,
}

impl GetSettingsFormHandler {
    pub fn new(settings: Arc<dyn SettingsRepository>, api: Arc<dyn NewsletterApi>) -> Self {
        Self { settings, api }
    }

    pub async fn handle(&self, _query: GetSettingsFormQuery) -> Result<SettingsFormView, SettingsError> {
        let settings = self
            .settings
            .load()
            .await
            .map_err(|e| SettingsError::storage(e.to_string()))?;

        let host_is_valid = OrganizationHost::is_valid(&settings.organization_host);
        let organization_error = (!host_is_valid
            && !settings.organization_host.trim().is_empty())
        .then(|| INVALID_ORGANIZATION_MESSAGE.to_string());

        // Segments are only looked up for a host that can actually be called.
        let (segments, segments_warning) = if host_is_valid {
            let segments = self.api.fetch_segments().await;
            let warning = segments
                .is_empty()
                .then(|| SEGMENTS_UNAVAILABLE_MESSAGE.to_string());
            (segments, warning)
        } else {
            (Vec::new(), None)
        };

        Ok(SettingsFormView {
            token_configured: settings.has_encrypted_token(),
            confirmation_message: settings.confirmation_template().to_string(),
            selected_segment_id: settings.segment_id,
            organization_host: settings.organization_host,
            organization_error,
            segments,
            segments_warning,
            updated_at: settings.updated_at,
        })
    }
}
