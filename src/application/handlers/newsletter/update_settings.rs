//! UpdateSettingsHandler - Command handler for saving the admin settings form.

use std::sync::Arc;

use crate::domain::newsletter::{NewsletterSettings, OrganizationHost, SettingsError};
use crate::ports::{SettingsRepository, TokenCipher};

use super::get_settings_form::INVALID_ORGANIZATION_MESSAGE;

/// Command carrying the submitted settings fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsCommand {
    /// Plaintext token; `None` or blank keeps the stored one.
    pub api_bearer_token: Option<String>,
    pub organization_name: String,
    /// `None` when the selector was not part of the submission.
    pub segment_id: Option<String>,
    pub confirmation_message: String,
}

/// Result of a save.
#[derive(Debug, Clone)]
pub struct UpdateSettingsResult {
    pub settings: NewsletterSettings,
    /// Validation message for the organization field. The save still happened.
    pub organization_warning: Option<String>,
    pub token_replaced: bool,
}

/// Handler for saving settings.
pub struct UpdateSettingsHandler {
    settings: Arc<dyn SettingsRepository>,
    cipher: Arc<dyn TokenCipher>,
}

impl UpdateSettingsHandler {
    pub fn new(settings: Arc<dyn SettingsRepository>, cipher: Arc<dyn TokenCipher>) -> Self {
        Self { settings, cipher }
    }

    pub async fn handle(&self, cmd: UpdateSettingsCommand) -> Result<UpdateSettingsResult, SettingsError> {
        let mut settings = self
            .settings
            .load()
            .await
            .map_err(|e| SettingsError::storage(e.to_string()))?;

        // Token is write-only; blank means "leave as is"
        let token = cmd.api_bearer_token.as_deref().map(str::trim).unwrap_or("");
        let token_replaced = !token.is_empty();
        if token_replaced {
            settings.encrypted_bearer_token = self.cipher.encrypt(token);
        }

        settings.organization_host = cmd.organization_name.trim().to_string();
        let organization_warning = match OrganizationHost::try_new(&settings.organization_host) {
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(
                    organization_host = %settings.organization_host,
                    error = %e,
                    "Saving invalid organization host"
                );
                Some(INVALID_ORGANIZATION_MESSAGE.to_string())
            }
        };

        if let Some(segment_id) = cmd.segment_id {
            settings.segment_id = segment_id.trim().to_string();
        }

        settings.confirmation_message = cmd.confirmation_message;
        settings.updated_at = Some(chrono::Utc::now());

        self.settings
            .save(&settings)
            .await
            .map_err(|e| SettingsError::storage(e.to_string()))?;

        tracing::info!(
            token_replaced,
            segment_id = %settings.segment_id,
            "Newsletter settings updated"
        );

        Ok(UpdateSettingsResult {
            settings,
            organization_warning,
            token_replaced,
        })
    }
}
