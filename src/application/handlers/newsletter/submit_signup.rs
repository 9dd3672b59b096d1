//! SubmitSignupHandler - Command handler for the public signup form.

use std::sync::Arc;

use crate::domain::newsletter::{
    ContactSubmission, NewsletterSettings, SignupError, SubscriberEmail, SubscriptionOutcome,
};
use crate::ports::{NewsletterApi, SettingsRepository};

/// Command carrying the raw form fields.
#[derive(Debug, Clone, Default)]
pub struct SubmitSignupCommand {
    /// Honeypot, hidden from humans.
    pub honeypot: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
}

/// Result of a submission that passed local validation.
#[derive(Debug, Clone)]
pub struct SubmitSignupResult {
    pub outcome: SubscriptionOutcome,
    /// What the visitor sees: the rendered confirmation message on success,
    /// the outcome message otherwise.
    pub message: String,
}

/// Handler for signup submissions.
pub struct SubmitSignupHandler {
    api: Arc<dyn NewsletterApi>,
    settings: Arc<dyn SettingsRepository>,
}

impl SubmitSignupHandler {
    pub fn new(api: Arc<dyn NewsletterApi>, settings: Arc<dyn SettingsRepository>) -> Self {
        Self { api, settings }
    }

    pub async fn handle(&self, cmd: SubmitSignupCommand) -> Result<SubmitSignupResult, SignupError> {
        // 1. Honeypot before anything else
        if cmd.honeypot.as_deref().is_some_and(|hp| !hp.is_empty()) {
            tracing::info!("Signup rejected by honeypot");
            return Err(SignupError::SpamDetected);
        }

        // 2. Validate input
        let email = SubscriberEmail::parse(&cmd.email).map_err(SignupError::InvalidEmail)?;
        let contact = ContactSubmission::new(
            cmd.first_name.as_deref(),
            cmd.last_name.as_deref(),
            email,
        )
        .map_err(SignupError::InvalidContact)?;

        // 3. Single subscribe attempt
        let outcome = self.api.subscribe_contact(&contact).await;
        if !outcome.success {
            return Ok(SubmitSignupResult {
                message: outcome.message.clone(),
                outcome,
            });
        }

        // 4. Confirmation text; a read failure here only costs the custom wording
        let settings = self.settings.load().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default confirmation message");
            NewsletterSettings::default()
        });

        Ok(SubmitSignupResult {
            message: settings.render_confirmation(contact.email()),
            outcome,
        })
    }
}
