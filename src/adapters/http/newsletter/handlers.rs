//! HTTP handlers for newsletter endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Form, Json, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::application::handlers::newsletter::{
    GetSettingsFormHandler, GetSettingsFormQuery, ListSegmentsHandler, SubmitSignupCommand,
    SubmitSignupHandler, UpdateSettingsHandler,
};
use crate::domain::newsletter::{SettingsError, SignupError, SubscriptionStatus};
use crate::ports::{NewsletterApi, SettingsRepository, TokenCipher};

use super::dto::{SegmentsResponse, SettingsForm, SignupForm};
use super::views::{self, MessageKind, SignupFormValues};

/// Shown after a successful settings save.
pub const SETTINGS_SAVED_MESSAGE: &str = "The configuration options have been saved.";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct NewsletterAppState {
    pub settings_repository: Arc<dyn SettingsRepository>,
    pub token_cipher: Arc<dyn TokenCipher>,
    pub newsletter_api: Arc<dyn NewsletterApi>,
}

impl NewsletterAppState {
    pub fn new(
        settings_repository: Arc<dyn SettingsRepository>,
        token_cipher: Arc<dyn TokenCipher>,
        newsletter_api: Arc<dyn NewsletterApi>,
    ) -> Self {
        Self {
            settings_repository,
            token_cipher,
            newsletter_api,
        }
    }

    pub fn submit_signup_handler(&self) -> SubmitSignupHandler {
        SubmitSignupHandler::new(
            self.newsletter_api.clone(),
            self.settings_repository.clone(),
        )
    }

    pub fn settings_form_handler(&self) -> GetSettingsFormHandler {
        GetSettingsFormHandler::new(
            self.settings_repository.clone(),
            self.newsletter_api.clone(),
        )
    }

    pub fn update_settings_handler(&self) -> UpdateSettingsHandler {
        UpdateSettingsHandler::new(
            self.settings_repository.clone(),
            self.token_cipher.clone(),
        )
    }

    pub fn list_segments_handler(&self) -> ListSegmentsHandler {
        ListSegmentsHandler::new(self.newsletter_api.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Signup
// ════════════════════════════════════════════════════════════════════════════════

/// GET /newsletter/signup - Render the empty signup form
pub async fn signup_form() -> Html<String> {
    Html(views::signup_page(&SignupFormValues::default(), &[]))
}

/// POST /newsletter/signup - Validate and forward a signup
pub async fn submit_signup(
    State(state): State<NewsletterAppState>,
    Form(form): Form<SignupForm>,
) -> Result<Response, NewsletterApiError> {
    let mut values = SignupFormValues {
        first_name: form.first_name.clone().unwrap_or_default(),
        last_name: form.last_name.clone().unwrap_or_default(),
        email: form.email.clone(),
    };

    let handler = state.submit_signup_handler();
    let result = handler
        .handle(SubmitSignupCommand::from(form))
        .await
        .map_err(|e| NewsletterApiError::Signup(e, values.clone()))?;

    let (status, kind) = match &result.outcome.status {
        SubscriptionStatus::Subscribed => {
            // Clear the form once the contact is in.
            values = SignupFormValues::default();
            (StatusCode::OK, MessageKind::Status)
        }
        s if s.is_configuration_error() => (StatusCode::SERVICE_UNAVAILABLE, MessageKind::Error),
        _ => (StatusCode::BAD_GATEWAY, MessageKind::Error),
    };

    let html = views::signup_page(&values, &[(kind, result.message)]);
    Ok((status, Html(html)).into_response())
}

// ════════════════════════════════════════════════════════════════════════════════
// Settings
// ════════════════════════════════════════════════════════════════════════════════

/// GET /admin/newsletter/settings - Render the settings form
pub async fn settings_form(
    State(state): State<NewsletterAppState>,
) -> Result<Html<String>, NewsletterApiError> {
    let view = state
        .settings_form_handler()
        .handle(GetSettingsFormQuery)
        .await?;
    Ok(Html(views::settings_page(&view, &[])))
}

/// POST /admin/newsletter/settings - Save settings and re-render the form
pub async fn update_settings(
    State(state): State<NewsletterAppState>,
    Form(form): Form<SettingsForm>,
) -> Result<Html<String>, NewsletterApiError> {
    let result = state.update_settings_handler().handle(form.into()).await?;

    let view = state
        .settings_form_handler()
        .handle(GetSettingsFormQuery)
        .await?;

    let mut notices = vec![(MessageKind::Status, SETTINGS_SAVED_MESSAGE.to_string())];
    // The view only flags a non-empty invalid host; an empty one is reported here.
    if let Some(warning) = result.organization_warning {
        if view.organization_error.is_none() {
            notices.push((MessageKind::Error, warning));
        }
    }
    Ok(Html(views::settings_page(&view, &notices)))
}

/// GET /admin/newsletter/segments - Segments for the selector
pub async fn list_segments(State(state): State<NewsletterAppState>) -> impl IntoResponse {
    let segments = state.list_segments_handler().handle().await;
    Json(SegmentsResponse::from(segments))
}

/// GET /health - Liveness check
pub async fn health() -> &'static str {
    "ok"
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts workflow errors to HTML responses.
#[derive(Debug)]
pub enum NewsletterApiError {
    /// Rejected signup, with the submitted values to re-fill the form.
    Signup(SignupError, SignupFormValues),
    Settings(SettingsError),
}

impl From<SettingsError> for NewsletterApiError {
    fn from(err: SettingsError) -> Self {
        Self::Settings(err)
    }
}

impl IntoResponse for NewsletterApiError {
    fn into_response(self) -> Response {
        match self {
            NewsletterApiError::Signup(err, mut values) => {
                if matches!(err, SignupError::SpamDetected) {
                    values = SignupFormValues::default();
                }
                let html = views::signup_page(&values, &[(MessageKind::Error, err.message())]);
                (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
            }
            NewsletterApiError::Settings(err) => {
                tracing::error!(error = %err, "Newsletter settings request failed");
                let html = views::error_page("NGO Tools Newsletter Settings", &err.message());
                (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response()
            }
        }
    }
}
