//! Axum router configuration for newsletter endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    health, list_segments, settings_form, signup_form, submit_signup, update_settings,
    NewsletterAppState,
};

/// Public signup routes.
///
/// # Routes
/// - `GET /signup` - Signup form
/// - `POST /signup` - Submit signup
pub fn signup_routes() -> Router<NewsletterAppState> {
    Router::new().route("/signup", get(signup_form).post(submit_signup))
}

/// Admin routes. Expected to sit behind an authenticating proxy.
///
/// # Routes
/// - `GET /settings` - Settings form
/// - `POST /settings` - Save settings
/// - `GET /segments` - Segments as JSON
pub fn admin_routes() -> Router<NewsletterAppState> {
    Router::new()
        .route("/settings", get(settings_form).post(update_settings))
        .route("/segments", get(list_segments))
}

/// Create the complete newsletter router.
///
/// # Example
///
/// ```ignore
/// let app = newsletter_router().with_state(NewsletterAppState::new(repo, cipher, api));
/// ```
pub fn newsletter_router() -> Router<NewsletterAppState> {
    Router::new()
        .nest("/newsletter", signup_routes())
        .nest("/admin/newsletter", admin_routes())
        .route("/health", get(health))
}
