//! HTTP adapter for newsletter endpoints.
//!
//! - `GET /newsletter/signup` - Signup form
//! - `POST /newsletter/signup` - Submit signup
//! - `GET /admin/newsletter/settings` - Settings form
//! - `POST /admin/newsletter/settings` - Save settings
//! - `GET /admin/newsletter/segments` - Segments as JSON
//! - `GET /health` - Liveness

pub mod dto;
pub mod handlers;
pub mod routes;
pub mod views;

pub use dto::*;
pub use handlers::{NewsletterApiError, NewsletterAppState};
pub use routes::newsletter_router;
