//! HTTP adapters - server-rendered forms and a small JSON endpoint.

pub mod newsletter;

pub use newsletter::newsletter_router;
pub use newsletter::NewsletterAppState;
