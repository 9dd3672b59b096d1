//! NGO Tools Adapter
//!
//! Implements the `NewsletterApi` port against the NGO Tools REST API
//! (`/api/v2/contact-segments`).

mod client;

pub use client::NgoToolsClient;
