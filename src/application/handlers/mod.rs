//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod newsletter;

pub use newsletter::{
    GetSettingsFormHandler, GetSettingsFormQuery, ListSegmentsHandler, SettingsFormView,
    SubmitSignupCommand, SubmitSignupHandler, SubmitSignupResult, UpdateSettingsCommand,
    UpdateSettingsHandler, UpdateSettingsResult,
};
