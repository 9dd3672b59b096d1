//! Newsletter handlers - signup submission and the admin settings workflow.

mod get_settings_form;
mod list_segments;
mod submit_signup;
mod update_settings;

pub use get_settings_form::{
    GetSettingsFormHandler, GetSettingsFormQuery, SettingsFormView, INVALID_ORGANIZATION_MESSAGE,
    SEGMENTS_UNAVAILABLE_MESSAGE,
};
pub use list_segments::ListSegmentsHandler;
pub use submit_signup::{SubmitSignupCommand, SubmitSignupHandler, SubmitSignupResult};
pub use update_settings::{UpdateSettingsCommand, UpdateSettingsHandler, UpdateSettingsResult};
