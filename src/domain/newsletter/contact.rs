//! Contact submission sent to a segment.

use serde::Serialize;

use super::SubscriberEmail;
use crate::domain::foundation::ValidationError;

/// Upper bound on name fields, matching the form's text inputs.
pub const MAX_NAME_LEN: usize = 255;

/// A visitor's signup, constructed per form submission and sent once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    first_name: Option<String>,
    last_name: Option<String>,
    email: SubscriberEmail,
}

impl ContactSubmission {
    /// Builds a submission, trimming names and treating blank ones as absent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a name exceeds [`MAX_NAME_LEN`].
    pub fn new(
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: SubscriberEmail,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: normalize_name("first_name", first_name)?,
            last_name: normalize_name("last_name", last_name)?,
            email,
        })
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn email(&self) -> &SubscriberEmail {
        &self.email
    }

    /// Wire representation for the subscribe endpoint.
    ///
    /// Absent names go out as empty strings, which is what the remote API
    /// receives from an untouched text input.
    pub fn to_payload(&self) -> ContactPayload<'_> {
        ContactPayload {
            first_name: self.first_name.as_deref().unwrap_or(""),
            last_name: self.last_name.as_deref().unwrap_or(""),
            email: self.email.as_str(),
        }
    }
}

/// JSON body of `POST .../contact-segments/{id}/subscribe`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

fn normalize_name(field: &str, value: Option<&str>) -> Result<Option<String>, ValidationError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::too_long(field, MAX_NAME_LEN));
    }
    Ok(Some(value.to_string()))
}
