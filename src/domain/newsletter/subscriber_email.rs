//! Subscriber email value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Maximum total length of an address (RFC 5321 path limit minus brackets).
const MAX_EMAIL_LEN: usize = 254;

/// Maximum length of the local part.
const MAX_LOCAL_PART_LEN: usize = 64;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email regex is valid")
});

/// A syntactically valid email address.
///
/// Requires a dotted domain, so `user@localhost` is rejected the same way
/// a typical web form would reject it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Parses and validates an email address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the address is empty, too long or
    /// malformed.
    pub fn parse(email: &str) -> Result<Self, ValidationError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if email.len() > MAX_EMAIL_LEN {
            return Err(ValidationError::too_long("email", MAX_EMAIL_LEN));
        }
        if !EMAIL_REGEX.is_match(email) {
            return Err(ValidationError::invalid_format("email", "not an email address"));
        }

        let (local, _) = email
            .split_once('@')
            .ok_or_else(|| ValidationError::invalid_format("email", "missing @ symbol"))?;

        if local.len() > MAX_LOCAL_PART_LEN {
            return Err(ValidationError::too_long("email_local_part", MAX_LOCAL_PART_LEN));
        }
        if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
            return Err(ValidationError::invalid_format(
                "email",
                "misplaced dot in local part",
            ));
        }

        Ok(Self(email.to_string()))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SubscriberEmail {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SubscriberEmail> for String {
    fn from(email: SubscriberEmail) -> Self {
        email.0
    }
}
