//! Organization host value object.
//!
//! Identifies the tenant whose NGO Tools API is called, e.g.
//! `examplename.ngo.tools` for a dashboard at
//! `https://examplename.ngo.tools/app/dashboard`.
//!
//! # Validation Rules
//!
//! - Not empty (surrounding whitespace is ignored, case is normalized)
//! - Ends with `.ngo.tools`
//! - Has a non-empty subdomain before the suffix
//! - Only ASCII alphanumerics, `-` and `.`

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Fixed platform domain every organization host lives under.
pub const PLATFORM_DOMAIN_SUFFIX: &str = ".ngo.tools";

/// A validated organization host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrganizationHost(String);

impl OrganizationHost {
    /// Creates a new OrganizationHost, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - Host is empty
    /// - Host does not end with `.ngo.tools`
    /// - Nothing precedes the suffix (bare `ngo.tools`)
    /// - Host contains characters that are not valid in a hostname
    pub fn try_new(host: &str) -> Result<Self, ValidationError> {
        let host = host.trim().to_ascii_lowercase();

        if host.is_empty() {
            return Err(ValidationError::empty_field("organization_host"));
        }

        let subdomain = host.strip_suffix(PLATFORM_DOMAIN_SUFFIX).ok_or_else(|| {
            ValidationError::invalid_format(
                "organization_host",
                format!("must end with {}", PLATFORM_DOMAIN_SUFFIX),
            )
        })?;

        if subdomain.is_empty() || subdomain.starts_with('.') || subdomain.ends_with('.') {
            return Err(ValidationError::invalid_format(
                "organization_host",
                "missing organization subdomain",
            ));
        }

        if !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        {
            return Err(ValidationError::invalid_format(
                "organization_host",
                "only letters, digits, '-' and '.' are allowed",
            ));
        }

        Ok(Self(host))
    }

    /// Checks a raw value without keeping the result.
    pub fn is_valid(host: &str) -> bool {
        Self::try_new(host).is_ok()
    }

    /// Returns the host as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrganizationHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for OrganizationHost {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<String> for OrganizationHost {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(&value)
    }
}

impl From<OrganizationHost> for String {
    fn from(host: OrganizationHost) -> Self {
        host.0
    }
}
