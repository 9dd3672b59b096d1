//! NGO Tools API client configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Outbound API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Per-request timeout for calls to the NGO Tools API, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Verify TLS certificates of the organization host.
    ///
    /// Setting this to `false` accepts self-signed or otherwise unverified
    /// certificates. Only do this for hosts you control.
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
}

impl ApiConfig {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidApiTimeout);
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            verify_tls: default_verify_tls(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_verify_tls() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert!(config.verify_tls);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidApiTimeout)
        ));
    }

    #[test]
    fn test_validation_rejects_huge_timeout() {
        let config = ApiConfig {
            timeout_secs: 600,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
