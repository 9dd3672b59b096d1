//! HTTP Transport Port - outbound HTTPS calls to the marketing API.
//!
//! The API client builds fully-formed requests and hands them to a
//! transport. Production uses `reqwest`; tests swap in a recording mock so
//! they can assert how many calls were made and with what.

use async_trait::async_trait;
use secrecy::SecretString;
use std::time::Duration;

/// Media type used for both request and response bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP methods the client needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A single outbound request.
///
/// The bearer token travels separately from the plain headers so it stays
/// redacted in `Debug` output and logs.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub bearer_token: SecretString,
    pub json_body: Option<serde_json::Value>,
    pub timeout: Duration,
}

impl TransportRequest {
    /// JSON request with the standard `Content-Type`/`Accept` headers.
    pub fn json(
        method: HttpMethod,
        url: impl Into<String>,
        bearer_token: SecretString,
        timeout: Duration,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            headers: vec![
                ("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()),
                ("Accept".to_string(), JSON_CONTENT_TYPE.to_string()),
            ],
            bearer_token,
            json_body: None,
            timeout,
        }
    }

    /// Attaches a JSON body.
    pub fn with_json_body(mut self, body: serde_json::Value) -> Self {
        self.json_body = Some(body);
        self
    }

    /// Looks up a plain header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of whatever the server answered, success or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures where no HTTP response was received at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request failed: {0}")]
    Request(String),
}

/// Port for sending HTTP requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request once.
    ///
    /// Non-2xx answers are returned as `Ok` so callers can inspect the status
    /// and body; `Err` means nothing usable came back.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> TransportRequest {
        TransportRequest::json(
            HttpMethod::Post,
            "https://foo.ngo.tools/api/v2/contact-segments",
            SecretString::new("tok-123".to_string()),
            Duration::from_secs(15),
        )
    }

    #[test]
    fn json_request_sets_standard_headers() {
        let req = request();
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("Accept"), Some("application/json"));
        assert!(req.json_body.is_none());
    }

    #[test]
    fn debug_output_redacts_token() {
        let req = request();
        assert!(!format!("{:?}", req).contains("tok-123"));
    }

    #[test]
    fn with_json_body_attaches_body() {
        let req = request().with_json_body(json!({"email": "a@b.org"}));
        assert_eq!(req.json_body, Some(json!({"email": "a@b.org"})));
    }

    #[test]
    fn response_success_range() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(302, "").is_success());
        assert!(!TransportResponse::new(404, "").is_success());
    }

    #[test]
    fn transport_error_display() {
        let err = TransportError::Connect("dns failure".to_string());
        assert_eq!(err.to_string(), "Connection failed: dns failure");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
