//! Mock HTTP transport for testing.
//!
//! Replays queued responses in order and records every request it is given,
//! so tests can assert on call counts, URLs, headers and bodies without any
//! network access.
//!
//! # Example
//!
//! ```ignore
//! let transport = MockTransport::new()
//!     .with_response(200, r#"[{"id":"1","name":"Main"}]"#);
//!
//! let response = transport.send(request).await?;
//! assert_eq!(transport.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{HttpTransport, TransportError, TransportRequest, TransportResponse};

/// Recording transport with scripted replies.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    replies: Arc<Mutex<VecDeque<Result<TransportResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<TransportRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an HTTP response.
    pub fn with_response(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Ok(TransportResponse::new(status, body)));
        self
    }

    /// Queues a transport failure.
    pub fn with_error(self, error: TransportError) -> Self {
        self.push(Err(error));
        self
    }

    /// Number of requests sent so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Copies of all requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<TransportRequest> {
        self.requests.lock().ok().and_then(|r| r.last().cloned())
    }

    fn push(&self, reply: Result<TransportResponse, TransportError>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        self.replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .unwrap_or_else(|| Err(TransportError::Request("no mock response queued".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::HttpMethod;
    use secrecy::SecretString;
    use std::time::Duration;

    fn request(url: &str) -> TransportRequest {
        TransportRequest::json(
            HttpMethod::Get,
            url,
            SecretString::new("tok".to_string()),
            Duration::from_secs(1),
        )
    }

    #[tokio::test]
    async fn replays_in_order_and_records() {
        let transport = MockTransport::new()
            .with_response(200, "first")
            .with_error(TransportError::Timeout(Duration::from_secs(1)));

        let first = transport.send(request("https://a")).await.unwrap();
        let second = transport.send(request("https://b")).await;

        assert_eq!(first.body, "first");
        assert_eq!(second, Err(TransportError::Timeout(Duration::from_secs(1))));
        assert_eq!(transport.call_count(), 2);
        assert_eq!(transport.last_request().unwrap().url, "https://b");
    }

    #[tokio::test]
    async fn empty_queue_fails_request() {
        let transport = MockTransport::new();
        assert!(transport.send(request("https://a")).await.is_err());
        assert_eq!(transport.call_count(), 1);
    }
}
