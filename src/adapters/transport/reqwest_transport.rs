//! reqwest-backed HTTP transport.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;

use crate::ports::{HttpMethod, HttpTransport, TransportError, TransportRequest, TransportResponse};

/// Sends requests with a shared `reqwest::Client`.
///
/// Timeouts are applied per request, so one client serves every call.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds the client.
    ///
    /// With `verify_tls = false` certificate errors are ignored, which is only
    /// meant for development hosts with self-signed certificates.
    ///
    /// Redirects are never followed: the platform answers a rejected token
    /// with a redirect to its login page, and callers must see that 3xx.
    pub fn new(verify_tls: bool) -> Result<Self, TransportError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!verify_tls)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!("ngo-tools-newsletter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        builder = builder
            .timeout(request.timeout)
            .bearer_auth(request.bearer_token.expose_secret());

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.json_body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(request.timeout)
            } else if e.is_connect() {
                TransportError::Connect(e.to_string())
            } else {
                TransportError::Request(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(request.timeout)
            } else {
                TransportError::Request(format!("Failed to read response body: {}", e))
            }
        })?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status,
            "NGO Tools API responded"
        );

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Redirect};
    use axum::routing::{get, post};
    use axum::Router;
    use secrecy::SecretString;
    use std::net::SocketAddr;
    use std::time::Duration;

    /// Serves `router` on an ephemeral loopback port.
    async fn spawn_server(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn request(method: HttpMethod, url: String) -> TransportRequest {
        TransportRequest::json(
            method,
            url,
            SecretString::new("tok-123".to_string()),
            Duration::from_secs(5),
        )
    }

    fn platform_stub() -> Router {
        Router::new()
            .route(
                "/api/v2/contact-segments",
                get(|headers: HeaderMap| async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    let accept = headers
                        .get("accept")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    format!("{}|{}", auth, accept)
                }),
            )
            .route(
                "/api/v2/contact-segments/1/subscribe",
                post(|| async { Redirect::to("/login") }),
            )
            .route(
                "/api/v2/contact-segments/2/subscribe",
                post(|| async {
                    (StatusCode::INTERNAL_SERVER_ERROR, "segment backend down").into_response()
                }),
            )
            .route("/login", get(|| async { "<html>Please login</html>" }))
    }

    #[test]
    fn builds_with_and_without_tls_verification() {
        assert!(ReqwestTransport::new(true).is_ok());
        assert!(ReqwestTransport::new(false).is_ok());
    }

    #[tokio::test]
    async fn sends_bearer_token_and_json_headers() {
        let addr = spawn_server(platform_stub()).await;
        let transport = ReqwestTransport::new(true).unwrap();

        let response = transport
            .send(request(
                HttpMethod::Get,
                format!("http://{}/api/v2/contact-segments", addr),
            ))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "Bearer tok-123|application/json");
    }

    #[tokio::test]
    async fn redirects_are_returned_not_followed() {
        let addr = spawn_server(platform_stub()).await;
        let transport = ReqwestTransport::new(true).unwrap();

        let response = transport
            .send(
                request(
                    HttpMethod::Post,
                    format!("http://{}/api/v2/contact-segments/1/subscribe", addr),
                )
                .with_json_body(serde_json::json!({"email": "a@b.org"})),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 303);
        assert!(!response.is_success());
        assert!(!response.body.contains("Please login"));
    }

    #[tokio::test]
    async fn error_status_keeps_body() {
        let addr = spawn_server(platform_stub()).await;
        let transport = ReqwestTransport::new(true).unwrap();

        let response = transport
            .send(request(
                HttpMethod::Post,
                format!("http://{}/api/v2/contact-segments/2/subscribe", addr),
            ))
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.body, "segment backend down");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Bind then drop to get a loopback port nobody listens on.
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let transport = ReqwestTransport::new(true).unwrap();

        let result = transport
            .send(request(
                HttpMethod::Get,
                format!("http://{}/api/v2/contact-segments", addr),
            ))
            .await;

        assert!(matches!(
            result,
            Err(TransportError::Connect(_))
                | Err(TransportError::Request(_))
                | Err(TransportError::Timeout(_))
        ));
    }
}
