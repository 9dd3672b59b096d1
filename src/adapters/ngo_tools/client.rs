//! NGO Tools API client.
//!
//! Reads the organization host, encrypted token and segment from the
//! settings store on every call, so an admin save takes effect on the next
//! request without a restart.

use async_trait::async_trait;
use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::newsletter::{
    ContactSubmission, OrganizationHost, Segment, SubscriptionOutcome, SubscriptionStatus,
};
use crate::ports::{
    HttpMethod, HttpTransport, NewsletterApi, SettingsRepository, TokenCipher, TransportError,
    TransportRequest, TransportResponse,
};

/// Path of the segment collection, relative to the organization host.
const SEGMENTS_PATH: &str = "/api/v2/contact-segments";
const INVALID_SEGMENT_MESSAGE: &str = "Invalid segment id";

/// Marker the platform puts in the page it serves when a token is rejected.
const LOGIN_MARKER: &str = "login";

/// [`NewsletterApi`] implementation talking to `https://{org}.ngo.tools`.
pub struct NgoToolsClient {
    settings: Arc<dyn SettingsRepository>,
    cipher: Arc<dyn TokenCipher>,
    transport: Arc<dyn HttpTransport>,
    timeout: Duration,
}

impl NgoToolsClient {
    pub fn new(
        settings: Arc<dyn SettingsRepository>,
        cipher: Arc<dyn TokenCipher>,
        transport: Arc<dyn HttpTransport>,
        timeout: Duration,
    ) -> Self {
        Self {
            settings,
            cipher,
            transport,
            timeout,
        }
    }

    fn segments_url(host: &OrganizationHost) -> String {
        format!("https://{}{}", host, SEGMENTS_PATH)
    }

    /// Subscribe endpoint with the segment id percent-encoded as a single
    /// path segment. `None` for ids that cannot form one.
    fn subscribe_url(host: &OrganizationHost, segment_id: &str) -> Option<String> {
        if matches!(segment_id, "." | "..") {
            return None;
        }
        let mut url = reqwest::Url::parse(&Self::segments_url(host)).ok()?;
        url.path_segments_mut()
            .ok()?
            .push(segment_id)
            .push("subscribe");
        Some(url.to_string())
    }

    fn decrypt_token(&self, encrypted: &str) -> Option<SecretString> {
        let token = self.cipher.decrypt(encrypted);
        if token.is_empty() {
            None
        } else {
            Some(SecretString::new(token))
        }
    }

    fn request(&self, method: HttpMethod, url: String, token: SecretString) -> TransportRequest {
        TransportRequest::json(method, url, token, self.timeout)
    }

    /// Maps the remote answer onto a status, following the platform's
    /// conventions: a rejected token is answered with a login page.
    fn classify(
        url: &str,
        result: Result<TransportResponse, TransportError>,
    ) -> SubscriptionStatus {
        match result {
            Ok(response) if response.status == 200 || response.status == 201 => {
                SubscriptionStatus::Subscribed
            }
            Ok(response) if response.is_success() => {
                tracing::warn!(
                    status = response.status,
                    url = %url,
                    "Unexpected success status from subscribe endpoint"
                );
                SubscriptionStatus::UnknownError
            }
            Ok(response) => {
                if mentions_login(&response.body) {
                    tracing::warn!(
                        status = response.status,
                        url = %url,
                        "Subscribe rejected, token appears to be expired"
                    );
                    SubscriptionStatus::TokenExpired
                } else if response.status == 404 {
                    tracing::warn!(url = %url, "Subscribe endpoint not found");
                    SubscriptionStatus::EndpointNotFound
                } else {
                    let error = format!("HTTP {} returned by POST {}", response.status, url);
                    tracing::error!(
                        status = response.status,
                        error = %error,
                        "Newsletter subscription failed"
                    );
                    SubscriptionStatus::RequestFailed(error)
                }
            }
            Err(e) => {
                tracing::error!(error = %e, url = %url, "Newsletter subscription failed");
                SubscriptionStatus::RequestFailed(e.to_string())
            }
        }
    }
}

fn mentions_login(body: &str) -> bool {
    body.to_ascii_lowercase().contains(LOGIN_MARKER)
}

#[async_trait]
impl NewsletterApi for NgoToolsClient {
    async fn fetch_segments(&self) -> Vec<Segment> {
        let settings = match self.settings.load().await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load newsletter settings");
                return Vec::new();
            }
        };

        let Ok(host) = settings.organization() else {
            return Vec::new();
        };
        let Some(token) = self.decrypt_token(&settings.encrypted_bearer_token) else {
            return Vec::new();
        };

        let url = Self::segments_url(&host);
        let request = self.request(HttpMethod::Get, url.clone(), token);

        let response = match self.transport.send(request).await {
            Ok(response) if response.is_success() => response,
            Ok(response) => {
                tracing::error!(status = response.status, url = %url, "Segment listing failed");
                return Vec::new();
            }
            Err(e) => {
                tracing::error!(error = %e, url = %url, "Segment listing failed");
                return Vec::new();
            }
        };

        match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(body) => {
                let segments = Segment::list_from_response(&body);
                tracing::debug!(count = segments.len(), "Fetched contact segments");
                segments
            }
            Err(e) => {
                tracing::error!(error = %e, url = %url, "Segment listing returned invalid JSON");
                Vec::new()
            }
        }
    }

    async fn subscribe_contact(&self, contact: &ContactSubmission) -> SubscriptionOutcome {
        let settings = match self.settings.load().await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load newsletter settings");
                return SubscriptionStatus::SettingsUnavailable.into();
            }
        };

        if !settings.has_segment() {
            return SubscriptionStatus::SegmentNotConfigured.into();
        }
        let Some(token) = self.decrypt_token(&settings.encrypted_bearer_token) else {
            return SubscriptionStatus::TokenNotConfigured.into();
        };
        let Ok(host) = settings.organization() else {
            return SubscriptionStatus::OrganizationNotConfigured.into();
        };

        let Some(url) = Self::subscribe_url(&host, settings.segment_id.trim()) else {
            tracing::error!(segment_id = %settings.segment_id, "Segment id cannot be used in a URL");
            return SubscriptionStatus::RequestFailed(INVALID_SEGMENT_MESSAGE.to_string()).into();
        };
        let body = match serde_json::to_value(contact.to_payload()) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode contact payload");
                return SubscriptionStatus::RequestFailed(e.to_string()).into();
            }
        };
        let request = self
            .request(HttpMethod::Post, url.clone(), token)
            .with_json_body(body);

        let status = Self::classify(&url, self.transport.send(request).await);
        if status.is_success() {
            tracing::info!(segment_id = %settings.segment_id, "Contact subscribed to newsletter");
        }
        status.into()
    }
}
