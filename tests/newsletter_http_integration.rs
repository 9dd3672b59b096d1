//! Integration tests for the newsletter HTTP endpoints.
//!
//! These tests drive the full stack through the router:
//! 1. Admin saves settings (token encrypted to a YAML file)
//! 2. Segment lookup uses the decrypted token
//! 3. Signup posts the contact and renders the confirmation

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use secrecy::ExposeSecret;
use tempfile::TempDir;
use tower::ServiceExt;

use ngo_tools_newsletter::adapters::crypto::{AesCbcTokenCipher, StaticKeyProvider};
use ngo_tools_newsletter::adapters::http::{newsletter_router, NewsletterAppState};
use ngo_tools_newsletter::adapters::ngo_tools::NgoToolsClient;
use ngo_tools_newsletter::adapters::storage::FileSettingsRepository;
use ngo_tools_newsletter::adapters::transport::MockTransport;
use ngo_tools_newsletter::ports::{HttpMethod, SettingsRepository, KEY_LENGTH};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    repo: Arc<FileSettingsRepository>,
    transport: MockTransport,
    _dir: TempDir,
}

impl TestApp {
    fn new(transport: MockTransport) -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Arc::new(FileSettingsRepository::new(
            dir.path().join("newsletter-settings.yaml"),
        ));
        let cipher = Arc::new(AesCbcTokenCipher::new(&StaticKeyProvider::new(
            [7; KEY_LENGTH],
        )));
        let api = Arc::new(NgoToolsClient::new(
            repo.clone(),
            cipher.clone(),
            Arc::new(transport.clone()),
            Duration::from_secs(15),
        ));
        let router =
            newsletter_router().with_state(NewsletterAppState::new(repo.clone(), cipher, api));

        Self {
            router,
            repo,
            transport,
            _dir: dir,
        }
    }

    async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn post_form(&self, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}

const SEGMENTS_BODY: &str = r#"{"data":[{"id":"11","name":"Donors"},{"id":"12","name":"Volunteers"}]}"#;

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn settings_save_encrypts_token_and_lists_segments() {
    // One lookup for the re-rendered form after saving.
    let app = TestApp::new(MockTransport::new().with_response(200, SEGMENTS_BODY));

    let (status, html) = app
        .post_form(
            "/admin/newsletter/settings",
            "api_bearer_token=secret-token&organization_name=foo.ngo.tools&segment_id=12&confirmation_message=See+%5Bemail%5D",
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("The configuration options have been saved."));
    assert!(html.contains("<option value=\"12\" selected>Volunteers</option>"));
    assert!(!html.contains("secret-token"));

    let stored = app.repo.load().await.unwrap();
    assert_eq!(stored.organization_host, "foo.ngo.tools");
    assert_eq!(stored.segment_id, "12");
    assert!(!stored.encrypted_bearer_token.is_empty());
    assert_ne!(stored.encrypted_bearer_token, "secret-token");

    let request = app.transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, "https://foo.ngo.tools/api/v2/contact-segments");
    assert_eq!(request.bearer_token.expose_secret(), "secret-token");
}

#[tokio::test]
async fn invalid_organization_is_saved_with_message_and_no_lookup() {
    let app = TestApp::new(MockTransport::new());

    let (status, html) = app
        .post_form(
            "/admin/newsletter/settings",
            "api_bearer_token=tok&organization_name=foo.com&confirmation_message=",
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("The organisation name can&#39;t be empty and must end with .ngo.tools"));
    assert_eq!(app.repo.load().await.unwrap().organization_host, "foo.com");
    assert_eq!(app.transport.call_count(), 0);
}

#[tokio::test]
async fn empty_token_keeps_previous_one() {
    let app = TestApp::new(
        MockTransport::new()
            .with_response(200, SEGMENTS_BODY)
            .with_response(200, SEGMENTS_BODY),
    );

    app.post_form(
        "/admin/newsletter/settings",
        "api_bearer_token=first&organization_name=foo.ngo.tools&segment_id=11&confirmation_message=",
    )
    .await;
    let first_blob = app.repo.load().await.unwrap().encrypted_bearer_token;

    app.post_form(
        "/admin/newsletter/settings",
        "api_bearer_token=&organization_name=foo.ngo.tools&segment_id=11&confirmation_message=",
    )
    .await;

    assert_eq!(app.repo.load().await.unwrap().encrypted_bearer_token, first_blob);
    let request = app.transport.last_request().unwrap();
    assert_eq!(request.bearer_token.expose_secret(), "first");
}

#[tokio::test]
async fn unavailable_segments_show_warning() {
    let app = TestApp::new(MockTransport::new().with_response(401, "Unauthorized"));

    app.post_form(
        "/admin/newsletter/settings",
        "api_bearer_token=tok&organization_name=foo.ngo.tools&confirmation_message=",
    )
    .await;

    let (_, html) = app.get("/admin/newsletter/settings").await;
    assert!(html.contains("Could not load segments."));
    assert!(!html.contains("name=\"segment_id\""));
}

#[tokio::test]
async fn saving_while_segments_unavailable_keeps_segment() {
    let app = TestApp::new(
        MockTransport::new()
            .with_response(200, SEGMENTS_BODY)
            .with_response(503, "Service Unavailable")
            .with_response(503, "Service Unavailable"),
    );

    app.post_form(
        "/admin/newsletter/settings",
        "api_bearer_token=tok&organization_name=foo.ngo.tools&segment_id=11&confirmation_message=",
    )
    .await;

    let (_, html) = app.get("/admin/newsletter/settings").await;
    assert!(html.contains("Could not load segments."));
    assert!(!html.contains("name=\"segment_id\""));

    // Resubmit exactly the fields the rendered form carries.
    let (status, _) = app
        .post_form(
            "/admin/newsletter/settings",
            "api_bearer_token=&organization_name=foo.ngo.tools&confirmation_message=Thanks",
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let stored = app.repo.load().await.unwrap();
    assert_eq!(stored.segment_id, "11");
    assert_eq!(stored.confirmation_message, "Thanks");
    assert_eq!(app.transport.call_count(), 3);
}

#[tokio::test]
async fn signup_after_configuration_posts_contact_and_confirms() {
    let app = TestApp::new(
        MockTransport::new()
            .with_response(200, SEGMENTS_BODY)
            .with_response(201, "{}"),
    );

    app.post_form(
        "/admin/newsletter/settings",
        "api_bearer_token=tok&organization_name=foo.ngo.tools&segment_id=11&confirmation_message=Mail+sent+to+%5Bemail%5D",
    )
    .await;

    let (status, html) = app
        .post_form(
            "/newsletter/signup",
            "hp=&first_name=Jane&last_name=Doe&email=jane%40example.org",
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Mail sent to jane@example.org"));

    let request = app.transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(
        request.url,
        "https://foo.ngo.tools/api/v2/contact-segments/11/subscribe"
    );
    assert_eq!(
        request.json_body,
        Some(serde_json::json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.org"
        }))
    );
}

#[tokio::test]
async fn expired_token_is_reported_to_visitor() {
    let app = TestApp::new(
        MockTransport::new()
            .with_response(200, SEGMENTS_BODY)
            .with_response(302, "<html>Redirecting to /login</html>"),
    );

    app.post_form(
        "/admin/newsletter/settings",
        "api_bearer_token=tok&organization_name=foo.ngo.tools&segment_id=11&confirmation_message=",
    )
    .await;

    let (status, html) = app
        .post_form("/newsletter/signup", "email=jane%40example.org")
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("Failed to subscribe: The token seems to be expired"));
}

#[tokio::test]
async fn invalid_email_is_rejected_and_echoed() {
    let app = TestApp::new(MockTransport::new());

    let (status, html) = app
        .post_form("/newsletter/signup", "first_name=Jane&email=not-an-email")
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("Please enter a valid email address."));
    assert!(html.contains("value=\"Jane\""));
    assert_eq!(app.transport.call_count(), 0);
}
