//! NGO Tools Newsletter - HTTP Server Entry Point
//!
//! Serves the public signup form and the admin settings form.

use std::sync::Arc;

use anyhow::Context;
use ngo_tools_newsletter::adapters::crypto::{AesCbcTokenCipher, SiteSecretKeyProvider};
use ngo_tools_newsletter::adapters::http::{newsletter_router, NewsletterAppState};
use ngo_tools_newsletter::adapters::ngo_tools::NgoToolsClient;
use ngo_tools_newsletter::adapters::storage::FileSettingsRepository;
use ngo_tools_newsletter::adapters::transport::ReqwestTransport;
use ngo_tools_newsletter::config::AppConfig;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.log_level.clone().into());
    let (json_layer, text_layer) = if config.is_production() {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer()))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    info!(
        environment = ?config.server.environment,
        settings_path = %config.storage.settings_path.display(),
        "Loaded configuration"
    );
    if !config.api.verify_tls {
        warn!("TLS certificate verification is disabled for NGO Tools API calls");
    }

    // Wire adapters
    let key_provider = SiteSecretKeyProvider::new(config.security.site_secret.clone());
    let cipher = Arc::new(AesCbcTokenCipher::new(&key_provider));
    let settings = Arc::new(FileSettingsRepository::new(&config.storage.settings_path));
    let transport = Arc::new(
        ReqwestTransport::new(config.api.verify_tls).context("Failed to create HTTP client")?,
    );
    let api = Arc::new(NgoToolsClient::new(
        settings.clone(),
        cipher.clone(),
        transport,
        config.api.timeout(),
    ));

    let app = newsletter_router()
        .with_state(NewsletterAppState::new(settings, cipher, api))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(config.server.request_timeout())),
        );

    // Start HTTP server
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutting down");
        })
        .await?;

    Ok(())
}
