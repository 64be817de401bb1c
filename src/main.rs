use std::sync::Arc;

use axum::{routing::get, Router};
use pinning_service::{
    adapters::{routes::api_router, state::AppState},
    application::services::CredentialService,
    domain::config::{pinata::PinataConfig, secrets::PinataSecrets},
    services::PinataClient,
};
use tower_http::cors::{Any, CorsLayer};

async fn hello_world() -> &'static str {
    "Hello, world!"
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Explicit configuration at process start; nothing below reads the
    // environment after this point.
    let master_jwt = std::env::var("PINATA_JWT")
        .expect("ERROR: PINATA_JWT environment variable must be set");

    let gateway_url = std::env::var("PINATA_GATEWAY_URL")
        .expect("ERROR: PINATA_GATEWAY_URL environment variable must be set");

    let api_url = std::env::var("PINATA_API_URL")
        .unwrap_or_else(|_| PinataConfig::DEFAULT_API_URL.to_string());

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .expect("PORT must be a valid u16");

    // Configure CORS
    let cors = if let Ok(allowed_origins) = std::env::var("CORS_ALLOWED_ORIGINS") {
        // Parse comma-separated origins
        let origins: Vec<_> = allowed_origins
            .split(',')
            .map(|s| s.trim().parse().expect("Invalid CORS origin"))
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Allow all origins if not specified (only for development)
        CorsLayer::permissive()
    };

    let config = PinataConfig::new(api_url, gateway_url);
    tracing::info!(
        "Starting pinning-service against {} (gateway {})",
        config.api_url,
        config.gateway_url
    );

    let pinata = Arc::new(PinataClient::new(
        &config,
        PinataSecrets { master_jwt },
    ));

    let app_state = AppState {
        credential_service: pinata as Arc<dyn CredentialService>,
        gateway_url: config.gateway_url.clone(),
    };

    let router = Router::new()
        .route("/", get(hello_world))
        .merge(api_router(app_state))
        .layer(cors);

    // Start the server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
