use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::{
    controllers::{
        credential_controller::CredentialController, health_controller::HealthController,
    },
    state::AppState,
};

pub fn api_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/files", post(CredentialController::issue_credential))
        .route("/api/v1/health", get(HealthController::health_check))
        .with_state(app_state)
}
