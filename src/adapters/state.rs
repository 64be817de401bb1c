use axum::extract::FromRef;
use std::sync::Arc;

use crate::application::services::CredentialService;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub credential_service: Arc<dyn CredentialService>,
    pub gateway_url: String,
}
