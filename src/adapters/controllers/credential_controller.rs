use axum::{extract::State, Json};
use tracing::info;

use crate::{
    adapters::{dto::credential_dto::CredentialResponse, state::AppState},
    application::error::ApplicationError,
};

pub struct CredentialController;

impl CredentialController {
    /// Genera una credencial de un solo uso para subir archivos a IPFS
    /// POST /api/files
    ///
    /// Capability-narrowing proxy: the minted credential is handed straight
    /// back to the caller, never stored, cached, or written to the log.
    pub async fn issue_credential(
        State(app_state): State<AppState>,
    ) -> Result<Json<CredentialResponse>, ApplicationError> {
        let credential = app_state
            .credential_service
            .issue_upload_credential()
            .await?;

        info!("Single-use upload credential minted");

        Ok(Json(CredentialResponse { credential }))
    }
}
