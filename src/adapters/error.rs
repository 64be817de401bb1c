use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::error::ApplicationError;

// Every failure maps to a generic 500. Callers get no detail about the
// upstream exchange, and no partial credential is ever returned.
impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::MintFailed(ref msg) => {
                error!("Credential mint failed: {}", msg);
            }
            ApplicationError::UploadFailed(ref msg) => {
                error!("File upload failed: {}", msg);
            }
        }

        let body = Json(json!({
            "error": "Internal Server Error",
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
