use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::file::FileData};

/// Pins one file on the upstream provider using a just-minted credential.
/// Returns the upstream content identifier.
#[async_trait]
pub trait PinningService: Send + Sync {
    async fn pin_file(&self, credential: &str, file: FileData) -> Result<String, ApplicationError>;
}
