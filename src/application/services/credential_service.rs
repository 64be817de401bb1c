use async_trait::async_trait;

use crate::application::error::ApplicationError;

/// Mints a fresh single-use, upload-only credential from the upstream
/// provider. One call per upload attempt; credentials are never cached
/// or shared between attempts.
#[async_trait]
pub trait CredentialService: Send + Sync {
    async fn issue_upload_credential(&self) -> Result<String, ApplicationError>;
}
