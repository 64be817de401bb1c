mod credential_service;
mod pinning_service;
mod upload_orchestrator;

pub use credential_service::CredentialService;
pub use pinning_service::PinningService;
pub use upload_orchestrator::{UploadOrchestrator, UploadStatus};
