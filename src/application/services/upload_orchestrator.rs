use std::sync::{Arc, Mutex};

use tracing::{error, info};
use uuid::Uuid;

use crate::{
    application::{
        error::ApplicationError,
        services::{CredentialService, PinningService},
    },
    domain::models::{file::FileData, upload::UploadResult},
};

#[derive(Debug, Clone, Default)]
pub struct UploadStatus {
    pub is_uploading: bool,
    pub upload_error: Option<String>,
}

/// Client-side upload workflow: mint one single-use credential, consume it
/// immediately against the pin endpoint, derive the gateway URL.
///
/// The per-call `Result` is authoritative. The shared status is last-write-wins
/// across concurrent calls and only reflects the most recently finished one.
pub struct UploadOrchestrator {
    issuer: Arc<dyn CredentialService>,
    pinning: Arc<dyn PinningService>,
    gateway_url: String,
    status: Mutex<UploadStatus>,
}

impl UploadOrchestrator {
    pub fn new(
        issuer: Arc<dyn CredentialService>,
        pinning: Arc<dyn PinningService>,
        gateway_url: String,
    ) -> Self {
        Self {
            issuer,
            pinning,
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
            status: Mutex::new(UploadStatus::default()),
        }
    }

    /// Uploads one file. Mints exactly one credential and, if minting
    /// succeeded, issues exactly one pin call. No retries: a failed attempt
    /// terminates here and a new call mints a brand-new credential.
    pub async fn upload_file(&self, file: FileData) -> Result<UploadResult, ApplicationError> {
        let attempt_id = Uuid::new_v4();
        {
            let mut status = self.status.lock().unwrap();
            status.is_uploading = true;
            status.upload_error = None;
        }
        info!(
            "Upload attempt {} started for '{}' ({} bytes)",
            attempt_id,
            file.filename,
            file.size()
        );

        let result = self.run_upload(file).await;

        let mut status = self.status.lock().unwrap();
        status.is_uploading = false;
        match result {
            Ok(upload) => {
                info!(
                    "Upload attempt {} pinned as {}",
                    attempt_id, upload.content_id
                );
                Ok(upload)
            }
            Err(e) => {
                let message = format!("Upload to IPFS failed: {}", e.reason());
                error!("Upload attempt {} failed: {}", attempt_id, message);
                status.upload_error = Some(message);
                Err(e)
            }
        }
    }

    // Mint failure short-circuits: the pin endpoint would reject a missing
    // credential with an authorization error anyway.
    async fn run_upload(&self, file: FileData) -> Result<UploadResult, ApplicationError> {
        let credential = self.issuer.issue_upload_credential().await?;
        let content_id = self.pinning.pin_file(&credential, file).await?;
        Ok(UploadResult::new(content_id, &self.gateway_url))
    }

    /// Snapshot of the shared status. Reflects the most recently finished
    /// call when uploads run concurrently.
    pub fn status(&self) -> UploadStatus {
        self.status.lock().unwrap().clone()
    }

    pub fn is_uploading(&self) -> bool {
        self.status.lock().unwrap().is_uploading
    }

    pub fn upload_error(&self) -> Option<String> {
        self.status.lock().unwrap().upload_error.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    struct StubIssuer {
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubIssuer {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl CredentialService for StubIssuer {
        async fn issue_upload_credential(&self) -> Result<String, ApplicationError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ApplicationError::MintFailed("mint unavailable".to_string()))
            } else {
                Ok(format!("credential-{}", n))
            }
        }
    }

    struct StubPinning {
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubPinning {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl PinningService for StubPinning {
        async fn pin_file(
            &self,
            credential: &str,
            file: FileData,
        ) -> Result<String, ApplicationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert!(credential.starts_with("credential-"));
            if self.fail {
                Err(ApplicationError::UploadFailed("pin rejected".to_string()))
            } else {
                Ok(format!("Qm-{}", file.filename))
            }
        }
    }

    fn orchestrator(
        issuer: Arc<StubIssuer>,
        pinning: Arc<StubPinning>,
    ) -> UploadOrchestrator {
        UploadOrchestrator::new(
            issuer as Arc<dyn CredentialService>,
            pinning as Arc<dyn PinningService>,
            "https://gateway.example.com".to_string(),
        )
    }

    fn song(name: &str) -> FileData {
        FileData::new(vec![1, 2, 3], name.to_string(), "audio/mpeg".to_string())
    }

    #[tokio::test]
    async fn successful_upload_mints_and_pins_exactly_once() {
        let issuer = Arc::new(StubIssuer::new(false));
        let pinning = Arc::new(StubPinning::new(false));
        let orchestrator = orchestrator(issuer.clone(), pinning.clone());

        let result = orchestrator.upload_file(song("track.mp3")).await.unwrap();

        assert_eq!(result.content_id, "Qm-track.mp3");
        assert_eq!(
            result.retrieval_url,
            "https://gateway.example.com/ipfs/Qm-track.mp3"
        );
        assert_eq!(issuer.calls.load(Ordering::SeqCst), 1);
        assert_eq!(pinning.calls.load(Ordering::SeqCst), 1);
        assert!(!orchestrator.is_uploading());
        assert!(orchestrator.upload_error().is_none());
    }

    #[tokio::test]
    async fn mint_failure_short_circuits_before_pinning() {
        let issuer = Arc::new(StubIssuer::new(true));
        let pinning = Arc::new(StubPinning::new(false));
        let orchestrator = orchestrator(issuer.clone(), pinning.clone());

        let result = orchestrator.upload_file(song("track.mp3")).await;

        assert!(matches!(result, Err(ApplicationError::MintFailed(_))));
        assert_eq!(issuer.calls.load(Ordering::SeqCst), 1);
        assert_eq!(pinning.calls.load(Ordering::SeqCst), 0);
        assert!(!orchestrator.is_uploading());
        let error = orchestrator.upload_error().unwrap();
        assert!(error.contains("mint unavailable"));
    }

    #[tokio::test]
    async fn pin_failure_sets_error_and_returns_none_result() {
        let issuer = Arc::new(StubIssuer::new(false));
        let pinning = Arc::new(StubPinning::new(true));
        let orchestrator = orchestrator(issuer.clone(), pinning.clone());

        let result = orchestrator.upload_file(song("track.mp3")).await;

        assert!(matches!(result, Err(ApplicationError::UploadFailed(_))));
        assert!(!orchestrator.is_uploading());
        let error = orchestrator.upload_error().unwrap();
        assert!(error.contains("Upload to IPFS failed"));
        assert!(error.contains("pin rejected"));
    }

    #[tokio::test]
    async fn concurrent_uploads_get_independent_results() {
        let issuer = Arc::new(StubIssuer::new(false));
        let pinning = Arc::new(StubPinning::new(false));
        let orchestrator = Arc::new(orchestrator(issuer.clone(), pinning.clone()));

        let (a, b) = tokio::join!(
            orchestrator.upload_file(song("vocals.wav")),
            orchestrator.upload_file(song("cover.png"))
        );

        let a = a.unwrap();
        let b = b.unwrap();
        assert_eq!(a.content_id, "Qm-vocals.wav");
        assert!(a.retrieval_url.ends_with("/ipfs/Qm-vocals.wav"));
        assert_eq!(b.content_id, "Qm-cover.png");
        assert!(b.retrieval_url.ends_with("/ipfs/Qm-cover.png"));
        // Each call minted its own credential.
        assert_eq!(issuer.calls.load(Ordering::SeqCst), 2);
        assert_eq!(pinning.calls.load(Ordering::SeqCst), 2);
        assert!(!orchestrator.is_uploading());
    }
}
