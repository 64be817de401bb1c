use async_trait::async_trait;
use reqwest::Client;

use crate::application::{error::ApplicationError, services::CredentialService};

/// Credential source for callers running in a different process than the
/// issuer endpoint: POSTs to the service's `/api/files` route and reads the
/// `credential` field.
pub struct RemoteCredentialIssuer {
    client: Client,
    endpoint: String,
}

impl RemoteCredentialIssuer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CredentialService for RemoteCredentialIssuer {
    async fn issue_upload_credential(&self) -> Result<String, ApplicationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .send()
            .await
            .map_err(|e| ApplicationError::MintFailed(format!("Credential request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ApplicationError::MintFailed(format!(
                "Credential endpoint returned status {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            ApplicationError::MintFailed(format!("Invalid credential response: {}", e))
        })?;

        body.get("credential")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .ok_or_else(|| {
                ApplicationError::MintFailed(
                    "Credential response is missing the 'credential' field".to_string(),
                )
            })
    }
}
