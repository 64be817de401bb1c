use async_trait::async_trait;
use reqwest::{multipart, Client};
use serde_json::json;

use crate::{
    application::{
        error::ApplicationError,
        services::{CredentialService, PinningService},
    },
    domain::{
        config::{pinata::PinataConfig, secrets::PinataSecrets},
        models::file::FileData,
    },
    services::error::ProviderError,
};

/// Fixed restriction descriptor for minted credentials: one use, pin-file
/// only, every other capability denied.
fn upload_key_restrictions() -> serde_json::Value {
    json!({
        "keyName": "Signed Upload JWT",
        "maxUses": 1,
        "permissions": {
            "endpoints": {
                "data": {
                    "pinList": false,
                    "userPinnedDataTotal": false
                },
                "pinning": {
                    "pinFileToIPFS": true,
                    "pinJSONToIPFS": false,
                    "pinJobs": false,
                    "unpin": false,
                    "userPinPolicy": false
                }
            }
        }
    })
}

pub struct PinataClient {
    client: Client,
    api_url: String,
    master_jwt: String,
}

impl PinataClient {
    pub fn new(config: &PinataConfig, secrets: PinataSecrets) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            master_jwt: secrets.master_jwt,
        }
    }

    /// Mints a short-lived, single-use, upload-only credential using the
    /// master secret. The minted value is returned to the caller and never
    /// stored or logged here.
    pub async fn mint_upload_credential(&self) -> Result<String, ProviderError> {
        let url = format!("{}/users/generateApiKey", self.api_url);

        let response = self
            .client
            .post(&url)
            .header("accept", "application/json")
            .header("Authorization", format!("Bearer {}", self.master_jwt))
            .json(&upload_key_restrictions())
            .send()
            .await
            .map_err(ProviderError::from)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream(format!(
                "Credential mint failed with status {}: {}",
                status, error_text
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        body.get("JWT")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .ok_or_else(|| {
                ProviderError::MalformedResponse(
                    "Mint response is missing the 'JWT' field".to_string(),
                )
            })
    }

    /// Pins one file with the given bearer credential and returns the
    /// upstream content identifier.
    pub async fn pin_file_to_ipfs(
        &self,
        credential: &str,
        file: FileData,
    ) -> Result<String, ProviderError> {
        let FileData {
            content,
            filename,
            mime_type,
        } = file;

        let file_part = multipart::Part::bytes(content)
            .file_name(filename)
            .mime_str(&mime_type)
            .map_err(|e| ProviderError::Internal(e.to_string()))?;

        let form = multipart::Form::new().part("file", file_part);

        let url = format!("{}/pinning/pinFileToIPFS", self.api_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", credential))
            .multipart(form)
            .send()
            .await
            .map_err(ProviderError::from)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream(format!(
                "Pin failed with status {}: {}",
                status, error_text
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        body.get("IpfsHash")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .ok_or_else(|| {
                ProviderError::MalformedResponse(
                    "Pin response is missing the 'IpfsHash' field".to_string(),
                )
            })
    }
}

#[async_trait]
impl CredentialService for PinataClient {
    async fn issue_upload_credential(&self) -> Result<String, ApplicationError> {
        self.mint_upload_credential()
            .await
            .map_err(|e| ApplicationError::MintFailed(e.to_string()))
    }
}

#[async_trait]
impl PinningService for PinataClient {
    async fn pin_file(&self, credential: &str, file: FileData) -> Result<String, ApplicationError> {
        self.pin_file_to_ipfs(credential, file)
            .await
            .map_err(|e| ApplicationError::UploadFailed(e.to_string()))
    }
}
