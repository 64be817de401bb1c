use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider error: {0}")]
    Upstream(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ProviderError::Network("Request timeout".to_string())
        } else if error.is_connect() {
            ProviderError::Network(format!("Connection failed: {}", error))
        } else if error.is_decode() {
            ProviderError::MalformedResponse(error.to_string())
        } else if let Some(status) = error.status() {
            match status.as_u16() {
                401 | 403 => ProviderError::Unauthorized(error.to_string()),
                _ => ProviderError::Upstream(error.to_string()),
            }
        } else {
            ProviderError::Internal(error.to_string())
        }
    }
}
