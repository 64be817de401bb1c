use serde::Serialize;

/// Outcome of one successful pin: the upstream content identifier and the
/// public gateway URL resolving it.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResult {
    #[serde(rename = "contentId")]
    pub content_id: String,
    #[serde(rename = "retrievalUrl")]
    pub retrieval_url: String,
}

impl UploadResult {
    pub fn new(content_id: String, gateway_url: &str) -> Self {
        let retrieval_url = format!("{}/ipfs/{}", gateway_url.trim_end_matches('/'), content_id);
        Self {
            content_id,
            retrieval_url,
        }
    }
}
