/// Upstream provider endpoints, resolved once at process start.
#[derive(Debug, Clone)]
pub struct PinataConfig {
    pub api_url: String,
    pub gateway_url: String,
}

impl PinataConfig {
    pub const DEFAULT_API_URL: &'static str = "https://api.pinata.cloud";

    pub fn new(api_url: String, gateway_url: String) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
        }
    }
}
