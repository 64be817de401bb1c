use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CredentialResponse {
    pub credential: String,
}
