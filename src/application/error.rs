#[derive(Debug)]
pub enum ApplicationError {
    MintFailed(String),
    UploadFailed(String),
}

impl ApplicationError {
    /// The underlying failure text, without the variant framing.
    pub fn reason(&self) -> &str {
        match self {
            ApplicationError::MintFailed(msg) | ApplicationError::UploadFailed(msg) => msg,
        }
    }
}
