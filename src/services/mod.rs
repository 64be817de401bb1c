mod error;
mod pinata;
mod remote_issuer;

pub use error::ProviderError;
pub use pinata::PinataClient;
pub use remote_issuer::RemoteCredentialIssuer;
