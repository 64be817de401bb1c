/// Long-lived master secret used only to mint short-lived scoped credentials.
/// Injected explicitly at process start; components never read the environment.
#[derive(Clone)]
pub struct PinataSecrets {
    pub master_jwt: String,
}

impl std::fmt::Debug for PinataSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinataSecrets")
            .field("master_jwt", &"<redacted>")
            .finish()
    }
}
