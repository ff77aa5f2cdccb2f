use crate::models::ApiCredentials;

/// Trait for credential storage backends
pub trait CredentialStore: Send + Sync {
    /// Load the credentials stored for a session name, if any
    fn load(&self, session: &str) -> Option<ApiCredentials>;

    /// Persist credentials for a session name
    fn save(
        &self,
        session: &str,
        credentials: &ApiCredentials,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Remove the credentials for a session name; missing records are fine
    fn delete(&self, session: &str) -> Result<(), Box<dyn std::error::Error>>;

    /// Remove every stored credential record
    fn clear_all(&self) -> Result<(), Box<dyn std::error::Error>>;
}
