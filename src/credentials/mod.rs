mod filesystem;
mod store;

pub use filesystem::FilesystemCredentialStore;
pub use store::CredentialStore;

use crate::models::ApiCredentials;

/// Convenience functions that use the default filesystem store
pub fn load(session: &str) -> Option<ApiCredentials> {
    FilesystemCredentialStore::new().load(session)
}

pub fn save(
    session: &str,
    credentials: &ApiCredentials,
) -> Result<(), Box<dyn std::error::Error>> {
    FilesystemCredentialStore::new().save(session, credentials)
}

pub fn delete(session: &str) -> Result<(), Box<dyn std::error::Error>> {
    FilesystemCredentialStore::new().delete(session)
}

pub fn clear_all() -> Result<(), Box<dyn std::error::Error>> {
    FilesystemCredentialStore::new().clear_all()
}
