use super::store::CredentialStore;
use crate::models::ApiCredentials;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FilesystemCredentialStore;

impl FilesystemCredentialStore {
    pub fn new() -> Self {
        Self
    }

    fn get_store_dir(&self) -> PathBuf {
        let home = env::var("HOME").expect("HOME environment variable not set");
        let store_dir = Path::new(&home)
            .join(".config")
            .join("tgrab")
            .join("credentials");
        if !store_dir.exists() {
            fs::create_dir_all(&store_dir).expect("Failed to create credential directory");
        }
        store_dir
    }

    fn record_path(&self, session: &str) -> PathBuf {
        self.get_store_dir().join(format!("{}.json", session))
    }
}

impl CredentialStore for FilesystemCredentialStore {
    fn load(&self, session: &str) -> Option<ApiCredentials> {
        let content = fs::read_to_string(self.record_path(session)).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn save(
        &self,
        session: &str,
        credentials: &ApiCredentials,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(credentials)?;
        fs::write(self.record_path(session), content)?;
        Ok(())
    }

    fn delete(&self, session: &str) -> Result<(), Box<dyn std::error::Error>> {
        let path = self.record_path(session);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn clear_all(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Ok(entries) = fs::read_dir(self.get_store_dir()) {
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if path.extension() == Some(std::ffi::OsStr::new("json")) {
                    fs::remove_file(path)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for FilesystemCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
