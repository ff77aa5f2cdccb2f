use std::sync::Mutex;
use tempfile::TempDir;
use tgrab::credentials::{CredentialStore, FilesystemCredentialStore};
use tgrab::models::ApiCredentials;

// The store derives its directory from HOME; serialize the tests that
// override it.
static HOME_LOCK: Mutex<()> = Mutex::new(());

fn test_credentials() -> ApiCredentials {
    ApiCredentials {
        api_id: 12345,
        api_hash: "0123456789abcdef".to_string(),
    }
}

#[test]
fn test_save_and_load() {
    let _guard = HOME_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let store = FilesystemCredentialStore::new();
    store.save("alice", &test_credentials()).unwrap();

    let loaded = store.load("alice").unwrap();
    assert_eq!(loaded.api_id, 12345);
    assert_eq!(loaded.api_hash, "0123456789abcdef");
}

#[test]
fn test_load_missing_returns_none() {
    let _guard = HOME_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let store = FilesystemCredentialStore::new();
    assert!(store.load("nobody").is_none());
}

#[test]
fn test_delete_removes_record() {
    let _guard = HOME_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let store = FilesystemCredentialStore::new();
    store.save("bob", &test_credentials()).unwrap();
    assert!(store.load("bob").is_some());

    store.delete("bob").unwrap();
    assert!(store.load("bob").is_none());

    // Deleting a missing record is not an error
    store.delete("bob").unwrap();
}

#[test]
fn test_clear_all_sessions() {
    let _guard = HOME_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let store = FilesystemCredentialStore::new();
    store.save("one", &test_credentials()).unwrap();
    store.save("two", &test_credentials()).unwrap();

    store.clear_all().unwrap();
    assert!(store.load("one").is_none());
    assert!(store.load("two").is_none());
}
