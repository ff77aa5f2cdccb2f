use crate::error::{Result, TgrabError};
use crate::models::ApiCredentials;
use grammers_client::types::Chat;
use grammers_client::{Client, Config, InitParams};
use grammers_session::Session;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn session_dir() -> PathBuf {
    let home = env::var("HOME").expect("HOME environment variable not set");
    let dir = Path::new(&home)
        .join(".local")
        .join("share")
        .join("tgrab")
        .join("sessions");
    if !dir.exists() {
        fs::create_dir_all(&dir).expect("Failed to create session directory");
    }
    dir
}

pub fn session_path(session: &str) -> PathBuf {
    session_dir().join(format!("{}.session", session))
}

/// Connect to Telegram with the session file for `session`, creating it if
/// this is a first login. The returned client may not be authorized yet.
pub async fn connect(session: &str, credentials: &ApiCredentials) -> Result<Client> {
    let stored = Session::load_file_or_create(session_path(session))?;
    let client = Client::connect(Config {
        session: stored,
        api_id: credentials.api_id,
        api_hash: credentials.api_hash.clone(),
        params: InitParams::default(),
    })
    .await
    .map_err(|e| TgrabError::Auth(e.to_string()))?;
    Ok(client)
}

pub fn save_session(client: &Client, session: &str) -> Result<()> {
    client.session().save_to_file(session_path(session))?;
    Ok(())
}

pub fn remove_session(session: &str) -> Result<()> {
    let path = session_path(session);
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

pub fn clear_sessions() -> Result<()> {
    if let Ok(entries) = fs::read_dir(session_dir()) {
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension() == Some(std::ffi::OsStr::new("session")) {
                fs::remove_file(path)?;
            }
        }
    }
    Ok(())
}

/// Every dialog the account can see, filtered down to channels and groups.
pub async fn list_group_dialogs(client: &Client) -> Result<Vec<Chat>> {
    let mut dialogs = client.iter_dialogs();
    let mut chats = Vec::new();
    while let Some(dialog) = dialogs.next().await? {
        let chat = dialog.chat();
        if matches!(chat, Chat::Group(_) | Chat::Channel(_)) {
            chats.push(chat.clone());
        }
    }
    Ok(chats)
}

pub fn chat_title(chat: &Chat) -> &str {
    let name = chat.name();
    if name.is_empty() {
        "(unnamed)"
    } else {
        name
    }
}
