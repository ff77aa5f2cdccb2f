use std::fmt;

#[derive(Debug)]
pub enum TgrabError {
    Auth(String),
    Client(grammers_client::InvocationError),
    Credentials(String),
    InvalidInput(String),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl fmt::Display for TgrabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TgrabError::Auth(msg) => write!(f, "Authentication error: {}", msg),
            TgrabError::Client(e) => write!(f, "Telegram API error: {}", e),
            TgrabError::Credentials(msg) => write!(f, "Credential error: {}", msg),
            TgrabError::InvalidInput(msg) => write!(f, "{}", msg),
            TgrabError::IoError(e) => write!(f, "IO error: {}", e),
            TgrabError::JsonError(e) => write!(f, "JSON error: {}", e),
            TgrabError::YamlError(e) => write!(f, "YAML error: {}", e),
            TgrabError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for TgrabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TgrabError::Client(e) => Some(e),
            TgrabError::IoError(e) => Some(e),
            TgrabError::JsonError(e) => Some(e),
            TgrabError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<grammers_client::InvocationError> for TgrabError {
    fn from(err: grammers_client::InvocationError) -> Self {
        TgrabError::Client(err)
    }
}

impl From<std::io::Error> for TgrabError {
    fn from(err: std::io::Error) -> Self {
        TgrabError::IoError(err)
    }
}

impl From<serde_json::Error> for TgrabError {
    fn from(err: serde_json::Error) -> Self {
        TgrabError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for TgrabError {
    fn from(err: serde_yaml::Error) -> Self {
        TgrabError::YamlError(err)
    }
}

impl From<anyhow::Error> for TgrabError {
    fn from(err: anyhow::Error) -> Self {
        TgrabError::Other(err.to_string())
    }
}

impl From<String> for TgrabError {
    fn from(msg: String) -> Self {
        TgrabError::Other(msg)
    }
}

impl From<&str> for TgrabError {
    fn from(msg: &str) -> Self {
        TgrabError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TgrabError>;
