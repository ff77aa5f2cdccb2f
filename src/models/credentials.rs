use serde::{Deserialize, Serialize};

/// API credentials for one session, as issued on my.telegram.org.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiCredentials {
    pub api_id: i32,
    pub api_hash: String,
}
