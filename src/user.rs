use serde::{Deserialize, Serialize};

/// The bot's own profile as delivered in the READY payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

/// Decode the raw `user` value from READY. Returns `None` when the payload
/// is missing required fields rather than failing the connection.
pub fn decode_user(raw: &serde_json::Value) -> Option<User> {
    serde_json::from_value(raw.clone()).ok()
}
