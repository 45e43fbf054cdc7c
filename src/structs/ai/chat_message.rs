use serde::{Deserialize, Serialize};
use crate::enums::chat_role::ChatRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: String) -> Self {
        Self { role: ChatRole::System, content }
    }

    pub fn user(content: String) -> Self {
        Self { role: ChatRole::User, content }
    }
}
