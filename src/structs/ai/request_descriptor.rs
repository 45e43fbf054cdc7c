use serde::{Deserialize, Serialize};
use crate::enums::chat_role::ChatRole;
use crate::structs::ai::chat_message::ChatMessage;
use crate::structs::combination::Combination;

/// Transport-agnostic description of one generation request.
///
/// `stop` is `None` when no stop sequence was requested; providers must not
/// turn that into an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    pub stop: Option<String>,
}

impl RequestDescriptor {
    pub fn system_message(&self) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.role == ChatRole::System)
    }

    pub fn user_message(&self) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.role == ChatRole::User)
    }

    pub fn combination(&self) -> Combination {
        Combination::new(
            self.temperature,
            self.max_tokens,
            self.presence_penalty,
            self.frequency_penalty,
        )
    }
}
