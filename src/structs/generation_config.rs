use serde::{Deserialize, Serialize};
use crate::structs::combination::Combination;

/// Everything needed to issue a single generation request.
///
/// An empty `system_prompt` means no system message is sent. `stop_sequence`
/// is `None` when the caller wants no stop sequence at all; an empty string is
/// a different (and unusual) request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model: String,

    #[serde(default)]
    pub system_prompt: String,

    pub user_prompt: String,

    pub product: String,

    pub temperature: f32,

    pub max_tokens: u32,

    pub presence_penalty: f32,

    pub frequency_penalty: f32,

    #[serde(default)]
    pub stop_sequence: Option<String>,
}

impl GenerationConfig {
    pub fn combination(&self) -> Combination {
        Combination::new(
            self.temperature,
            self.max_tokens,
            self.presence_penalty,
            self.frequency_penalty,
        )
    }

    /// Parameter summary in the form shown after a single generation.
    pub fn summary(&self) -> String {
        format!("Model: {}, {}", self.model, self.combination())
    }
}
