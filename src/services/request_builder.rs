use crate::structs::ai::chat_message::ChatMessage;
use crate::structs::ai::request_descriptor::RequestDescriptor;
use crate::structs::generation_config::GenerationConfig;

/// Turns a [`GenerationConfig`] into a [`RequestDescriptor`]. Pure; performs
/// no validation.
pub struct RequestBuilder;

impl RequestBuilder {
    pub fn build(config: &GenerationConfig) -> RequestDescriptor {
        RequestDescriptor {
            model: config.model.clone(),
            messages: Self::build_messages(config),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            presence_penalty: config.presence_penalty,
            frequency_penalty: config.frequency_penalty,
            stop: config.stop_sequence.clone(),
        }
    }

    /// `"{user_prompt} Product: {product}"`, with neither side trimmed.
    pub fn user_content(user_prompt: &str, product: &str) -> String {
        format!("{} Product: {}", user_prompt, product)
    }

    fn build_messages(config: &GenerationConfig) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(2);

        if !config.system_prompt.is_empty() {
            messages.push(ChatMessage::system(config.system_prompt.clone()));
        }

        messages.push(ChatMessage::user(Self::user_content(&config.user_prompt, &config.product)));

        messages
    }
}
