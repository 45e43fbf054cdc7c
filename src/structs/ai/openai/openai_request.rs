use serde::Serialize;
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::request_descriptor::RequestDescriptor;

/// Body of a `/chat/completions` call. An absent stop sequence is left out
/// of the JSON entirely rather than sent as `null` or `""`.
#[derive(Serialize, Debug, Clone)]
pub struct OpenAIRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
}

impl From<&RequestDescriptor> for OpenAIRequest {
    fn from(request: &RequestDescriptor) -> Self {
        Self {
            model: request.model.clone(),
            messages: request.messages.iter().map(OpenAIMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            presence_penalty: request.presence_penalty,
            frequency_penalty: request.frequency_penalty,
            stop: request.stop.clone(),
        }
    }
}
