use async_trait::async_trait;
use reqwest::Client;

use crate::config::constants::DEFAULT_OPENAI_BASE_URL;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{PlaygroundError, PlaygroundResult};
use crate::structs::ai::api_error::ApiError;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::ai::request_descriptor::RequestDescriptor;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::text_generator::TextGenerator;

#[derive(Clone)]
pub struct OpenAIProvider {
    api_key: String,
    base_url: String,
    client: Client,
}

impl OpenAIProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Reads the API key from the environment variable named in `ai`.
    /// Fails before any request is made when the key is missing.
    pub fn from_config(ai: &AiConfig) -> PlaygroundResult<Self> {
        let key_env = ai.api_key_env.as_str();
        let api_key = std::env::var(key_env).unwrap_or_default();

        if api_key.trim().is_empty() {
            return Err(PlaygroundError::config_error(
                "OpenAI API key is not set",
                Some(key_env),
                Some("Export the variable or add it to a .env file in the working directory"),
            ));
        }

        Ok(Self::new(api_key).with_base_url(ai.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn make_request(&self, url: String, request_body: &OpenAIRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }

    fn status_error(status: reqwest::StatusCode, body: &str) -> AiProviderError {
        let message = ApiError::describe(body);

        match status.as_u16() {
            401 => AiProviderError::AuthenticationError(message),
            429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", message)),
            _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, message)),
        }
    }

    fn extract_content(json: &serde_json::Value) -> Result<String, AiProviderError> {
        json.get("choices")
            .and_then(|choices| choices.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(|content| content.to_string())
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }
}

#[async_trait]
impl TextGenerator for OpenAIProvider {
    async fn generate(&self, request: &RequestDescriptor) -> Result<String, AiProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = OpenAIRequest::from(request);

        let response = self.make_request(url, &request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(Self::status_error(status, &error_text));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        Self::extract_content(&json)
    }
}
