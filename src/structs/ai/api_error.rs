use serde::Deserialize;

/// Error body returned by OpenAI-compatible endpoints: `{"error": {...}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorEnvelope {
    pub error: ApiError,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    pub message: String,
}

impl ApiError {
    /// Best-effort extraction of a readable message from a raw error body.
    pub fn describe(body: &str) -> String {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => match envelope.error.error_type {
                Some(error_type) => format!("{}: {}", error_type, envelope.error.message),
                None => envelope.error.message,
            },
            Err(_) => body.to_string(),
        }
    }
}
