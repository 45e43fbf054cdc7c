use thiserror::Error;

/// Failure reported by a text-generation collaborator for one request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiProviderError {
    #[error("API Error: {0}")]
    ApiError(String),

    #[error("Network Error: {0}")]
    NetworkError(String),

    #[error("Serialization Error: {0}")]
    SerializationError(String),

    #[error("Authentication Error: {0}")]
    AuthenticationError(String),

    /// The generator panicked instead of returning an error.
    #[error("Generator panicked: {0}")]
    Panicked(String),
}
