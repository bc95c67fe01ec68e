use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a language-model backend. The dispatcher consumes
/// these by matching; they never escape as hard failures.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("empty response body")]
    EmptyResponse,
}

/// Boundary to a language-model backend.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Name of the backend.
    fn name(&self) -> &str;

    /// Model the backend talks to.
    fn model_name(&self) -> &str {
        "unknown"
    }

    /// Produce a reply for the given system prompt and user input. A single
    /// attempt; any timeout is the transport's own.
    async fn generate(&self, system_prompt: &str, user_input: &str)
        -> Result<String, BackendError>;
}
