use async_trait::async_trait;

/// Handle to a long-lived conversation with a hosted chat model.
#[async_trait]
pub trait ChatSession: Send + Sync {
    async fn ask(&self, prompt: &str) -> Result<String, ChatSessionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatSessionError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("api error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("model returned no text")]
    EmptyResponse,
}
