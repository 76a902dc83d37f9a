use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{ChatSession, ChatSessionError};

/// In-memory session that records prompts and answers with a canned reply.
pub struct MockChatSession {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockChatSession {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A session whose every call fails as if the provider were unreachable.
    pub fn unavailable() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatSession for MockChatSession {
    async fn ask(&self, prompt: &str) -> Result<String, ChatSessionError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        self.reply
            .clone()
            .ok_or_else(|| ChatSessionError::RequestFailed("connection refused".to_string()))
    }
}
