use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::application::ports::{ChatSession, ChatSessionError};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Chat session against the Google Generative Language API.
///
/// The API itself is stateless, so the session keeps the conversation history
/// and replays it on every call. One instance is shared by every request the
/// process serves; concurrent calls are not serialized and may interleave in
/// the history.
pub struct GeminiChatSession {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    history: Mutex<Vec<Content>>,
}

impl GeminiChatSession {
    pub const DEFAULT_MODEL: &'static str = "gemma-3-27b-it";
    pub const DEFAULT_BASE_URL: &'static str =
        "https://generativelanguage.googleapis.com/v1beta/models";

    pub fn new(
        base_url: &str,
        api_key: &str,
        model: &str,
        request_timeout: Duration,
    ) -> Result<Self, ChatSessionError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ChatSessionError::RequestFailed(format!("client build: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            history: Mutex::new(Vec::new()),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Number of turns (user and model) retained so far.
    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }

    async fn generate(&self, contents: &[Content]) -> Result<String, ChatSessionError> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest { contents })
            .send()
            .await
            .map_err(|e| ChatSessionError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ChatSessionError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatSessionError::ApiError {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ChatSessionError::InvalidResponse(e.to_string()))?;

        reply_text(parsed)
    }
}

#[async_trait]
impl ChatSession for GeminiChatSession {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model))]
    async fn ask(&self, prompt: &str) -> Result<String, ChatSessionError> {
        let user_turn = Content::text("user", prompt);

        let mut contents = self.history.lock().await.clone();
        contents.push(user_turn.clone());

        let reply = self.generate(&contents).await.inspect_err(|e| {
            tracing::error!(error = %e, "Chat model request failed");
        })?;

        let mut history = self.history.lock().await;
        history.push(user_turn);
        history.push(Content::text("model", &reply));
        tracing::debug!(history_len = history.len(), "Chat session history updated");

        Ok(reply)
    }
}

#[derive(Debug, Clone, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn text(role: &str, text: &str) -> Self {
        Self {
            role: role.to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn reply_text(response: GenerateContentResponse) -> Result<String, ChatSessionError> {
    let parts = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .unwrap_or_default();

    let text: String = parts.into_iter().filter_map(|part| part.text).collect();

    if text.is_empty() {
        return Err(ChatSessionError::EmptyResponse);
    }

    Ok(text)
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let message = envelope.error.message.unwrap_or_else(|| body.to_string());
            match envelope.error.status {
                Some(status) if !status.is_empty() => format!("{status}: {message}"),
                _ => message,
            }
        }
        Err(_) => body.to_string(),
    }
}
