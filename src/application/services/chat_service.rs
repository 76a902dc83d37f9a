use std::sync::Arc;

use crate::application::ports::{ChatSession, ChatSessionError};
use crate::domain::ChatTurn;

use super::content_extractor::ContentExtractor;
use super::prompt_composer::PromptComposer;

pub struct ChatService<S>
where
    S: ChatSession + ?Sized,
{
    extractor: ContentExtractor,
    composer: PromptComposer,
    session: Arc<S>,
}

impl<S> ChatService<S>
where
    S: ChatSession + ?Sized,
{
    pub fn new(extractor: ContentExtractor, composer: PromptComposer, session: Arc<S>) -> Self {
        Self {
            extractor,
            composer,
            session,
        }
    }

    /// Runs extract, compose and delegate for one turn, in that order.
    #[tracing::instrument(
        skip(self, turn),
        fields(
            user_name = %turn.user_name,
            language = %turn.language,
            attachment = ?turn.attachment_filename(),
        )
    )]
    pub async fn reply(&self, turn: &ChatTurn) -> Result<String, ChatServiceError> {
        let attachment_text = match &turn.attachment {
            Some(upload) => self.extractor.extract(upload).await,
            None => String::new(),
        };

        let prompt = self.composer.compose(turn, &attachment_text);
        tracing::debug!(prompt_chars = prompt.as_str().chars().count(), "Prompt composed");

        let reply = self
            .session
            .ask(prompt.as_str())
            .await
            .map_err(ChatServiceError::Delegate)?;

        tracing::info!(reply_chars = reply.chars().count(), "Chat reply received");
        Ok(reply)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error("AI service error: {0}")]
    Delegate(#[from] ChatSessionError),
}
