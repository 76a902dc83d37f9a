use std::fmt;

use super::upload::Upload;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub message: String,
    pub attachment: Option<Upload>,
    pub user_name: String,
    pub language: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChatTurnError {
    #[error("Either a message or a file must be provided")]
    Empty,
}

impl ChatTurn {
    /// Builds a turn, rejecting it when there is neither a non-blank message
    /// nor an attachment.
    pub fn new(
        message: Option<String>,
        attachment: Option<Upload>,
        user_name: String,
        language: String,
    ) -> Result<Self, ChatTurnError> {
        let message = message.unwrap_or_default();

        if message.trim().is_empty() && attachment.is_none() {
            return Err(ChatTurnError::Empty);
        }

        Ok(Self {
            message,
            attachment,
            user_name,
            language,
        })
    }

    pub fn attachment_filename(&self) -> Option<&str> {
        self.attachment.as_ref().map(|u| u.filename.as_str())
    }
}

/// The final text handed to the chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt(String);

impl ComposedPrompt {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ComposedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
