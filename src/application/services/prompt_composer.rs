use crate::domain::{ChatTurn, ComposedPrompt};

/// Builds the prompt sent to the chat session from a turn and the text
/// extracted from its attachment.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptComposer;

impl PromptComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_instruction(&self, user_name: &str, language: &str) -> String {
        format!(
            "You are a helpful assistant. Answer {user_name}'s questions in a friendly and \
             informative manner specifically in {language} language. If you don't know the \
             answer, say 'I don't know'."
        )
    }

    /// Appends the attachment text under a header naming the file. A message
    /// without attachment text is returned unchanged.
    pub fn combine_message(&self, message: &str, filename: &str, attachment_text: &str) -> String {
        if attachment_text.is_empty() {
            return message.to_string();
        }

        format!("{message}\n\n--- Attached File Content ({filename}) ---\n{attachment_text}")
            .trim()
            .to_string()
    }

    pub fn compose(&self, turn: &ChatTurn, attachment_text: &str) -> ComposedPrompt {
        let instruction = self.render_instruction(&turn.user_name, &turn.language);
        let combined = self.combine_message(
            &turn.message,
            turn.attachment_filename().unwrap_or_default(),
            attachment_text,
        );

        ComposedPrompt::new(format!("{instruction}\n{combined}"))
    }
}
