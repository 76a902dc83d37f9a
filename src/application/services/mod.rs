mod chat_service;
mod content_extractor;
mod prompt_composer;

pub use chat_service::{ChatService, ChatServiceError};
pub use content_extractor::ContentExtractor;
pub use prompt_composer::PromptComposer;
