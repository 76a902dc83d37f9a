mod chat_turn;
mod file_kind;
mod language;
mod upload;

pub use chat_turn::{ChatTurn, ChatTurnError, ComposedPrompt};
pub use file_kind::{FileKind, extension_of};
pub use language::{Language, UnknownLanguage};
pub use upload::Upload;
