mod chat_session;
mod file_loader;

pub use chat_session::{ChatSession, ChatSessionError};
pub use file_loader::{FileLoader, FileLoaderError};
