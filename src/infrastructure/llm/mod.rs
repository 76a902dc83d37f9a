mod gemini_chat_session;
mod mock_chat_session;

pub use gemini_chat_session::GeminiChatSession;
pub use mock_chat_session::MockChatSession;
