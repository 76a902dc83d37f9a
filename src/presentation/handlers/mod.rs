mod chat_message;
mod error;
mod health;
mod login;

pub use chat_message::{ChatMessageForm, ChatMessageResponse, chat_message_handler};
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use login::{LoginForm, login_handler, root_handler};
