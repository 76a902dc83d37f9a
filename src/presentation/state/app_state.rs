use std::sync::Arc;

use crate::application::ports::ChatSession;
use crate::application::services::ChatService;

pub struct AppState<S>
where
    S: ChatSession + ?Sized,
{
    pub chat_service: Arc<ChatService<S>>,
    pub max_upload_bytes: usize,
}

impl<S> Clone for AppState<S>
where
    S: ChatSession + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
