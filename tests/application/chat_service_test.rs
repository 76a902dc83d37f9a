use std::sync::Arc;

use lingochat::application::ports::ChatSessionError;
use lingochat::application::services::{
    ChatService, ChatServiceError, ContentExtractor, PromptComposer,
};
use lingochat::domain::{ChatTurn, Upload};
use lingochat::infrastructure::llm::MockChatSession;
use lingochat::infrastructure::text_processing::{PdfAdapter, PlainTextAdapter};

fn chat_service(session: Arc<MockChatSession>) -> ChatService<MockChatSession> {
    let extractor = ContentExtractor::new(Arc::new(PdfAdapter::default()), Arc::new(PlainTextAdapter));
    ChatService::new(extractor, PromptComposer::new(), session)
}

fn turn(message: Option<&str>, attachment: Option<Upload>) -> ChatTurn {
    ChatTurn::new(
        message.map(String::from),
        attachment,
        "Ana".to_string(),
        "Russian".to_string(),
    )
    .unwrap()
}

#[tokio::test]
async fn given_message_when_replying_then_returns_session_reply_verbatim() {
    let session = Arc::new(MockChatSession::replying("  Привет!  "));
    let service = chat_service(Arc::clone(&session));

    let reply = service.reply(&turn(Some("Hello"), None)).await.unwrap();

    assert_eq!(reply, "  Привет!  ");
    assert_eq!(session.prompts().len(), 1);
}

#[tokio::test]
async fn given_corrupt_pdf_attachment_when_replying_then_diagnostic_reaches_prompt() {
    let session = Arc::new(MockChatSession::replying("ok"));
    let service = chat_service(Arc::clone(&session));
    let upload = Upload::new(
        "broken.pdf".to_string(),
        "application/pdf".to_string(),
        b"not a pdf at all".to_vec(),
    );

    let reply = service.reply(&turn(Some("What is this?"), Some(upload))).await;

    assert!(reply.is_ok());
    let prompt = &session.prompts()[0];
    assert!(prompt.contains("What is this?\n\n--- Attached File Content (broken.pdf) ---\n"));
    assert!(prompt.contains("Error extracting PDF text:"));
}

#[tokio::test]
async fn given_unavailable_session_when_replying_then_error_propagates() {
    let session = Arc::new(MockChatSession::unavailable());
    let service = chat_service(Arc::clone(&session));

    let result = service.reply(&turn(Some("Hello"), None)).await;

    assert!(matches!(
        result,
        Err(ChatServiceError::Delegate(ChatSessionError::RequestFailed(_)))
    ));
}

#[tokio::test]
async fn given_consecutive_turns_when_replying_then_same_session_receives_both() {
    let session = Arc::new(MockChatSession::replying("ok"));
    let service = chat_service(Arc::clone(&session));

    service.reply(&turn(Some("first"), None)).await.unwrap();
    service.reply(&turn(Some("second"), None)).await.unwrap();

    let prompts = session.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].ends_with("\nfirst"));
    assert!(prompts[1].ends_with("\nsecond"));
}
