use std::time::Duration;

use lingochat::application::ports::{ChatSession, ChatSessionError};
use lingochat::infrastructure::llm::GeminiChatSession;
use mockito::Matcher;

const MODEL: &str = "gemma-3-27b-it";
const API_KEY: &str = "test-key";
const ENDPOINT: &str = "/gemma-3-27b-it:generateContent";

fn session(server: &mockito::Server) -> GeminiChatSession {
    GeminiChatSession::new(&server.url(), API_KEY, MODEL, Duration::from_secs(5)).unwrap()
}

fn reply_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [
            { "content": { "role": "model", "parts": [{ "text": text }] } }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn given_successful_response_when_asking_then_returns_reply_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("x-goog-api-key", API_KEY)
        .match_body(Matcher::Regex(r#""text":"Hello""#.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply_body("Hi Ana"))
        .create_async()
        .await;

    let reply = session(&server).ask("Hello").await.unwrap();

    assert_eq!(reply, "Hi Ana");
    mock.assert_async().await;
}

#[tokio::test]
async fn given_multi_part_candidate_when_asking_then_parts_are_concatenated() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body(
            serde_json::json!({
                "candidates": [
                    { "content": { "parts": [{ "text": "Hello, " }, { "text": "world" }] } }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let reply = session(&server).ask("Hi").await.unwrap();

    assert_eq!(reply, "Hello, world");
}

#[tokio::test]
async fn given_previous_exchange_when_asking_again_then_history_is_replayed() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("POST", ENDPOINT)
        .match_body(r#"{"contents":[{"role":"user","parts":[{"text":"first"}]}]}"#)
        .with_status(200)
        .with_body(reply_body("reply one"))
        .create_async()
        .await;
    let second = server
        .mock("POST", ENDPOINT)
        .match_body(concat!(
            r#"{"contents":["#,
            r#"{"role":"user","parts":[{"text":"first"}]},"#,
            r#"{"role":"model","parts":[{"text":"reply one"}]},"#,
            r#"{"role":"user","parts":[{"text":"second"}]}"#,
            r#"]}"#
        ))
        .with_status(200)
        .with_body(reply_body("reply two"))
        .create_async()
        .await;

    let session = session(&server);

    assert_eq!(session.ask("first").await.unwrap(), "reply one");
    assert_eq!(session.ask("second").await.unwrap(), "reply two");
    assert_eq!(session.history_len().await, 4);

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn given_too_many_requests_when_asking_then_returns_rate_limited() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(429)
        .create_async()
        .await;

    let result = session(&server).ask("Hello").await;

    assert!(matches!(result, Err(ChatSessionError::RateLimited)));
}

#[tokio::test]
async fn given_google_error_envelope_when_asking_then_message_is_extracted() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(400)
        .with_body(
            serde_json::json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid.",
                    "status": "INVALID_ARGUMENT"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let result = session(&server).ask("Hello").await;

    match result {
        Err(ChatSessionError::ApiError { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "INVALID_ARGUMENT: API key not valid.");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn given_server_error_when_asking_then_history_is_not_extended() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let session = session(&server);
    let result = session.ask("Hello").await;

    assert!(matches!(
        result,
        Err(ChatSessionError::ApiError { status: 500, ref message }) if message == "upstream exploded"
    ));
    assert_eq!(session.history_len().await, 0);
}

#[tokio::test]
async fn given_no_candidates_when_asking_then_returns_empty_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let result = session(&server).ask("Hello").await;

    assert!(matches!(result, Err(ChatSessionError::EmptyResponse)));
}

#[tokio::test]
async fn given_malformed_json_when_asking_then_returns_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let result = session(&server).ask("Hello").await;

    assert!(matches!(result, Err(ChatSessionError::InvalidResponse(_))));
}
