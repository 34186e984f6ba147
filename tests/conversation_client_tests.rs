use std::sync::Arc;

use converse::api::{ClientError, ConversationClient, HttpConversationClient};
use converse::core::action::{Action, Effect, update};
use converse::core::message::{Message, Sender};
use converse::core::state::App;
use converse::tui::exchange;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const PI_PROMPT: &str = "What is the value of Pi?";

fn reply_body(content: &str) -> serde_json::Value {
    json!({
        "lc": 1,
        "type": "constructor",
        "id": ["langchain_core", "messages", "AIMessage"],
        "kwargs": { "content": content, "additional_kwargs": {} }
    })
}

fn client_for(server: &MockServer) -> HttpConversationClient {
    HttpConversationClient::new(&server.uri(), "/api/conversations")
}

// ============================================================================
// HttpConversationClient
// ============================================================================

#[tokio::test]
async fn test_posts_history_and_returns_kwargs_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/conversations"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "messages": [PI_PROMPT] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("3.14159...")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reply = client.send(&[PI_PROMPT.to_string()]).await;

    assert_eq!(reply.unwrap(), "3.14159...");
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/conversations"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.send(&["hi".to_string()]).await;

    match result {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal error");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/conversations"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).send(&["hi".to_string()]).await;
    assert!(matches!(result, Err(ClientError::Api { status: 401, .. })));
}

#[tokio::test]
async fn test_malformed_body_maps_to_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/conversations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": "no kwargs" })))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).send(&["hi".to_string()]).await;
    assert!(matches!(result, Err(ClientError::Parse(_))));
}

#[tokio::test]
async fn test_non_json_body_maps_to_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/conversations"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).send(&["hi".to_string()]).await;
    assert!(matches!(result, Err(ClientError::Parse(_))));
}

#[tokio::test]
async fn test_unreachable_endpoint_maps_to_network_error() {
    // Port 9 (discard) on localhost is not serving HTTP
    let client = HttpConversationClient::new("http://127.0.0.1:9", "/api/conversations");
    let result = client.send(&["hi".to_string()]).await;
    assert!(matches!(result, Err(ClientError::Network(_))));
}

// ============================================================================
// Full page flow: reducer + exchange against a mock endpoint
// ============================================================================

/// Drive one submit through `update` and `exchange`, returning the effect
/// of the settling action.
async fn submit(app: &mut App, prompt: &str) -> Effect {
    let effect = update(app, Action::Submit(prompt.to_string()));
    let Effect::SpawnRequest { messages } = effect else {
        panic!("Expected SpawnRequest, got {:?}", effect);
    };
    let action = exchange(app.client.as_ref(), messages).await;
    update(app, action)
}

#[tokio::test]
async fn test_pi_example_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/conversations"))
        .and(body_json(json!({ "messages": [PI_PROMPT] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("3.14159...")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = App::new(Arc::new(client_for(&mock_server)), "You".to_string());
    let effect = submit(&mut app, PI_PROMPT).await;

    assert_eq!(effect, Effect::Refresh { reset_form: true });
    assert_eq!(
        app.conversation.messages(),
        &[Message::user(PI_PROMPT), Message::bot("3.14159...")]
    );
}

#[tokio::test]
async fn test_second_exchange_sends_full_history() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/conversations"))
        .and(body_json(json!({ "messages": [PI_PROMPT] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("3.14159...")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/conversations"))
        .and(body_json(json!({ "messages": [PI_PROMPT, "3.14159...", "And e?"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("2.71828...")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = App::new(Arc::new(client_for(&mock_server)), "You".to_string());
    submit(&mut app, PI_PROMPT).await;
    submit(&mut app, "And e?").await;

    let senders: Vec<Sender> = app.conversation.messages().iter().map(|m| m.sender).collect();
    assert_eq!(
        senders,
        vec![Sender::User, Sender::Bot, Sender::User, Sender::Bot]
    );
    assert_eq!(app.conversation.messages()[3].content, "2.71828...");
}

#[tokio::test]
async fn test_failed_exchange_leaves_conversation_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/conversations"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = App::new(Arc::new(client_for(&mock_server)), "You".to_string());
    let effect = submit(&mut app, PI_PROMPT).await;

    assert_eq!(effect, Effect::Refresh { reset_form: false });
    assert!(app.conversation.is_empty());
    assert!(!app.is_submitting);
}
