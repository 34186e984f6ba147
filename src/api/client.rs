use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{ConversationReply, ConversationRequest};

/// Errors from one request/response exchange.
/// The page treats every variant the same way; the split exists for the log.
#[derive(Debug)]
pub enum ClientError {
    /// Could not reach the endpoint or read its body.
    Network(String),
    /// Endpoint answered with a non-success status.
    Api { status: u16, message: String },
    /// Body did not have the `{ kwargs: { content } }` shape.
    Parse(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "network error: {msg}"),
            ClientError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ClientError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

#[async_trait]
pub trait ConversationClient: Send + Sync {
    /// Short label for logs and the heading.
    fn name(&self) -> &str;

    /// Sends the full message history and returns the bot's reply text.
    async fn send(&self, messages: &[String]) -> Result<String, ClientError>;
}

/// reqwest-backed client for the conversations endpoint.
///
/// No timeout, no retry: a request runs until the server answers or the
/// connection drops.
pub struct HttpConversationClient {
    url: String,
    client: reqwest::Client,
}

impl HttpConversationClient {
    pub fn new(base_url: &str, endpoint: &str) -> Self {
        Self {
            url: join_url(base_url, endpoint),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Joins base URL and endpoint path with exactly one slash between them.
fn join_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[async_trait]
impl ConversationClient for HttpConversationClient {
    fn name(&self) -> &str {
        &self.url
    }

    async fn send(&self, messages: &[String]) -> Result<String, ClientError> {
        let request = ConversationRequest {
            messages: messages.to_vec(),
        };

        info!(
            "POST {} (message_count={})",
            self.url,
            request.messages.len()
        );

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Conversation endpoint status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Conversation endpoint error: {} - {}", status, message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        debug!("Conversation endpoint body: {} bytes", body.len());

        let reply: ConversationReply =
            serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))?;

        Ok(reply.into_content())
    }
}
