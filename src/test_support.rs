//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{ClientError, ConversationClient};

/// A client that never answers anything useful, for tests that don't need real requests.
pub struct NoopClient;

#[async_trait]
impl ConversationClient for NoopClient {
    fn name(&self) -> &str {
        "noop"
    }

    async fn send(&self, _messages: &[String]) -> Result<String, ClientError> {
        Ok(String::new())
    }
}

/// A client with a canned outcome that records every payload it receives.
pub struct ScriptedClient {
    outcome: Result<String, (u16, String)>,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedClient {
    pub fn replying(reply: &str) -> Self {
        Self {
            outcome: Ok(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            outcome: Err((status, message.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ConversationClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn send(&self, messages: &[String]) -> Result<String, ClientError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        match &self.outcome {
            Ok(reply) => Ok(reply.clone()),
            Err((status, message)) => Err(ClientError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// Creates a test App with a NoopClient.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopClient), "Test User".to_string())
}
