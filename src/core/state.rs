//! # Application State
//!
//! Core page state. Domain data only; presentation state (input buffer,
//! scroll offsets, spinner frames) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── client: Arc<dyn ConversationClient>  // conversation endpoint
//! ├── conversation: Conversation           // messages, insertion order
//! ├── is_submitting: bool                  // one request in flight
//! ├── pending_prompt: Option<String>       // prompt of the in-flight request
//! ├── status_message: String               // heading status text
//! ├── user_name: String                    // user avatar initials
//! └── refresh_count: u64                   // refreshes requested so far
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::ConversationClient;
use crate::core::config::ResolvedConfig;
use crate::core::message::Conversation;

pub const STATUS_READY: &str = "Ready";
pub const STATUS_GENERATING: &str = "Generating...";

pub struct App {
    pub client: Arc<dyn ConversationClient>,
    pub conversation: Conversation,
    pub is_submitting: bool,
    pub pending_prompt: Option<String>,
    pub status_message: String,
    pub user_name: String,
    pub refresh_count: u64,
}

impl App {
    pub fn new(client: Arc<dyn ConversationClient>, user_name: String) -> Self {
        Self {
            client,
            conversation: Conversation::new(),
            is_submitting: false,
            pending_prompt: None,
            status_message: String::from(STATUS_READY),
            user_name,
            refresh_count: 0,
        }
    }

    pub fn from_config(client: Arc<dyn ConversationClient>, config: &ResolvedConfig) -> Self {
        Self::new(client, config.user_name.clone())
    }

    /// True when the empty-state placeholder should be shown.
    pub fn shows_empty_state(&self) -> bool {
        self.conversation.is_empty() && !self.is_submitting
    }
}
