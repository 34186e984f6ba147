//! # Conversation Endpoint
//!
//! The one outbound request this app makes:
//!
//! ```text
//! POST {base_url}/api/conversations
//!   { "messages": ["What is the value of Pi?"] }
//! → { "kwargs": { "content": "3.14159..." } }
//! ```

pub mod client;
pub mod types;

pub use client::{ClientError, ConversationClient, HttpConversationClient};
pub use types::{ConversationReply, ConversationRequest, ReplyKwargs};
