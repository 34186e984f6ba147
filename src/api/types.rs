use serde::{Deserialize, Serialize};

/// Request body: the full prior history plus the new prompt, as plain strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConversationRequest {
    pub messages: Vec<String>,
}

/// Response body. Only `kwargs.content` is read; anything else the backend
/// sends alongside it (message ids, type tags, metadata) is ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConversationReply {
    pub kwargs: ReplyKwargs,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReplyKwargs {
    pub content: String,
}

impl ConversationReply {
    pub fn into_content(self) -> String {
        self.kwargs.content
    }
}
