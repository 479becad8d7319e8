use serde_json::Value;
use uuid::Uuid;

use crate::api::{ApiError, ChatHistoryEntry, ChatReply};

pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";
pub const LEAVE_REQUEST_INTENT: &str = "leave_request";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Render key only; never sent to the server.
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub intent: Option<String>,
    pub data: Option<Value>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::User,
            content: content.into(),
            intent: None,
            data: None,
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        intent: Option<String>,
        data: Option<Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::Assistant,
            content: content.into(),
            intent,
            data,
        }
    }

    pub fn fallback() -> Self {
        Self::assistant(FALLBACK_REPLY, None, None)
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }

    /// True for an assistant reply that created a leave request.
    pub fn confirms_leave_request(&self) -> bool {
        self.intent.as_deref() == Some(LEAVE_REQUEST_INTENT)
            && self.data.as_ref().is_some_and(|data| !data.is_null())
    }
}

/// Expands server history into alternating user/assistant messages, keeping
/// the server order.
pub fn expand_history(entries: Vec<ChatHistoryEntry>) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(entries.len() * 2);
    for entry in entries {
        messages.push(ChatMessage::user(entry.message));
        messages.push(ChatMessage::assistant(entry.response, entry.intent, None));
    }
    messages
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    pub messages: Vec<ChatMessage>,
    pub busy: bool,
}

impl Transcript {
    /// Appends the user's message and marks the transcript busy. Blank input
    /// is ignored and yields `None`.
    pub fn begin_send(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        self.busy = true;
        Some(text.to_string())
    }

    /// Appends the assistant's answer, or the fallback text on failure, and
    /// clears the busy flag. Returns the session id the server assigned, if any.
    pub fn finish_send(&mut self, result: Result<ChatReply, ApiError>) -> Option<String> {
        self.busy = false;
        match result {
            Ok(reply) => {
                let session_id = reply.session_id.filter(|id| !id.trim().is_empty());
                self.messages
                    .push(ChatMessage::assistant(reply.response, reply.intent, reply.data));
                session_id
            }
            Err(err) => {
                log::error!("chat message failed: {}", err);
                self.messages.push(ChatMessage::fallback());
                None
            }
        }
    }

    pub fn replace_with_history(&mut self, entries: Vec<ChatHistoryEntry>) {
        self.messages = expand_history(entries);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
