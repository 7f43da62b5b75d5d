//! Session state for one interactive chat
//!
//! This module holds the conversation turns and the opaque continuation
//! token the server hands back after each generation call. The session is
//! constructor-initialized and owned by the command handler that drives it;
//! there is no global state. State lives only for the process lifetime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Text typed by the user
    User,
    /// Text produced by the model (or an error rendered in its place)
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// One message in the conversation, immutable once created
///
/// Insertion order is display order; turns are only ever appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Author of the turn
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatTurn {
    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Opaque continuation state returned by the inference server
///
/// Represents accumulated model state; passed back verbatim on the next
/// generation request instead of replaying the conversation history. The
/// value is never inspected, only stored and echoed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextToken(serde_json::Value);

impl ContextToken {
    /// Wrap a raw server-issued value
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Borrow the raw value (for serialization into the next request)
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for ContextToken {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Conversation state for one interactive session
///
/// Mutated only by appending a user turn, appending an assistant turn
/// (optionally replacing the continuation token), or a full reset. The
/// token sent with request N is exactly the token returned by the last
/// successful exchange before N, or absent if there was none.
#[derive(Debug, Clone, Default)]
pub struct Session {
    turns: Vec<ChatTurn>,
    context: Option<ContextToken>,
}

impl Session {
    /// Create an empty session with no turns and no continuation token
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn::user(content));
    }

    /// Append an assistant turn, replacing the continuation token when the
    /// server returned a new one
    ///
    /// A `None` token leaves the previous token in place. Failed exchanges
    /// pass `None` so the next attempt retries from the last known-good
    /// state.
    pub fn push_assistant(&mut self, content: impl Into<String>, token: Option<ContextToken>) {
        self.turns.push(ChatTurn::assistant(content));
        if let Some(token) = token {
            self.context = Some(token);
        }
    }

    /// Clear all turns and drop the continuation token
    pub fn reset(&mut self) {
        self.turns.clear();
        self.context = None;
    }

    /// All turns in insertion order
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// The continuation token from the last successful exchange, if any
    pub fn context(&self) -> Option<&ContextToken> {
        self.context.as_ref()
    }

    /// Number of turns in the session
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when no turns have been recorded
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
