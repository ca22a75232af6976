//! # Chat Session Model
//!
//! File: cli/src/session/model.rs
//!
//! Messages, sessions and the summaries shown in `david session list`.
//! Messages are append-only: once pushed onto a transcript they are never
//! edited. The only removal is [`ChatSession::rollback`], used to undo an
//! optimistic user message whose reply never arrived.
//!
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Title given to a session before its first user message.
pub const DEFAULT_TITLE: &str = "New Chat";

/// Maximum number of characters kept from the first message when titling a session.
pub const TITLE_MAX_CHARS: usize = 30;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Assistant => f.write_str("assistant"),
        }
    }
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// A named conversation owning its transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Starts an empty session with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_string(),
            created_at: Utc::now(),
            messages: Vec::new(),
        }
    }

    /// Appends a message. The first typed user message also names the session.
    pub fn push(&mut self, message: ChatMessage) {
        if message.role == Role::User && !self.is_named() {
            self.title = derive_title(&message.content);
        }
        self.messages.push(message);
    }

    /// Appends a message without ever naming the session from it.
    ///
    /// Used for generated notes such as temperature check results.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Removes the message with `id` if it is the last one in the transcript.
    ///
    /// Returns the removed message. Earlier messages are never touched, and the
    /// title reverts to the default when the removed message was the one that
    /// named the session.
    pub fn rollback(&mut self, id: &str) -> Option<ChatMessage> {
        if self.messages.last().map(|m| m.id.as_str()) != Some(id) {
            return None;
        }
        let removed = self.messages.pop()?;
        if removed.role == Role::User
            && self.is_named()
            && self.title == derive_title(&removed.content)
            && !self.has_user_message_titled(&self.title)
        {
            self.title = DEFAULT_TITLE.to_string();
        }
        Some(removed)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn is_named(&self) -> bool {
        self.title != DEFAULT_TITLE
    }

    fn has_user_message_titled(&self, title: &str) -> bool {
        self.messages
            .iter()
            .any(|m| m.role == Role::User && derive_title(&m.content) == title)
    }

    /// The sidebar entry for this session, stamped with the current time.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            timestamp: Utc::now(),
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Index entry: which sessions exist and when each was last saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub title: String,
    pub timestamp: DateTime<Utc>,
}

/// Builds a session title from its first message.
///
/// Keeps at most [`TITLE_MAX_CHARS`] characters and appends `...` when the
/// message was longer. Counts characters, not bytes.
pub fn derive_title(first_message: &str) -> String {
    let mut chars = first_message.chars();
    let head: String = chars.by_ref().take(TITLE_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
