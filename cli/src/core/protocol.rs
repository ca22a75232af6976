//! # DAVID AI Chat Wire Protocol
//!
//! File: cli/src/core/protocol.rs
//!
//! ## Overview
//!
//! JSON bodies exchanged on `POST /api/chat`. The server (`commands::serve::api`)
//! and the remote chat backend (`commands::chat::backend`) both use these types,
//! so the two sides cannot drift apart.
//!
//! ```text
//! -> {"message": "kapan booster?", "history": [...]}
//! <- {"response": "**COVID-19 Vaccination Information:** ...", "timestamp": "2024-05-01T10:00:00.000Z"}
//! <- {"error": "Invalid message format"}            (HTTP 400)
//! ```
//!
use crate::session::ChatMessage;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Request body sent by clients. `history` is accepted and ignored by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Builds an outgoing request from a message and the transcript so far.
    pub fn new(message: &str, history: &[ChatMessage]) -> Self {
        Self {
            message: message.to_string(),
            history: history.to_vec(),
        }
    }
}

/// Pulls the message text out of a raw request body.
///
/// Returns `None` unless the body is an object whose `message` is a non-empty
/// string. Missing, `null`, numeric and empty messages are all equally invalid.
pub fn extract_message(body: &serde_json::Value) -> Option<&str> {
    body.as_object()?
        .get("message")?
        .as_str()
        .filter(|message| !message.is_empty())
}

/// Successful reply body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub timestamp: String,
}

impl ChatResponse {
    pub fn new(response: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            response: response.into(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Error reply body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_extract_message_rejects_non_strings_and_empty() {
        assert_eq!(extract_message(&json!({"history": []})), None);
        assert_eq!(extract_message(&json!({"message": 42})), None);
        assert_eq!(extract_message(&json!({"message": null})), None);
        assert_eq!(extract_message(&json!({"message": ""})), None);
        assert_eq!(extract_message(&json!(["message"])), None);
        assert_eq!(extract_message(&json!({"message": "  "})), Some("  "));
        assert_eq!(
            extract_message(&json!({"message": "gejala", "history": [{"x": 1}]})),
            Some("gejala")
        );
    }

    #[test]
    fn test_request_history_defaults_to_empty() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": "halo"}"#).unwrap();
        assert_eq!(request.message, "halo");
        assert!(request.history.is_empty());
    }

    #[test]
    fn test_response_timestamp_is_iso_millis() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let reply = ChatResponse::new("hi", at);
        assert_eq!(reply.timestamp, "2024-05-01T10:00:00.000Z");
    }
}
