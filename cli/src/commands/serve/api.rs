//! # DAVID AI Chat API
//!
//! File: cli/src/commands/serve/api.rs
//!
//! ## Overview
//!
//! The single JSON endpoint of the service:
//!
//! | Method | Path        | Success                                  | Failure |
//! |--------|-------------|------------------------------------------|---------|
//! | POST   | `/api/chat` | `200 {"response": ..., "timestamp": ...}` | `400 {"error": "Invalid message format"}`, `500 {"error": "Failed to process message"}` |
//!
//! A request is invalid when the body is not a JSON object, or when `message`
//! is missing, not a string, or empty. Classification itself cannot fail; a
//! 500 is only produced when the request body cannot be read.
//!
use crate::core::protocol::{self, ChatResponse, ErrorBody};
use crate::responder;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Path of the chat endpoint.
pub const CHAT_PATH: &str = "/api/chat";

/// Errors returned to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid message format")]
    InvalidMessage,

    #[error("Failed to process message")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self {
            ApiError::InvalidMessage => StatusCode::BAD_REQUEST,
            ApiError::Internal(detail) => {
                error!("Chat API error: {}", detail);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (code, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_)
            | JsonRejection::JsonDataError(_)
            | JsonRejection::MissingJsonContentType(_) => {
                warn!("Rejected chat request body: {}", rejection.body_text());
                ApiError::InvalidMessage
            }
            other => ApiError::Internal(other.body_text()),
        }
    }
}

/// Routes served under the API.
pub fn routes() -> Router {
    Router::new().route(CHAT_PATH, post(chat))
}

async fn chat(
    payload: std::result::Result<Json<serde_json::Value>, JsonRejection>,
) -> std::result::Result<Json<ChatResponse>, ApiError> {
    let Json(body) = payload?;
    let message = protocol::extract_message(&body).ok_or(ApiError::InvalidMessage)?;

    let reply = responder::respond(message);
    debug!(
        "Classified message ({} chars) as {}",
        message.chars().count(),
        reply.topic
    );
    Ok(Json(ChatResponse::new(reply.text, Utc::now())))
}
