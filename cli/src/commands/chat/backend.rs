//! # Chat Backends
//!
//! File: cli/src/commands/chat/backend.rs
//!
//! ## Overview
//!
//! Where a chat message goes to get answered:
//! - [`Backend::Local`]: the responder compiled into this binary. Never fails.
//! - [`Backend::Remote`]: a running `david serve`, reached with a JSON `POST`.
//!   A non-2xx status or a reply without a `response` is an error. There is no
//!   retry and no timeout.
//!
//! ```rust
//! let backend = Backend::from_settings(args.endpoint.as_deref(), &config)?;
//! let reply = backend.send("kapan booster?", &session.messages).await?;
//! ```
//!
use crate::core::config::{validate_endpoint, Config};
use crate::core::error::{DavidError, Result};
use crate::core::protocol::{ChatRequest, ErrorBody};
use crate::responder;
use crate::session::ChatMessage;
use anyhow::anyhow;
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum Backend {
    Local,
    Remote {
        client: reqwest::Client,
        endpoint: String,
    },
}

impl Backend {
    /// A backend that talks to `endpoint` (an `http(s)://.../api/chat` URL).
    pub fn remote(endpoint: &str) -> Result<Self> {
        validate_endpoint(endpoint)?;
        Ok(Backend::Remote {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        })
    }

    /// Picks the backend from an explicit endpoint, then `[chat] endpoint`,
    /// falling back to the in-process responder.
    pub fn from_settings(endpoint: Option<&str>, config: &Config) -> Result<Self> {
        match endpoint.or(config.chat.endpoint.as_deref()) {
            Some(url) => {
                info!("Using remote chat backend at {}", url);
                Backend::remote(url)
            }
            None => {
                debug!("Using in-process responder");
                Ok(Backend::Local)
            }
        }
    }

    /// Sends one message and returns the assistant's reply text.
    ///
    /// `history` is the transcript before `message`; the server accepts it but
    /// does not use it.
    pub async fn send(&self, message: &str, history: &[ChatMessage]) -> Result<String> {
        match self {
            Backend::Local => Ok(responder::classify(message).to_string()),
            Backend::Remote { client, endpoint } => {
                let request = ChatRequest::new(message, history);
                let response = client
                    .post(endpoint.as_str())
                    .json(&request)
                    .send()
                    .await
                    .map_err(DavidError::from)?;

                let status = response.status();
                if !status.is_success() {
                    let message = match response.json::<ErrorBody>().await {
                        Ok(body) => body.error,
                        Err(_) => status
                            .canonical_reason()
                            .unwrap_or("unknown error")
                            .to_string(),
                    };
                    return Err(anyhow!(DavidError::RemoteStatus {
                        status: status.as_u16(),
                        message,
                    }));
                }

                let body: serde_json::Value = response.json().await.map_err(DavidError::from)?;
                match body.get("response").and_then(|text| text.as_str()) {
                    Some(text) if !text.is_empty() => Ok(text.to_string()),
                    _ => Err(anyhow!(DavidError::EmptyReply)),
                }
            }
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Local => f.write_str("built-in responder"),
            Backend::Remote { endpoint, .. } => write!(f, "{}", endpoint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::serve::api;
    use crate::responder::knowledge;
    use axum::routing::post;
    use axum::{Json, Router};
    use tokio::net::TcpListener;

    /// Serves `app` on an ephemeral port and returns the chat URL.
    async fn spawn(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}{}", addr, api::CHAT_PATH)
    }

    fn downcast(err: &anyhow::Error) -> &DavidError {
        err.downcast_ref::<DavidError>().expect("expected a DavidError")
    }

    #[tokio::test]
    async fn test_local_backend_uses_responder() {
        let reply = Backend::Local.send("GEJALA", &[]).await.unwrap();
        assert_eq!(reply, knowledge::SYMPTOMS);
        let reply = Backend::Local.send("", &[]).await.unwrap();
        assert_eq!(reply, knowledge::GENERAL);
    }

    #[test]
    fn test_from_settings_prefers_explicit_endpoint() {
        let mut config = Config::default();
        assert!(matches!(
            Backend::from_settings(None, &config).unwrap(),
            Backend::Local
        ));

        config.chat.endpoint = Some("http://config.example/api/chat".into());
        let backend = Backend::from_settings(Some("http://cli.example/api/chat"), &config).unwrap();
        assert_eq!(backend.to_string(), "http://cli.example/api/chat");

        let backend = Backend::from_settings(None, &config).unwrap();
        assert_eq!(backend.to_string(), "http://config.example/api/chat");
    }

    #[test]
    fn test_remote_rejects_non_http_endpoint() {
        assert!(Backend::remote("localhost:3000/api/chat").is_err());
    }

    #[tokio::test]
    async fn test_remote_backend_round_trip() {
        let url = spawn(api::routes()).await;
        let backend = Backend::remote(&url).unwrap();
        let history = vec![ChatMessage::user("halo")];
        let reply = backend.send("kapan booster?", &history).await.unwrap();
        assert_eq!(reply, knowledge::VACCINATION);
    }

    #[tokio::test]
    async fn test_remote_error_status_carries_server_message() {
        let url = spawn(api::routes()).await;
        let backend = Backend::remote(&url).unwrap();
        let err = backend.send("", &[]).await.unwrap_err();
        match downcast(&err) {
            DavidError::RemoteStatus { status, message } => {
                assert_eq!(*status, 400);
                assert_eq!(message, "Invalid message format");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remote_reply_without_response_is_an_error() {
        let app = Router::new().route(
            api::CHAT_PATH,
            post(|| async { Json(serde_json::json!({"timestamp": "now"})) }),
        );
        let url = spawn(app).await;
        let err = Backend::remote(&url).unwrap().send("gejala", &[]).await.unwrap_err();
        assert!(matches!(downcast(&err), DavidError::EmptyReply));
    }

    #[tokio::test]
    async fn test_remote_unreachable_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}{}", addr, api::CHAT_PATH);
        let err = Backend::remote(&url).unwrap().send("gejala", &[]).await.unwrap_err();
        assert!(matches!(downcast(&err), DavidError::RemoteTransport { .. }));
    }
}
