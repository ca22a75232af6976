//! # One-shot Question
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! `david ask <MESSAGE>` answers a single message and prints the reply. No
//! session is created or stored. With `--json` the output is the same body
//! `POST /api/chat` returns.
//!
//! ```bash
//! david ask "apa gejala covid?"
//! david ask --json "kapan booster?"
//! david ask --endpoint http://127.0.0.1:3000/api/chat "cara pencegahan"
//! ```
//!
use crate::commands::chat::Backend;
use crate::core::config::load_config;
use crate::core::error::Result;
use crate::core::protocol::ChatResponse;
use crate::responder;
use chrono::Utc;
use clap::builder::NonEmptyStringValueParser;
use clap::Args;
use tracing::info;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The message to send. Must not be empty.
    #[arg(required = true, value_parser = NonEmptyStringValueParser::new())]
    pub message: String,

    /// Print the reply as `{"response": ..., "timestamp": ...}`.
    #[arg(long)]
    pub json: bool,

    /// URL of a running `david serve` chat endpoint. Uses the built-in responder when unset.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

pub async fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);

    let config = load_config()?;
    let backend = Backend::from_settings(args.endpoint.as_deref(), &config)?;
    if let Backend::Local = backend {
        info!("Message falls under the {} topic", responder::match_topic(&args.message));
    }
    let reply = backend.send(&args.message, &[]).await?;

    if args.json {
        let body = ChatResponse::new(reply, Utc::now());
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", reply);
    }
    Ok(())
}
