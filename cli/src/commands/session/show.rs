//! # Show Session
//!
//! File: cli/src/commands/session/show.rs
//!
//! Prints one session's transcript, or the stored JSON with `--json`.
//!
use crate::commands::store::StoreArgs;
use crate::core::config::load_config;
use crate::core::error::Result;
use crate::session::{ChatSession, Role};
use chrono::Local;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Id of the session to print.
    id: String,

    /// Print the stored session as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    store: StoreArgs,
}

pub async fn handle_show(args: ShowArgs) -> Result<()> {
    info!("Handling session show command with args: {:?}", args);

    let config = load_config()?;
    let store = args.store.open(&config)?;
    let session = store.load(&args.id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        print!("{}", render_transcript(&session));
    }
    Ok(())
}

fn render_transcript(session: &ChatSession) -> String {
    let mut out = format!(
        "{}\nid: {}\ncreated: {}\n",
        session.title,
        session.id,
        session.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
    );
    if session.is_empty() {
        out.push_str("\n(no messages)\n");
    }
    for message in &session.messages {
        let speaker = match message.role {
            Role::User => "you",
            Role::Assistant => "david",
        };
        out.push_str(&format!(
            "\n[{}] {}:\n{}\n",
            message.timestamp.with_timezone(&Local).format("%H:%M"),
            speaker,
            message.content
        ));
    }
    out
}
