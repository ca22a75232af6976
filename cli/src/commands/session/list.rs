//! # List Sessions
//!
//! File: cli/src/commands/session/list.rs
//!
//! Prints the session index, newest first, as a table or as JSON.
//!
use crate::commands::store::StoreArgs;
use crate::core::config::load_config;
use crate::core::error::Result;
use crate::session::SessionSummary;
use chrono::Local;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Print the index as JSON instead of a table.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    store: StoreArgs,
}

pub async fn handle_list(args: ListArgs) -> Result<()> {
    info!("Handling session list command with args: {:?}", args);

    let config = load_config()?;
    let store = args.store.open(&config)?;
    let sessions = store.list()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
    } else if sessions.is_empty() {
        println!("No saved sessions in {}", store.root().display());
    } else {
        print!("{}", render_table(&sessions));
    }
    Ok(())
}

/// Formats summaries as aligned `ID  UPDATED  TITLE` rows.
fn render_table(sessions: &[SessionSummary]) -> String {
    let id_width = sessions
        .iter()
        .map(|s| s.id.len())
        .max()
        .unwrap_or(0)
        .max("ID".len());

    let mut out = format!("{:<id_width$}  {:<16}  {}\n", "ID", "UPDATED", "TITLE");
    for summary in sessions {
        let updated = summary
            .timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
        out.push_str(&format!(
            "{:<id_width$}  {:<16}  {}\n",
            summary.id, updated, summary.title
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_render_table_keeps_order_and_aligns_ids() {
        let sessions = vec![
            SessionSummary {
                id: "short".into(),
                title: "kapan booster?".into(),
                timestamp: Utc::now(),
            },
            SessionSummary {
                id: "a-much-longer-id".into(),
                title: "New Chat".into(),
                timestamp: Utc::now(),
            },
        ];
        let table = render_table(&sessions);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID                "));
        assert!(lines[1].starts_with("short             "));
        assert!(lines[1].ends_with("kapan booster?"));
        assert!(lines[2].starts_with("a-much-longer-id  "));
    }
}
