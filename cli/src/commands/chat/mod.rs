//! # DAVID AI Terminal Chat
//!
//! File: cli/src/commands/chat/mod.rs
//!
//! ## Overview
//!
//! `david chat` is a line-based conversation with the responder. Every
//! exchange is persisted to the session store, so a session can be resumed
//! later with `--session <ID>` and inspected with `david session show`.
//!
//! ## Architecture
//!
//! For each non-blank line:
//! 1. The line is appended to the transcript as a user message right away.
//! 2. The backend (`backend.rs`) is asked for a reply.
//! 3. On success the reply is appended and the session is saved.
//! 4. On failure the user message is taken back out, an apology is printed and
//!    nothing is written. The user can simply send the line again.
//!
//! Commands typed at the prompt:
//! - `/temp`: run the simulated temperature check and add its result
//! - `/quit`, `/exit` or `bye`: leave the chat (end of input works too)
//!
//! ## Examples
//!
//! ```bash
//! # New session, answered in-process
//! david chat
//!
//! # Resume a session, answered by a running `david serve`
//! david chat --session 6f1c... --endpoint http://127.0.0.1:3000/api/chat
//! ```
//!
use crate::commands::store::StoreArgs;
use crate::core::config::load_config;
use crate::core::error::Result;
use crate::session::{ChatMessage, ChatSession, SessionStore};
use crate::thermo;
use clap::Args;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

pub use self::backend::Backend;

/// In-process and HTTP chat backends.
pub mod backend;

/// Printed instead of a reply when the backend fails.
const FAILURE_NOTICE: &str = "Sorry, I couldn't process your message. Please try again.";

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Resume an existing session instead of starting a new one.
    #[arg(long, short, value_name = "ID")]
    pub session: Option<String>,

    /// URL of a running `david serve` chat endpoint. Uses the built-in responder when unset.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// What a line typed at the prompt asks for.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Blank,
    Quit,
    Temperature,
    Message(&'a str),
}

impl<'a> Input<'a> {
    /// Commands are matched on the trimmed line; messages keep their text
    /// as typed, minus the line ending.
    fn parse(line: &'a str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "" => Input::Blank,
            "/quit" | "/exit" | "bye" => Input::Quit,
            "/temp" => Input::Temperature,
            _ => Input::Message(line.trim_end_matches(['\n', '\r'])),
        }
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Opens the store, resumes or creates the session and runs the prompt loop
/// on stdin/stdout.
pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);

    let config = load_config()?;
    let store = args.store.open(&config)?;
    let backend = Backend::from_settings(args.endpoint.as_deref(), &config)?;

    let mut session = match &args.session {
        Some(id) => store.load(id)?,
        None => store.create_session(),
    };

    println!("🩺 DAVID AI - COVID-19 Information Assistant");
    println!("Session: {} ({})", session.title, session.id);
    println!("Answers from: {}", backend);
    println!("Type /temp for a temperature check, /quit to leave.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(stdin.lock(), &mut stdout, &store, &backend, &mut session).await?;

    if session.is_empty() {
        println!("Nothing was said, so nothing was saved.");
    } else {
        println!("Session saved: {}", session.id);
    }
    Ok(())
}

/// # Prompt Loop (`run_loop`)
///
/// Reads lines from `input` until a quit command or end of input, writing the
/// prompt and replies to `output`. The session is saved after every exchange
/// that changed it.
pub async fn run_loop<R, W>(
    mut input: R,
    output: &mut W,
    store: &SessionStore,
    backend: &Backend,
    session: &mut ChatSession,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "you> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match Input::parse(&line) {
            Input::Blank => continue,
            Input::Quit => break,
            Input::Temperature => {
                let text = thermo::measure().to_message();
                let note = ChatMessage::user(text.as_str());
                let note_id = note.id.clone();
                session.append(note);
                match store.save(session) {
                    Ok(()) => writeln!(output, "{}\n", text)?,
                    Err(e) => {
                        warn!("Failed to save temperature check: {:#}", e);
                        session.rollback(&note_id);
                        writeln!(output, "{}\n", FAILURE_NOTICE)?;
                    }
                }
            }
            Input::Message(text) => {
                if let Some(reply) = exchange(store, backend, session, text).await? {
                    writeln!(output, "david> {}\n", reply)?;
                } else {
                    writeln!(output, "david> {}\n", FAILURE_NOTICE)?;
                }
            }
        }
    }
    Ok(())
}

/// Sends `text` and records the exchange.
///
/// Returns `Ok(None)` when the backend or the store failed; the optimistic
/// user message (and any reply) has then been rolled back.
async fn exchange(
    store: &SessionStore,
    backend: &Backend,
    session: &mut ChatSession,
    text: &str,
) -> Result<Option<String>> {
    let history = session.messages.clone();
    let user_message = ChatMessage::user(text);
    let user_message_id = user_message.id.clone();
    session.push(user_message);

    let reply = match backend.send(text, &history).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Chat backend failed: {:#}", e);
            session.rollback(&user_message_id);
            return Ok(None);
        }
    };

    let assistant_message = ChatMessage::assistant(reply.as_str());
    let assistant_message_id = assistant_message.id.clone();
    session.push(assistant_message);
    if let Err(e) = store.save(session) {
        warn!("Failed to save session {}: {:#}", session.id, e);
        session.rollback(&assistant_message_id);
        session.rollback(&user_message_id);
        return Ok(None);
    }
    Ok(Some(reply))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::knowledge;
    use crate::session::Role;
    use std::io::Cursor;
    use tempfile::TempDir;

    async fn run(script: &str, backend: &Backend) -> (SessionStore, ChatSession, String, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::open(temp_dir.path()).unwrap();
        let mut session = store.create_session();
        let mut output = Vec::new();
        run_loop(
            Cursor::new(script.to_string()),
            &mut output,
            &store,
            backend,
            &mut session,
        )
        .await
        .unwrap();
        (store, session, String::from_utf8(output).unwrap(), temp_dir)
    }

    #[test]
    fn test_input_parsing() {
        assert_eq!(Input::parse("   \n"), Input::Blank);
        assert_eq!(Input::parse("/quit\n"), Input::Quit);
        assert_eq!(Input::parse("Bye"), Input::Quit);
        assert_eq!(Input::parse("/exit"), Input::Quit);
        assert_eq!(Input::parse("/temp\r\n"), Input::Temperature);
        assert_eq!(
            Input::parse("  apa gejala covid? \r\n"),
            Input::Message("  apa gejala covid? ")
        );
        assert_eq!(Input::parse("bye bye corona"), Input::Message("bye bye corona"));
    }

    #[tokio::test]
    async fn test_exchange_is_saved_with_derived_title() {
        let (store, session, output, _dir) =
            run("apa gejala covid?\n\nkapan booster?\n/quit\nignored\n", &Backend::Local).await;

        assert_eq!(session.messages.len(), 4);
        assert_eq!(session.title, "apa gejala covid?");
        assert_eq!(session.messages[1].content, knowledge::SYMPTOMS);
        assert_eq!(session.messages[3].content, knowledge::VACCINATION);
        assert!(output.contains(knowledge::VACCINATION));

        let stored = store.load(&session.id).unwrap();
        assert_eq!(stored.messages.len(), 4);
        assert_eq!(store.list().unwrap()[0].title, "apa gejala covid?");
    }

    #[tokio::test]
    async fn test_failed_exchange_is_rolled_back() {
        // Nothing listens on port 9, so every request fails.
        let backend = Backend::remote("http://127.0.0.1:9/api/chat").unwrap();
        let (store, session, output, _dir) = run("gejala\n", &backend).await;

        assert!(session.is_empty());
        assert_eq!(session.title, crate::session::model::DEFAULT_TITLE);
        assert!(output.contains(FAILURE_NOTICE));
        assert!(store.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_temperature_command_appends_user_message() {
        let (store, session, output, _dir) = run("/temp\n", &Backend::Local).await;

        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].role, Role::User);
        assert!(session.messages[0]
            .content
            .starts_with("Temperature Check Result:\nTemperature: "));
        assert!(output.contains("Guidance: "));
        assert_eq!(store.load(&session.id).unwrap().messages.len(), 1);
    }

    #[tokio::test]
    async fn test_temperature_check_does_not_name_session() {
        let (store, session, _output, _dir) = run("/temp\ngejala\n", &Backend::Local).await;

        assert_eq!(session.messages.len(), 3);
        assert_eq!(session.title, "gejala");
        assert_eq!(store.list().unwrap()[0].title, "gejala");
    }

    #[tokio::test]
    async fn test_failed_save_is_rolled_back_and_chat_continues() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::open(temp_dir.path()).unwrap();
        std::fs::create_dir(temp_dir.path().join("chat_history.json")).unwrap();
        let mut session = store.create_session();
        let mut output = Vec::new();

        run_loop(
            Cursor::new("gejala\nkapan booster?\n/temp\n".to_string()),
            &mut output,
            &store,
            &Backend::Local,
            &mut session,
        )
        .await
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches(FAILURE_NOTICE).count(), 3);
        assert!(session.is_empty());
        assert_eq!(session.title, crate::session::model::DEFAULT_TITLE);
        assert!(!temp_dir
            .path()
            .join(format!("chat_{}.json", session.id))
            .exists());
    }

    #[tokio::test]
    async fn test_end_of_input_without_messages_saves_nothing() {
        let (store, session, _output, _dir) = run("", &Backend::Local).await;
        assert!(session.is_empty());
        assert!(store.list().unwrap().is_empty());
    }
}
