//! # DAVID AI Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the `david` binary. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`serve`, `ask`, ...) is a variant of `Commands`
//! - Handlers live in `commands/`, domain logic in `responder`, `session` and `thermo`
//! - All errors are propagated to this level for consistent reporting
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! david --help
//!
//! # Run the HTTP service with request logging
//! david -v serve
//!
//! # Ask a single question
//! david ask "apa gejala covid?"
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (serve, ask, chat, session, temp)
mod common; // Shared filesystem helpers
mod core; // Configuration, errors, wire protocol
mod responder; // Keyword buckets and canned responses
mod session; // Chat sessions and their on-disk store
mod thermo; // Simulated temperature check

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "david",
    about = "🩺 DAVID AI: COVID-19 Information Assistant",
    long_about = "Answers COVID-19 questions (symptoms, vaccination, testing, ...) from a\n\
                  fixed knowledge base, over HTTP or in the terminal.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Run the HTTP chat service.
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    /// Answer a single message and exit.
    Ask(commands::ask::AskArgs),
    /// Chat interactively; sessions are saved.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Manage saved chat sessions.
    Session(commands::session::SessionArgs),
    /// Take a simulated temperature reading.
    Temp(commands::temp::TempArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Serve(args) => commands::serve::handle_serve(args).await,
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Session(args) => commands::session::handle_session(args).await,
        Commands::Temp(args) => commands::temp::handle_temp(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_alias_and_global_verbosity() {
        let cli = Cli::try_parse_from(["david", "s", "-vv", "--port", "8080"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, 8080),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_ask_requires_message() {
        assert!(Cli::try_parse_from(["david", "ask"]).is_err());
    }

    #[test]
    fn test_ask_rejects_empty_message() {
        assert!(Cli::try_parse_from(["david", "ask", ""]).is_err());
        assert!(Cli::try_parse_from(["david", "ask", "  "]).is_ok());
    }
}
