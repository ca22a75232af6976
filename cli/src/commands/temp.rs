//! # Temperature Check
//!
//! File: cli/src/commands/temp.rs
//!
//! ## Overview
//!
//! `david temp` takes a simulated temperature reading and prints the result.
//! With `--session <ID>` the result is also appended to that session as a user
//! message, the same way `/temp` does inside `david chat`. `--seed` makes the
//! reading reproducible.
//!
//! ```bash
//! david temp
//! david temp --session 6f1c... --seed 42
//! ```
//!
use crate::commands::store::StoreArgs;
use crate::core::config::load_config;
use crate::core::error::Result;
use crate::session::ChatMessage;
use crate::thermo::{self, TemperatureReading};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

#[derive(Args, Debug)]
pub struct TempArgs {
    /// Append the result to this session's transcript.
    #[arg(long, short, value_name = "ID")]
    pub session: Option<String>,

    /// Seed for the random reading.
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn handle_temp(args: TempArgs) -> Result<()> {
    info!("Handling temp command with args: {:?}", args);

    let reading = take_reading(args.seed);
    let text = reading.to_message();

    if let Some(id) = &args.session {
        let config = load_config()?;
        let store = args.store.open(&config)?;
        let mut session = store.load(id)?;
        session.append(ChatMessage::user(text.as_str()));
        store.save(&session)?;
        info!("Recorded temperature check in session {}", session.id);
    }

    println!("{}", text);
    Ok(())
}

fn take_reading(seed: Option<u64>) -> TemperatureReading {
    match seed {
        Some(seed) => thermo::simulate(&mut StdRng::seed_from_u64(seed)),
        None => thermo::measure(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_reading_is_stable() {
        assert_eq!(take_reading(Some(7)), take_reading(Some(7)));
    }
}
