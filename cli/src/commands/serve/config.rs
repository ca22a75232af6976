//! # DAVID AI HTTP Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//!
//! ## Overview
//!
//! Builds the effective `ServerConfig` for `david serve` from:
//! 1. Command-line arguments (highest priority, when they differ from their defaults)
//! 2. The `[server]` section of the loaded configuration (`.david.toml` / user config)
//! 3. Default values (lowest priority)
//!
//! The optional UI directory is resolved to an absolute, canonical path and
//! must exist.
//!
//! ```bash
//! david serve --port 8080 --host 0.0.0.0 --ui-dir ./public
//! ```
//!
use crate::core::config::{default_server_port, Config};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::net::IpAddr;
use std::{env, path::PathBuf};
use tracing::debug;

/// # Serve Command Arguments (`ServeArgs`)
///
/// Command-line arguments accepted by `david serve`.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Network port to listen on. The next free port is used if it is taken.
    #[arg(long, short, default_value_t = default_server_port())]
    pub port: u16,

    /// IP address to bind. Use `0.0.0.0` to accept connections from other machines.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Do not send CORS headers (CORS is permissive by default).
    #[arg(long)]
    pub no_cors: bool,

    /// Directory with a static web UI to serve alongside `/api/chat`.
    #[arg(long)]
    pub ui_dir: Option<PathBuf>,
}

/// # Effective Server Configuration (`ServerConfig`)
///
/// Consolidated settings after merging arguments, configuration files and defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    pub enable_cors: bool,
    /// Canonical path of the static UI directory, if one is served.
    pub ui_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            host: IpAddr::from([127, 0, 0, 1]),
            enable_cors: true,
            ui_dir: None,
        }
    }
}

/// # Load and Merge Server Configuration (`load_and_merge_config`)
///
/// Starts from the `[server]` section of `file_config`, then applies every
/// argument the user set explicitly. `--no-cors` always wins when present.
/// Finally resolves and validates the UI directory.
///
/// ## Errors
///
/// Returns an error if the configured host is not an IP address, or if the UI
/// directory does not exist or is not a directory.
pub async fn load_and_merge_config(args: ServeArgs, file_config: &Config) -> Result<ServerConfig> {
    let server = &file_config.server;
    let cli_defaults = ServeArgs::parse_from([""]);

    let mut effective = ServerConfig {
        port: server.port,
        host: server.host_ip()?,
        enable_cors: server.enable_cors,
        ui_dir: server.ui_dir.as_ref().map(PathBuf::from),
    };

    if args.port != cli_defaults.port {
        effective.port = args.port;
    }
    if args.host != cli_defaults.host {
        effective.host = args.host;
    }
    if args.no_cors {
        effective.enable_cors = false;
    }
    if let Some(ui_dir) = args.ui_dir {
        effective.ui_dir = Some(ui_dir);
    }

    effective.resolve_ui_dir().await?;
    Ok(effective)
}

impl ServerConfig {
    /// # Resolve and Validate UI Directory (`resolve_ui_dir`)
    ///
    /// Makes `ui_dir` absolute (relative to the current directory), canonicalizes
    /// it and checks that it is a directory. No-op when no UI is configured.
    async fn resolve_ui_dir(&mut self) -> Result<()> {
        let Some(dir_path) = self.ui_dir.take() else {
            return Ok(());
        };

        let absolute_path = if dir_path.is_absolute() {
            dir_path
        } else {
            env::current_dir()
                .context("Failed to get current working directory")?
                .join(dir_path)
        };

        let canonical_path = tokio::fs::canonicalize(&absolute_path)
            .await
            .with_context(|| {
                format!(
                    "UI directory '{}' could not be found or accessed",
                    absolute_path.display()
                )
            })?;
        let metadata = tokio::fs::metadata(&canonical_path)
            .await
            .with_context(|| format!("Failed to get metadata for '{}'", canonical_path.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!("UI path is not a directory: {}", canonical_path.display());
        }

        debug!("Resolved UI directory to: {}", canonical_path.display());
        self.ui_dir = Some(canonical_path);
        Ok(())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ServerSection;
    use std::fs;
    use tempfile::TempDir;

    fn args(port: u16, host: &str, no_cors: bool, ui_dir: Option<PathBuf>) -> ServeArgs {
        ServeArgs {
            port,
            host: host.parse().unwrap(),
            no_cors,
            ui_dir,
        }
    }

    #[test]
    fn test_cli_defaults_match_config_defaults() {
        let defaults = ServeArgs::parse_from([""]);
        let config = ServerConfig::default();
        assert_eq!(defaults.port, config.port);
        assert_eq!(defaults.host, config.host);
        assert!(!defaults.no_cors);
        assert!(defaults.ui_dir.is_none());
    }

    #[tokio::test]
    async fn test_file_values_used_when_args_are_default() -> Result<()> {
        let file_config = Config {
            server: ServerSection {
                host: "0.0.0.0".into(),
                port: 9090,
                enable_cors: false,
                ui_dir: None,
            },
            ..Default::default()
        };

        let config =
            load_and_merge_config(args(3000, "127.0.0.1", false, None), &file_config).await?;

        assert_eq!(config.port, 9090);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert!(!config.enable_cors);
        assert!(config.ui_dir.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_explicit_args_override_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_config = Config {
            server: ServerSection {
                host: "0.0.0.0".into(),
                port: 9090,
                ..Default::default()
            },
            ..Default::default()
        };

        let config = load_and_merge_config(
            args(8081, "10.0.0.1", true, Some(temp_dir.path().to_path_buf())),
            &file_config,
        )
        .await?;

        assert_eq!(config.port, 8081);
        assert_eq!(config.host.to_string(), "10.0.0.1");
        assert!(!config.enable_cors);
        assert_eq!(config.ui_dir, Some(fs::canonicalize(temp_dir.path())?));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_ui_dir_is_an_error() {
        let result = load_and_merge_config(
            args(3000, "127.0.0.1", false, Some("/path/that/does/not/exist".into())),
            &Config::default(),
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_ui_dir_must_be_a_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("index.html");
        fs::write(&file_path, "<html></html>")?;

        let result =
            load_and_merge_config(args(3000, "127.0.0.1", false, Some(file_path)), &Config::default())
                .await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a directory"));
        Ok(())
    }
}
