//! # DAVID AI Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the configuration shared by every
//! `david` command: where the HTTP service binds, where chat sessions are
//! stored, and which chat backend the terminal client talks to.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by each command when they differ from their defaults)
//! 2. Project-specific `.david.toml` in the current directory or an ancestor
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/david/config.toml`)
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [store]
//! directory = "~/.david/sessions"
//!
//! [chat]
//! endpoint = "http://127.0.0.1:8080/api/chat"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let store = SessionStore::open(&cfg.store.directory)?;
//! ```
//!
use crate::core::error::{DavidError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::IpAddr;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub chat: ChatSection,
}

/// Settings for `david serve`.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Interface to bind. Kept as a string so a bad value gets a readable error.
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
    /// Optional directory with a static web UI served next to the API (can use ~).
    #[serde(default)]
    pub ui_dir: Option<String>,
}

/// Where chat sessions are persisted.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    /// Session store directory (can use ~). Will be expanded.
    #[serde(default = "default_store_dir")]
    pub directory: String,
}

/// Settings for the terminal chat client.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ChatSection {
    /// `POST /api/chat` URL of a running `david serve`. In-process responder when unset.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            enable_cors: default_enable_cors(),
            ui_dir: None,
        }
    }
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            directory: default_store_dir(),
        }
    }
}

impl ServerSection {
    /// Parses the configured host into an IP address.
    pub fn host_ip(&self) -> Result<IpAddr> {
        self.host.parse().map_err(|e| {
            anyhow!(DavidError::Config(format!(
                "Invalid server host '{}': {}",
                self.host, e
            )))
        })
    }
}

pub fn default_server_host() -> String {
    "127.0.0.1".to_string()
}
pub fn default_server_port() -> u16 {
    3000
}
fn default_enable_cors() -> bool {
    true
}
pub fn default_store_dir() -> String {
    "~/.david/sessions".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".david.toml";

/// Loads the user and project configuration files, merges, expands and validates them.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("ai", "DAVID", "david") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.david.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.david.toml`, stopping at a git root.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.server.host = if project_cfg.server.host != default_server_host() {
        project_cfg.server.host
    } else {
        user.server.host
    };
    merged.server.port = if project_cfg.server.port != default_server_port() {
        project_cfg.server.port
    } else {
        user.server.port
    };
    // A project may only switch CORS off; otherwise the user's choice stands.
    merged.server.enable_cors = project_cfg.server.enable_cors && user.server.enable_cors;
    merged.server.ui_dir = project_cfg.server.ui_dir.or(user.server.ui_dir);
    merged.store.directory = if project_cfg.store.directory != default_store_dir() {
        project_cfg.store.directory
    } else {
        user.store.directory
    };
    merged.chat.endpoint = project_cfg.chat.endpoint.or(user.chat.endpoint);
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.store.directory = shellexpand::tilde(&config.store.directory).into_owned();
    debug!("Expanded store directory: {}", config.store.directory);
    if let Some(ui_dir) = config.server.ui_dir.as_mut() {
        *ui_dir = shellexpand::tilde(ui_dir).into_owned();
        debug!("Expanded UI directory: {}", ui_dir);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    config.server.host_ip()?;
    if config.store.directory.trim().is_empty() {
        return Err(anyhow!(DavidError::Config(
            "Store directory cannot be empty.".to_string()
        )));
    }
    let store_dir = PathBuf::from(&config.store.directory);
    if store_dir.exists() && !store_dir.is_dir() {
        return Err(anyhow!(DavidError::Config(format!(
            "Configured store path '{}' exists but is not a directory.",
            store_dir.display()
        ))));
    }
    if let Some(ui_dir) = &config.server.ui_dir {
        let ui_path = PathBuf::from(ui_dir);
        if !ui_path.exists() {
            warn!("Configured UI directory '{}' does not exist.", ui_path.display());
        } else if !ui_path.is_dir() {
            return Err(anyhow!(DavidError::Config(format!(
                "Configured UI path '{}' exists but is not a directory.",
                ui_path.display()
            ))));
        }
    }
    if let Some(endpoint) = &config.chat.endpoint {
        validate_endpoint(endpoint)?;
    }
    debug!("Configuration validation successful.");
    Ok(())
}

/// Checks that a chat endpoint is an absolute HTTP(S) URL.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow!(DavidError::Config(format!(
            "Invalid chat endpoint '{}'. Expected an http:// or https:// URL.",
            endpoint
        ))))
    }
}
