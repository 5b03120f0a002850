//! Configuration management for the FlowDB shell.
//!
//! Loads the server address, prompt and S3 profiles from a TOML file. The
//! file is read once at startup and never written back.

use crate::error::{FlowError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Server address used when nothing else is configured.
pub const DEFAULT_SERVER_ADDR: &str = "localhost:7777";

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// FlowDB server address (host:port).
    #[serde(default = "default_server_addr")]
    pub server_addr: String,

    /// REPL prompt.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Named S3 profiles.
    #[serde(default)]
    pub s3_profiles: Vec<S3Profile>,
}

fn default_server_addr() -> String {
    DEFAULT_SERVER_ADDR.to_string()
}

fn default_prompt() -> String {
    "flowdb> ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: default_server_addr(),
            prompt: default_prompt(),
            s3_profiles: Vec::new(),
        }
    }
}

/// A named set of S3 credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Profile {
    /// Profile name (compared case-insensitively).
    pub name: String,
    #[serde(default)]
    pub bucket: String,
    /// Endpoint URL.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub access_key: String,
    #[serde(default)]
    pub secret_key: String,
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("flowdb")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file; a missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| FlowError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            FlowError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
