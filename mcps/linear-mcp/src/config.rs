//! Configuration loading for linear-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variables `LINEAR_API_KEY` and `LINEAR_API_URL`
//! 2. The file passed with `--config` (or `LINEAR_MCP_CONFIG`)
//! 3. ~/.binks/linear.toml
//! 4. Default values

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub linear: LinearConfig,
}

/// Linear API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearConfig {
    /// Personal API key; the server starts without one but every tool fails
    #[serde(default)]
    pub api_key: Option<String>,
    /// GraphQL endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_api_url() -> String {
    "https://api.linear.app/graphql".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            linear: LinearConfig::default(),
        }
    }
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Config {
    /// Load configuration, preferring an explicit path over the default one
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit.map(Path::to_path_buf).or_else(Self::default_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(&path)?
            }
            Some(path) if explicit.is_some() => {
                anyhow::bail!("config file not found: {}", path.display());
            }
            _ => {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
        };

        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Environment variables take precedence over the file
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("LINEAR_API_KEY").filter(|k| !k.is_empty()) {
            self.linear.api_key = Some(key);
        }
        if let Some(url) = lookup("LINEAR_API_URL").filter(|u| !u.is_empty()) {
            self.linear.api_url = url;
        }
    }

    /// ~/.binks/linear.toml
    fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".binks").join("linear.toml"))
    }
}
