use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::channel::{Channel, ChannelId, ChannelKind, ChannelProfile, ChannelRegistry};
use crate::error::{NosyError, Result};

const CONFIG_DIR: &str = ".nosy-worker";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "NOSY_WORKER_CONFIG";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# nosy-worker configuration file
# Location: ~/.nosy-worker/config.toml

[log]
# Default log filter when NOSY_LOG is not set
# Example: level = "nosy_core=debug,info"
level = "warn"

[dashboard]
title = "NosyWorker Dashboard"

# Channels to seed the dashboard with. When no [[channels]] entries are
# present the four built-in demo channels are used.
#
# [[channels]]
# id = "1"
# name = "Customer Support"
# kind = "slack"            # or "outlook"
# enabled = true
# profile = { audience = "Customer Success Team", data_sources = ["Support Tickets"] }
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Seed channels (empty = built-in defaults)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<ChannelSeed>,
}

/// One `[[channels]]` entry
///
/// Kept apart from [`Channel`] so that saving the config writes back exactly
/// what the user declared and never session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSeed {
    pub id: ChannelId,
    pub name: String,
    pub kind: ChannelKind,
    /// Omitted means enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ChannelProfile>,
}

impl ChannelSeed {
    pub fn new(id: impl Into<ChannelId>, name: impl Into<String>, kind: ChannelKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            enabled: None,
            profile: None,
        }
    }
}

impl From<&ChannelSeed> for Channel {
    fn from(seed: &ChannelSeed) -> Self {
        let mut channel = Channel::new(seed.id.clone(), seed.name.clone(), seed.kind);
        channel.enabled = seed.enabled.unwrap_or(true);
        channel.profile = seed.profile.clone();
        channel
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Dashboard presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "NosyWorker Dashboard".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl Config {
    /// Load config from a file path; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| NosyError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to a file path
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Default config file path (`~/.nosy-worker/config.toml`)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(NosyError::HomeNotFound)?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Resolve the config path: explicit argument, then environment, then default
    pub fn path(explicit: Option<&Path>) -> Result<PathBuf> {
        Self::resolve_path(explicit, std::env::var(CONFIG_ENV).ok())
            .map_or_else(Self::default_path, Ok)
    }

    fn resolve_path(explicit: Option<&Path>, from_env: Option<String>) -> Option<PathBuf> {
        explicit.map(Path::to_path_buf).or_else(|| {
            from_env
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        })
    }

    /// Initialize config with default template (rich comments)
    pub fn init(path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !path.exists() {
            fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path.to_path_buf())
    }

    /// Build the session's channel registry
    pub fn seed_registry(&self) -> Result<ChannelRegistry> {
        if self.channels.is_empty() {
            return Ok(ChannelRegistry::with_defaults());
        }
        ChannelRegistry::from_channels(self.channels.iter().map(Channel::from).collect())
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "log.level" => Ok(self.log.level.clone()),
            "dashboard.title" => Ok(self.dashboard.title.clone()),
            "channels" => Ok(self.channels.len().to_string()),
            _ => Err(NosyError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "log.level" => {
                self.log.level = value.trim().to_string();
                Ok(())
            }
            "dashboard.title" => {
                self.dashboard.title = value.trim().to_string();
                Ok(())
            }
            _ => Err(NosyError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        vec![
            ("log.level".to_string(), self.log.level.clone()),
            ("dashboard.title".to_string(), self.dashboard.title.clone()),
            ("channels".to_string(), self.channels.len().to_string()),
        ]
    }
}
