//! GearBot configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GearbotError, Result};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearbotConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub identity: Identity,
}

impl Default for GearbotConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            engine: EngineConfig::default(),
            gateway: GatewayConfig::default(),
            identity: Identity::default(),
        }
    }
}

impl GearbotConfig {
    /// Load config from the default path (~/.gearbot/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GearbotError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| GearbotError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| GearbotError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gearbot")
            .join("config.toml")
    }

    /// Get the GearBot home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gearbot")
    }
}

/// Source table locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_products_path")]
    pub products_path: String,
    #[serde(default = "default_videos_path")]
    pub videos_path: String,
}

fn default_products_path() -> String { "data/products.csv".into() }
fn default_videos_path() -> String { "data/videos.csv".into() }

impl Default for DataConfig {
    fn default() -> Self {
        Self { products_path: default_products_path(), videos_path: default_videos_path() }
    }
}

/// Matching/response engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Videos listed per matched product, at most.
    #[serde(default = "default_max_videos")]
    pub max_videos_per_product: usize,
    /// Channel name used in the no-video fallback notice.
    #[serde(default = "default_channel_name")]
    pub channel_name: String,
}

fn default_max_videos() -> usize { 3 }
fn default_channel_name() -> String { "GearBot".into() }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_videos_per_product: default_max_videos(),
            channel_name: default_channel_name(),
        }
    }
}

/// Gateway (HTTP API) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub require_pairing: bool,
    /// Fixed pairing code; generated at startup when unset.
    #[serde(default)]
    pub pairing_code: Option<String>,
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8090 }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            require_pairing: false,
            pairing_code: None,
        }
    }
}

/// Assistant identity & presentation strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default = "default_name")]
    pub name: String,
    /// First assistant message of every fresh session.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Shown by the UI as query suggestions.
    #[serde(default = "default_examples")]
    pub example_questions: Vec<String>,
}

fn default_name() -> String { "GearBot".into() }
fn default_greeting() -> String {
    "Hello! How can I help you find the right training gear today?".into()
}
fn default_examples() -> Vec<String> {
    vec![
        "What can I use for footwork?".into(),
        "Tell me about the BOSU Elite".into(),
        "Do you have anything for strength training?".into(),
    ]
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: default_name(),
            greeting: default_greeting(),
            example_questions: default_examples(),
        }
    }
}
