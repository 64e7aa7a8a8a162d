//! Configuration passed explicitly into every operation
//!
//! There is no global settings object: the host (or the CLI) loads a
//! [`Config`] once and hands it to whatever needs it at call time. Stored
//! as JSON; the schema is exported for config editors via `JsonSchema`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Memory notes settings
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Busy indicator settings
    #[serde(default)]
    pub status: StatusConfig,
}

/// Memory notes configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MemoryConfig {
    /// Notes file path; when unset the embedding host decides (the CLI uses
    /// `.tandem/memory.md` in the working directory)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Busy indicator configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StatusConfig {
    /// Spinner frames cycled while a request is in flight
    #[serde(default = "default_spinner_frames")]
    pub frames: Vec<String>,
}

fn default_spinner_frames() -> Vec<String> {
    ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            frames: default_spinner_frames(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a JSON file
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a JSON file (atomic: temp file + rename)
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
            }
        }
        let temp_path = path.with_extension("json.tmp");
        let write = || -> std::io::Result<()> {
            let mut file = std::fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
            std::fs::rename(&temp_path, path)?;
            Ok(())
        };
        write().map_err(|e| ConfigError::IoError(e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.status.frames.is_empty() {
            return Err(ConfigError::ValidationError(
                "status.frames cannot be empty".to_string(),
            ));
        }
        for frame in &self.status.frames {
            if frame.is_empty() {
                return Err(ConfigError::ValidationError(
                    "spinner frames cannot be empty strings".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
