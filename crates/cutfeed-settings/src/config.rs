//! Configuration for cutfeed
//!
//! Provides configuration file handling, validation, and resolution of rewrite
//! limits for the parts found in a program. Supports JSON and TOML files,
//! selected by file extension.
//!
//! Configuration is organized into:
//! - Feed selection (material thickness)
//! - Rewrite limits per part, with an optional default
//! - Part scope (per part or whole program)
//! - Output file settings

use cutfeed_core::{PartName, Thickness};
use cutfeed_processor::{PartScope, RewriteLimits};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// File name looked up in the platform config directory
pub const CONFIG_FILE_NAME: &str = "cutfeed.toml";

/// Output file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Prefix added to the input file name when no output path is given
    pub file_prefix: String,
    /// Keep a trailing newline when the input had one
    pub preserve_trailing_newline: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            file_prefix: "modified_".to_string(),
            preserve_trailing_newline: true,
        }
    }
}

impl OutputSettings {
    /// Output path derived from an input path: same directory, prefixed name
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "program.nc".to_string());
        input.with_file_name(format!("{}{}", self.file_prefix, name))
    }
}

/// Complete cutfeed configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Material thickness selector
    pub thickness: Thickness,
    /// Limit for parts without an explicit entry; `None` makes such parts an error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_limit: Option<u32>,
    /// How lines are grouped into parts
    pub part_scope: PartScope,
    /// Explicit limit per part name
    pub limits: RewriteLimits,
    /// Output file settings
    pub output: OutputSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location in the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cutfeed").join(CONFIG_FILE_NAME))
    }

    /// Load config from an explicit path, else the default location, else defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        tracing::info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let prefix = &self.output.file_prefix;
        if prefix.is_empty() {
            return Err(ConfigError::InvalidSetting {
                key: "output.file_prefix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if prefix.contains(['/', '\\']) {
            return Err(ConfigError::InvalidSetting {
                key: "output.file_prefix".to_string(),
                reason: "must not contain path separators".to_string(),
            });
        }
        Ok(())
    }

    /// Build the limits for the given parts
    ///
    /// Explicit entries win; otherwise `default_limit` applies. A part left
    /// without a limit is reported instead of being guessed.
    pub fn resolve_limits(&self, parts: &[PartName]) -> ConfigResult<RewriteLimits> {
        let mut resolved = RewriteLimits::new();

        for part in parts {
            let limit = match (self.limits.get(part.as_str()), self.default_limit) {
                (Some(limit), _) => limit,
                (None, Some(default)) => {
                    tracing::debug!("Part '{}' uses default limit {}", part, default);
                    default
                }
                (None, None) => return Err(ConfigError::MissingLimit(part.clone())),
            };
            resolved.set(part.clone(), limit);
        }

        for (name, _) in self.limits.iter() {
            if !parts.contains(name) {
                tracing::warn!("Limit configured for part '{}' which is not in the program", name);
            }
        }

        Ok(resolved)
    }
}

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
