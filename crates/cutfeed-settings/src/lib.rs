//! cutfeed Settings Crate
//!
//! Handles configuration files and turns them into the rewrite limits the
//! processor needs for a particular program.

pub mod config;
pub mod error;

pub use config::{Config, OutputSettings, CONFIG_FILE_NAME};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
