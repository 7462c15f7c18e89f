//! Configuration file loading for ecobot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ECOBOT_SOCKET_PORT` environment variable (listen port only)
//! 2. `--config <path>` specified file
//! 3. Project root: `./ecobot.toml` or `./.ecobot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ecobot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigValidationError, FileChartsConfig, FileConfig, FileHistoryConfig,
    FileLlmConfig, FileLoggingConfig, FileServerConfig, Severity,
};
pub use loader::{ConfigLoader, PORT_ENV_VAR};
