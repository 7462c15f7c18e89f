//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application parameters
//! at the composition root.

mod charts;
mod history;
mod llm;
mod logging;
mod server;

pub use charts::FileChartsConfig;
pub use history::FileHistoryConfig;
pub use llm::FileLlmConfig;
pub use logging::FileLoggingConfig;
pub use server::FileServerConfig;

use ecobot_application::{DispatchParams, SessionParams};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("server.port cannot be 0")]
    ZeroPort,

    #[error("server.max_line_bytes cannot be 0")]
    ZeroLineLimit,

    #[error("server.idle_timeout_secs cannot be 0 (omit it to disable the timeout)")]
    ZeroIdleTimeout,

    #[error("history.max_turns cannot be 0")]
    ZeroMaxTurns,

    #[error("history.context_window ({window}) exceeds stored entries ({stored})")]
    ContextWindowTooLarge { window: usize, stored: usize },

    #[error("llm.model cannot be empty")]
    EmptyModelName,

    #[error("llm.temperature must be within 0..=2, got {0}")]
    TemperatureOutOfRange(f32),

    #[error("llm.max_tokens cannot be 0")]
    ZeroMaxTokens,

    #[error("charts.width and charts.height must be at least {min} pixels")]
    ChartTooSmall { min: u32 },
}

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Logged, startup continues.
    Warning,
    /// Startup aborts.
    Error,
}

/// A single issue found by [`FileConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub error: ConfigValidationError,
}

impl ConfigIssue {
    fn warning(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Warning,
            error,
        }
    }

    fn error(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Error,
            error,
        }
    }
}

const MIN_CHART_SIDE: u32 = 64;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Listener and per-connection settings
    pub server: FileServerConfig,
    /// History retention
    pub history: FileHistoryConfig,
    /// Completion provider
    pub llm: FileLlmConfig,
    /// Chart output
    pub charts: FileChartsConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.server.port == 0 {
            issues.push(ConfigIssue::error(ConfigValidationError::ZeroPort));
        }
        if self.server.max_line_bytes == 0 {
            issues.push(ConfigIssue::error(ConfigValidationError::ZeroLineLimit));
        }
        if self.server.idle_timeout_secs == Some(0) {
            issues.push(ConfigIssue::error(ConfigValidationError::ZeroIdleTimeout));
        }
        if self.history.max_turns == 0 {
            issues.push(ConfigIssue::error(ConfigValidationError::ZeroMaxTurns));
        }
        let stored = 2 * self.history.max_turns;
        if self.history.context_window > stored {
            issues.push(ConfigIssue::warning(
                ConfigValidationError::ContextWindowTooLarge {
                    window: self.history.context_window,
                    stored,
                },
            ));
        }
        if self.llm.model.trim().is_empty() {
            issues.push(ConfigIssue::warning(ConfigValidationError::EmptyModelName));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            issues.push(ConfigIssue::error(
                ConfigValidationError::TemperatureOutOfRange(self.llm.temperature),
            ));
        }
        if self.llm.max_tokens == 0 {
            issues.push(ConfigIssue::error(ConfigValidationError::ZeroMaxTokens));
        }
        if self.charts.width < MIN_CHART_SIDE || self.charts.height < MIN_CHART_SIDE {
            issues.push(ConfigIssue::error(ConfigValidationError::ChartTooSmall {
                min: MIN_CHART_SIDE,
            }));
        }

        issues
    }

    /// Generative fallback parameters for the dispatcher.
    pub fn dispatch_params(&self) -> DispatchParams {
        DispatchParams::default()
            .with_context_window(self.history.context_window)
            .with_temperature(self.llm.temperature)
            .with_max_tokens(self.llm.max_tokens)
    }

    /// Per-session limits for workers and the history store.
    pub fn session_params(&self) -> SessionParams {
        SessionParams::default()
            .with_max_turns(self.history.max_turns)
            .with_max_line_bytes(self.server.max_line_bytes)
            .with_idle_timeout(self.server.idle_timeout_secs.map(Duration::from_secs))
            .with_assistant_name(self.server.assistant_name.clone())
    }
}
