//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the daily-rolling diagnostic log
    pub log_dir: Option<PathBuf>,
    /// JSONL conversation transcript path
    pub conversation_log: Option<PathBuf>,
}
