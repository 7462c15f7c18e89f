//! History configuration from TOML (`[history]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// Turns retained per session
    pub max_turns: usize,
    /// History entries sent with each completion request
    pub context_window: usize,
}

impl Default for FileHistoryConfig {
    fn default() -> Self {
        Self {
            max_turns: 40,
            context_window: 6,
        }
    }
}
