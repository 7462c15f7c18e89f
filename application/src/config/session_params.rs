//! Session parameters: per-connection limits.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-session limits applied by the session worker and history store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Turns retained per session (N). History holds `2 * N` entries.
    pub max_turns: usize,
    /// Longest accepted input line; longer lines are cut.
    pub max_line_bytes: usize,
    /// Close a session after this long without input. `None` waits forever.
    pub idle_timeout: Option<Duration>,
    /// Prefix shown before every reply.
    pub assistant_name: String,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            max_turns: 40,
            max_line_bytes: 8192,
            idle_timeout: None,
            assistant_name: "EcoBot".to_string(),
        }
    }
}

impl SessionParams {
    pub fn with_max_turns(mut self, turns: usize) -> Self {
        self.max_turns = turns;
        self
    }

    pub fn with_max_line_bytes(mut self, bytes: usize) -> Self {
        self.max_line_bytes = bytes;
        self
    }

    pub fn with_idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn with_assistant_name(mut self, name: impl Into<String>) -> Self {
        self.assistant_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_idle_timeout() {
        let params = SessionParams::default();
        assert_eq!(params.max_turns, 40);
        assert_eq!(params.idle_timeout, None);
        assert_eq!(params.assistant_name, "EcoBot");
    }
}
