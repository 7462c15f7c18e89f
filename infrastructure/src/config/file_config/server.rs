//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::net::Ipv6Addr;

/// Raw listener and session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Listen address (all interfaces by default)
    pub host: String,
    /// Listen port, also settable through `ECOBOT_SOCKET_PORT`
    pub port: u16,
    /// Name shown before every reply
    pub assistant_name: String,
    /// Longest accepted input line in bytes
    pub max_line_bytes: usize,
    /// Close idle sessions after this many seconds (unset waits forever)
    pub idle_timeout_secs: Option<u64>,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            assistant_name: "EcoBot".to_string(),
            max_line_bytes: 8192,
            idle_timeout_secs: None,
        }
    }
}

impl FileServerConfig {
    /// `host:port` string suitable for binding. IPv6 literals are
    /// bracketed.
    pub fn bind_address(&self) -> String {
        let host = self.host.trim();
        if host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", host, self.port)
        } else {
            format!("{}:{}", host, self.port)
        }
    }
}
