//! Session domain entities

use chrono::{DateTime, Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Wire name used by chat-completion APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A message in a conversation (Entity)
///
/// Stored history only ever contains `User` and `Assistant` messages, appended
/// in pairs; `System` messages are built per request by the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Opaque short session token, e.g. `e750230a`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Metadata describing one live session, as shown by the admin console.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInfo {
    pub id: SessionId,
    /// Display sequence number ("Sesión 1", "Sesión 2", ...).
    pub sequence: u64,
    pub peer: SocketAddr,
    pub started_at: DateTime<Local>,
    pub last_active: DateTime<Local>,
}

impl SessionInfo {
    pub fn new(id: SessionId, sequence: u64, peer: SocketAddr) -> Self {
        let now = Local::now();
        Self {
            id,
            sequence,
            peer,
            started_at: now,
            last_active: now,
        }
    }

    pub fn touch(&mut self) {
        self.last_active = Local::now();
    }

    /// ISO-8601 timestamp with seconds precision and local offset.
    pub fn format_timestamp(ts: &DateTime<Local>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::System.as_str(), "system");
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_session_info_touch_moves_last_active_forward() {
        let peer: SocketAddr = "127.0.0.1:4000".parse().unwrap();
        let mut info = SessionInfo::new(SessionId::from("abcd1234"), 1, peer);
        let before = info.last_active;
        info.touch();
        assert!(info.last_active >= before);
        assert_eq!(info.started_at, before);
    }

    #[test]
    fn test_timestamp_has_seconds_precision() {
        let peer: SocketAddr = "127.0.0.1:4000".parse().unwrap();
        let info = SessionInfo::new(SessionId::from("abcd1234"), 1, peer);
        let ts = SessionInfo::format_timestamp(&info.started_at);
        // 2026-10-16T19:30:00-03:00
        assert_eq!(ts.len(), 25);
        assert!(!ts.contains('.'));
    }
}
