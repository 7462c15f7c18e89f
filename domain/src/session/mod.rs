//! Conversation sessions.
//!
//! - [`entities::Message`]: a single turn entry (user question or assistant answer)
//! - [`entities::SessionInfo`]: metadata of one live connection
//! - [`history::ConversationHistory`]: bounded per-session turn log

pub mod entities;
pub mod history;
