//! Shared session state.
//!
//! - [`registry::SessionRegistry`]: live sessions under one coarse lock
//! - [`history_store::HistoryStore`]: bounded per-session histories

pub mod history_store;
pub mod registry;

pub use history_store::HistoryStore;
pub use registry::{Registration, SessionRegistry, random_session_id};
