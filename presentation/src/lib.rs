//! Presentation layer for ecobot
//!
//! This crate contains the CLI definitions, the TCP session server, the
//! operator console and a small interactive client.

pub mod admin;
pub mod cli;
pub mod client;
pub mod server;

// Re-export commonly used types
pub use admin::{AdminCommand, AdminConsole};
pub use cli::commands::{Cli, Command};
pub use server::{ServerContext, ServerError, SessionServer, SessionWorker, WorkerState};
