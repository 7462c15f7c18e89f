//! Operator console for inspecting and terminating live sessions.

pub mod console;

pub use console::{AdminCommand, AdminConsole};
