//! TCP session server.
//!
//! - [`acceptor`]: listening socket and per-connection task spawning
//! - [`worker`]: one session's read → dispatch → reply loop
//! - [`protocol`]: wire texts and capped line reads

pub mod acceptor;
pub mod context;
pub mod protocol;
pub mod worker;

pub use acceptor::{ServerError, SessionServer};
pub use context::ServerContext;
pub use worker::{SessionWorker, WorkerState};
