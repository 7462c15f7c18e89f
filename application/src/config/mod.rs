//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`DispatchParams`]: generative fallback control (context window, sampling caps)
//! - [`SessionParams`]: per-connection limits (history size, line size, idle timeout)

pub mod dispatch_params;
pub mod session_params;

pub use dispatch_params::DispatchParams;
pub use session_params::SessionParams;
