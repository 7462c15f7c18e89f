//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod chart_renderer;
pub mod completion_gateway;
pub mod conversation_logger;
pub mod knowledge_provider;
