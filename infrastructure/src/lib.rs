//! Infrastructure layer for ecobot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod charts;
pub mod config;
pub mod knowledge;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use charts::PngChartRenderer;
pub use config::{
    ConfigIssue, ConfigLoader, ConfigValidationError, FileChartsConfig, FileConfig,
    FileHistoryConfig, FileLlmConfig, FileLoggingConfig, FileServerConfig, PORT_ENV_VAR, Severity,
};
pub use knowledge::StaticKnowledgeBase;
pub use logging::JsonlConversationLogger;
pub use providers::OpenAiCompatGateway;
