//! Application layer for ecobot
//!
//! This crate contains use cases, port definitions, shared session state and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DispatchParams, SessionParams};
pub use ports::{
    chart_renderer::{ChartRenderer, RenderError},
    completion_gateway::{CompletionGateway, CompletionRequest, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    knowledge_provider::{KnowledgeProvider, NoKnowledge},
};
pub use session::{HistoryStore, Registration, SessionRegistry};
pub use use_cases::dispatch_request::{
    DispatchInput, DispatchOutcome, DispatchRequestUseCase, Route,
};
