//! Completion Gateway port
//!
//! Defines the interface for the generative text backend used when no chart
//! or lookup route applies.

use async_trait::async_trait;
use ecobot_domain::Message;
use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Completion provider not configured: {0}")]
    NotConfigured(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// One completion request: ordered messages plus sampling caps.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Gateway for generative completions
///
/// Implementations make a single attempt per call; retries are never
/// performed here so the caller can fall back immediately.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}
