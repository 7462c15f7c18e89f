//! Dispatch parameters: generative fallback control.
//!
//! [`DispatchParams`] groups the static parameters used by
//! [`DispatchRequestUseCase`](crate::use_cases::dispatch_request::DispatchRequestUseCase)
//! when it falls back to the completion provider.

use serde::{Deserialize, Serialize};

/// Generative fallback parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchParams {
    /// Number of most recent history entries sent with each request (K).
    pub context_window: usize,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum reply length in tokens.
    pub max_tokens: u32,
}

impl Default for DispatchParams {
    fn default() -> Self {
        Self {
            context_window: 6,
            temperature: 0.55,
            max_tokens: 380,
        }
    }
}

impl DispatchParams {
    // ==================== Builder Methods ====================

    pub fn with_context_window(mut self, entries: usize) -> Self {
        self.context_window = entries;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = DispatchParams::default();
        assert_eq!(params.context_window, 6);
        assert!((params.temperature - 0.55).abs() < f32::EPSILON);
        assert_eq!(params.max_tokens, 380);
    }

    #[test]
    fn test_builder() {
        let params = DispatchParams::default()
            .with_context_window(2)
            .with_temperature(0.2)
            .with_max_tokens(100);
        assert_eq!(params.context_window, 2);
        assert_eq!(params.max_tokens, 100);
    }
}
