//! Generative route: completion provider call with a safe fallback answer.

use crate::config::DispatchParams;
use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest};
use ecobot_domain::{Message, PromptTemplate};
use tracing::warn;

/// [system] + last `context_window` history entries + current question.
pub(crate) fn build_request(
    question: &str,
    history: &[Message],
    params: &DispatchParams,
) -> CompletionRequest {
    let skip = history.len().saturating_sub(params.context_window);
    let mut messages = Vec::with_capacity(2 + params.context_window);
    messages.push(Message::system(PromptTemplate::system_instruction()));
    messages.extend(history.iter().skip(skip).cloned());
    messages.push(Message::user(question));

    CompletionRequest {
        messages,
        temperature: params.temperature,
        max_tokens: params.max_tokens,
    }
}

pub(crate) async fn resolve(
    gateway: &dyn CompletionGateway,
    question: &str,
    history: &[Message],
    params: &DispatchParams,
) -> String {
    let request = build_request(question, history, params);
    match gateway.complete(request).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            warn!("Completion provider returned an empty answer");
            PromptTemplate::provider_unavailable("respuesta vacía del modelo")
        }
        Err(e) => {
            warn!("Completion provider failed: {}", e);
            PromptTemplate::provider_unavailable(&e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecobot_domain::Role;

    #[test]
    fn test_request_layout() {
        let history: Vec<Message> = (0..10)
            .flat_map(|i| [Message::user(format!("q{i}")), Message::assistant(format!("a{i}"))])
            .collect();
        let request = build_request("nueva", &history, &DispatchParams::default());

        assert_eq!(request.messages.len(), 1 + 6 + 1);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[1].content, "q7");
        assert_eq!(request.messages[6].content, "a9");
        assert_eq!(request.messages[7], Message::user("nueva"));
        assert_eq!(request.max_tokens, 380);
    }

    #[test]
    fn test_short_history_is_sent_whole() {
        let history = vec![Message::user("q"), Message::assistant("a")];
        let request = build_request("x", &history, &DispatchParams::default());
        assert_eq!(request.messages.len(), 4);
    }
}
