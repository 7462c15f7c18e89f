//! Dispatch Request use case.
//!
//! Classifies one message and produces the reply. Routes are tried in a
//! fixed order, first match wins:
//!
//! 1. **Chart**: a chart trigger word in the folded text ([`chart`])
//! 2. **Lookup**: a knowledge provider hit ([`lookup`])
//! 3. **Generative**: the completion provider ([`generative`])
//!
//! [`DispatchRequestUseCase::execute`] never fails. Each route turns its own
//! typed errors into user-facing text.

mod chart;
mod generative;
mod lookup;

use crate::config::DispatchParams;
use crate::ports::chart_renderer::ChartRenderer;
use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::knowledge_provider::KnowledgeProvider;
use ecobot_domain::util::preview;
use ecobot_domain::{Message, SessionId, classify_chart, fold};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Which handler produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Chart,
    Lookup,
    Generative,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Chart => "chart",
            Route::Lookup => "lookup",
            Route::Generative => "generative",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for the [`DispatchRequestUseCase`].
#[derive(Debug, Clone)]
pub struct DispatchInput {
    pub session: SessionId,
    /// The user's message as received (trimmed).
    pub question: String,
    /// Copy of the session's history, oldest first.
    pub history: Vec<Message>,
}

impl DispatchInput {
    pub fn new(session: SessionId, question: impl Into<String>, history: Vec<Message>) -> Self {
        Self {
            session,
            question: question.into(),
            history,
        }
    }
}

/// Reply text plus the route that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub route: Route,
    pub reply: String,
}

/// Use case for answering one message.
pub struct DispatchRequestUseCase {
    gateway: Arc<dyn CompletionGateway>,
    knowledge: Arc<dyn KnowledgeProvider>,
    renderer: Arc<dyn ChartRenderer>,
    params: DispatchParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for DispatchRequestUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            knowledge: self.knowledge.clone(),
            renderer: self.renderer.clone(),
            params: self.params.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl DispatchRequestUseCase {
    pub fn new(
        gateway: Arc<dyn CompletionGateway>,
        knowledge: Arc<dyn KnowledgeProvider>,
        renderer: Arc<dyn ChartRenderer>,
    ) -> Self {
        Self {
            gateway,
            knowledge,
            renderer,
            params: DispatchParams::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_params(mut self, params: DispatchParams) -> Self {
        self.params = params;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn params(&self) -> &DispatchParams {
        &self.params
    }

    /// Classify and answer one message.
    pub async fn execute(&self, input: DispatchInput) -> DispatchOutcome {
        let folded = fold(&input.question);

        let outcome = if let Some(intent) = classify_chart(&folded) {
            debug!(session = %input.session, "Chart intent: {:?}", intent);
            DispatchOutcome {
                route: Route::Chart,
                reply: chart::resolve(&self.renderer, intent).await,
            }
        } else if let Some(record) =
            lookup::find_record(self.knowledge.as_ref(), &input.question, &folded)
        {
            DispatchOutcome {
                route: Route::Lookup,
                reply: lookup::render_record(&record),
            }
        } else {
            DispatchOutcome {
                route: Route::Generative,
                reply: generative::resolve(
                    self.gateway.as_ref(),
                    &input.question,
                    &input.history,
                    &self.params,
                )
                .await,
            }
        };

        debug!(
            session = %input.session,
            route = %outcome.route,
            "Dispatched: {}",
            preview(&input.question, 60)
        );

        self.conversation_logger.log(ConversationEvent::new(
            "dispatch",
            serde_json::json!({
                "session": input.session.as_str(),
                "route": outcome.route.as_str(),
                "question_bytes": input.question.len(),
                "reply_bytes": outcome.reply.len(),
            }),
        ));

        outcome
    }
}
