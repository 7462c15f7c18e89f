//! State shared by the acceptor, every session worker and the admin console.

use ecobot_application::{
    ConversationLogger, DispatchRequestUseCase, HistoryStore, NoConversationLogger,
    SessionParams, SessionRegistry,
};
use std::sync::Arc;

/// Everything a session worker needs, constructed once at startup.
#[derive(Clone)]
pub struct ServerContext {
    pub registry: Arc<SessionRegistry>,
    pub histories: Arc<HistoryStore>,
    pub dispatcher: Arc<DispatchRequestUseCase>,
    pub params: SessionParams,
    pub conversation_logger: Arc<dyn ConversationLogger>,
}

impl ServerContext {
    pub fn new(dispatcher: DispatchRequestUseCase, params: SessionParams) -> Self {
        Self {
            registry: Arc::new(SessionRegistry::new()),
            histories: Arc::new(HistoryStore::new(params.max_turns)),
            dispatcher: Arc::new(dispatcher),
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }
}
