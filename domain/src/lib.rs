//! Domain layer for ecobot
//!
//! This crate contains the core rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Session**: one client connection's isolated conversation, with a
//!   bounded [`ConversationHistory`] of question/answer turns.
//! - **Chart intent**: a message asking for a chart, classified from folded
//!   text into a [`ChartIntent`] and parameterised as a [`ChartSpec`].
//! - **Knowledge record**: a keyword lookup hit, either plain text or a
//!   structured [`Concept`].

pub mod chart;
pub mod intent;
pub mod knowledge;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use chart::{ChartError, ChartKind, ChartSpec, CostCurves, Equilibrium, LinearCurve};
pub use intent::{ChartIntent, classify_chart, extract_floats, fold, is_exit_keyword};
pub use knowledge::{Concept, FormatError, KnowledgeRecord};
pub use prompt::PromptTemplate;
pub use session::{
    entities::{Message, Role, SessionId, SessionInfo},
    history::ConversationHistory,
};
