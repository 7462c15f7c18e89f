//! Knowledge base adapters.

mod entries;
mod static_base;

pub use static_base::{KbEntry, StaticKnowledgeBase};
