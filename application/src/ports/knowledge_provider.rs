//! Knowledge provider port
//!
//! Deterministic keyword lookup. Absence is a normal outcome.

use ecobot_domain::KnowledgeRecord;

/// Side-effect-free lookup of a knowledge record by free text.
pub trait KnowledgeProvider: Send + Sync {
    fn lookup(&self, text: &str) -> Option<KnowledgeRecord>;
}

/// Provider that never finds anything.
pub struct NoKnowledge;

impl KnowledgeProvider for NoKnowledge {
    fn lookup(&self, _text: &str) -> Option<KnowledgeRecord> {
        None
    }
}
