//! Knowledge lookup records and their reply formatting.

pub mod record;

pub use record::{Concept, FormatError, KnowledgeRecord};
