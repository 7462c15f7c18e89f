//! Prompt domain
//!
//! The tutor's system instruction and the canned replies used by the dispatcher.

mod template;

pub use template::PromptTemplate;
