//! Message classification helpers.
//!
//! - [`normalize::fold`]: case-fold and accent-strip a message
//! - [`numbers::extract_floats`]: locale-flexible numeric arguments
//! - [`chart_intent::classify_chart`]: chart trigger and sub-type detection

pub mod chart_intent;
pub mod normalize;
pub mod numbers;

pub use chart_intent::{ChartIntent, classify_chart};
pub use normalize::{fold, is_exit_keyword};
pub use numbers::extract_floats;
