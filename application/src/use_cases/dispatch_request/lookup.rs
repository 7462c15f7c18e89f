//! Lookup route: knowledge provider queries and record formatting.

use crate::ports::knowledge_provider::KnowledgeProvider;
use ecobot_domain::{KnowledgeRecord, PromptTemplate};
use tracing::warn;

/// Generic topics tried, in order, when neither the raw nor the folded
/// message hits the provider directly.
pub(crate) const FALLBACK_KEYWORDS: &[&str] = &[
    "demanda",
    "oferta",
    "elasticidad",
    "pbi",
    "pib",
    "inflacion",
    "is-lm",
    "tir",
    "vpn",
    "costos",
    "costo",
];

pub(crate) fn find_record(
    provider: &dyn KnowledgeProvider,
    raw: &str,
    folded: &str,
) -> Option<KnowledgeRecord> {
    provider
        .lookup(raw)
        .or_else(|| provider.lookup(folded))
        .or_else(|| {
            FALLBACK_KEYWORDS
                .iter()
                .filter(|keyword| folded.contains(*keyword))
                .find_map(|keyword| provider.lookup(keyword))
        })
}

/// Format a hit; a malformed record degrades to a two-line answer.
pub(crate) fn render_record(record: &KnowledgeRecord) -> String {
    match record.format() {
        Ok(text) => text,
        Err(e) => {
            warn!("Knowledge record could not be formatted: {}", e);
            PromptTemplate::degraded_lookup(&record.raw_text(), &e.to_string())
        }
    }
}
