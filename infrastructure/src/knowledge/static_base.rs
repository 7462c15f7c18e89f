//! In-memory knowledge provider over a fixed keyword table.
//!
//! Query and keywords are folded (accent-stripped, lowercased) before
//! comparison. Keywords of three characters or fewer only match a whole
//! whitespace-separated token, so `mc` never fires inside `comercio`;
//! longer keywords match as substrings.

use super::entries::ENTRIES;
use ecobot_application::ports::knowledge_provider::KnowledgeProvider;
use ecobot_domain::{Concept, KnowledgeRecord, fold};

const SHORT_KEYWORD_CHARS: usize = 3;

/// One table row.
#[derive(Debug, Clone, Copy)]
pub struct KbEntry {
    pub keywords: &'static [&'static str],
    pub definition: &'static str,
    pub intuition: Option<&'static str>,
    pub mini_check: Option<&'static str>,
    pub formula: Option<&'static str>,
}

impl KbEntry {
    pub const fn new(keywords: &'static [&'static str], definition: &'static str) -> Self {
        Self {
            keywords,
            definition,
            intuition: None,
            mini_check: None,
            formula: None,
        }
    }

    pub const fn intuition(self, text: &'static str) -> Self {
        Self {
            intuition: Some(text),
            ..self
        }
    }

    pub const fn mini_check(self, text: &'static str) -> Self {
        Self {
            mini_check: Some(text),
            ..self
        }
    }

    pub const fn formula(self, text: &'static str) -> Self {
        Self {
            formula: Some(text),
            ..self
        }
    }

    fn matches(&self, folded_query: &str, tokens: &[&str]) -> bool {
        self.keywords.iter().any(|keyword| {
            let keyword = fold(keyword);
            if keyword.is_empty() {
                false
            } else if keyword.chars().count() <= SHORT_KEYWORD_CHARS {
                tokens.contains(&keyword.as_str())
            } else {
                folded_query.contains(&keyword)
            }
        })
    }

    fn to_record(self) -> KnowledgeRecord {
        let mut concept = Concept::new(self.definition);
        concept.intuition = self.intuition.map(str::to_string);
        concept.mini_check = self.mini_check.map(str::to_string);
        concept.formula = self.formula.map(str::to_string);
        KnowledgeRecord::Structured(concept)
    }
}

/// Knowledge provider backed by a static table.
pub struct StaticKnowledgeBase {
    entries: &'static [KbEntry],
}

impl Default for StaticKnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticKnowledgeBase {
    /// The built-in economics table.
    pub fn new() -> Self {
        Self { entries: ENTRIES }
    }

    pub fn with_entries(entries: &'static [KbEntry]) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KnowledgeProvider for StaticKnowledgeBase {
    fn lookup(&self, text: &str) -> Option<KnowledgeRecord> {
        let folded = fold(text);
        if folded.is_empty() {
            return None;
        }
        let tokens: Vec<&str> = folded.split_whitespace().collect();

        self.entries
            .iter()
            .find(|entry| entry.matches(&folded, &tokens))
            .map(|entry| entry.to_record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structured(record: KnowledgeRecord) -> Concept {
        match record {
            KnowledgeRecord::Structured(concept) => concept,
            other => panic!("expected structured record, got {:?}", other),
        }
    }

    #[test]
    fn test_inflation_question() {
        let kb = StaticKnowledgeBase::new();
        let concept = structured(kb.lookup("¿Qué es la inflación?").unwrap());
        assert!(concept.definition.contains("sostenido y generalizado"));
        assert_eq!(
            concept.intuition.as_deref(),
            Some("Reduce el poder adquisitivo del dinero.")
        );
        assert_eq!(concept.formula, None);
    }

    #[test]
    fn test_short_keyword_needs_whole_token() {
        let kb = StaticKnowledgeBase::new();
        // "tir" hides inside "retirar" but must not match there
        assert!(kb.lookup("quiero retirar plata").is_none());
        let concept = structured(kb.lookup("como calculo la tir").unwrap());
        assert!(concept.definition.contains("VPN sea cero"));
    }

    #[test]
    fn test_first_entry_wins() {
        let kb = StaticKnowledgeBase::new();
        // "pbi real" also contains "pbi", which comes first in the table
        let concept = structured(kb.lookup("pbi real").unwrap());
        assert!(concept.definition.starts_with("Valor de mercado"));
    }

    #[test]
    fn test_optional_fields_are_carried() {
        let kb = StaticKnowledgeBase::new();
        let concept = structured(kb.lookup("elasticidad precio de la demanda").unwrap());
        // "demanda" appears earlier in the table than the elasticity entry
        assert!(concept.definition.starts_with("La demanda"));

        let concept = structured(kb.lookup("costo marginal").unwrap());
        assert!(concept.mini_check.is_some());
        assert_eq!(concept.formula.as_deref(), Some("CMg(Q) = dCT/dQ"));
    }

    #[test]
    fn test_miss_and_blank() {
        let kb = StaticKnowledgeBase::new();
        assert!(kb.lookup("hola, ¿cómo estás?").is_none());
        assert!(kb.lookup("   ").is_none());
    }

    #[test]
    fn test_formatted_reply_has_closing_prompt() {
        let kb = StaticKnowledgeBase::new();
        let reply = kb.lookup("vpn").unwrap().format().unwrap();
        assert!(reply.starts_with("• Definición: Suma de los flujos"));
        assert!(reply.ends_with(ecobot_domain::PromptTemplate::closing_prompt()));
    }

    #[test]
    fn test_custom_table() {
        static CUSTOM: &[KbEntry] = &[KbEntry::new(&["ab"], "Definición corta.")];
        let kb = StaticKnowledgeBase::with_entries(CUSTOM);
        assert_eq!(kb.len(), 1);
        assert!(kb.lookup("ab cd").is_some());
        assert!(kb.lookup("abcd").is_none());
    }
}
