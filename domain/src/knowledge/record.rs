//! Knowledge records returned by a lookup provider.

use crate::prompt::PromptTemplate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A record that cannot be turned into a reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("la entrada no tiene definición")]
    EmptyDefinition,
}

/// Structured concept entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Concept {
    pub definition: String,
    pub intuition: Option<String>,
    pub mini_check: Option<String>,
    pub formula: Option<String>,
}

impl Concept {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            ..Self::default()
        }
    }

    pub fn with_intuition(mut self, intuition: impl Into<String>) -> Self {
        self.intuition = Some(intuition.into());
        self
    }

    pub fn with_mini_check(mut self, mini_check: impl Into<String>) -> Self {
        self.mini_check = Some(mini_check.into());
        self
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }
}

/// Either a bare text answer or a structured concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnowledgeRecord {
    PlainText(String),
    Structured(Concept),
}

impl KnowledgeRecord {
    /// Render as definition line, optional intuition line and the fixed
    /// closing prompt.
    pub fn format(&self) -> Result<String, FormatError> {
        let (definition, intuition) = match self {
            KnowledgeRecord::PlainText(text) => (text.trim(), None),
            KnowledgeRecord::Structured(concept) => (
                concept.definition.trim(),
                concept
                    .intuition
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty()),
            ),
        };

        if definition.is_empty() {
            return Err(FormatError::EmptyDefinition);
        }

        let mut lines = vec![format!("• Definición: {definition}")];
        if let Some(intuition) = intuition {
            lines.push(format!("• Intuición: {intuition}"));
        }
        lines.push(PromptTemplate::closing_prompt().to_string());
        Ok(lines.join("\n"))
    }

    /// Every non-empty text field joined, for degraded answers.
    pub fn raw_text(&self) -> String {
        match self {
            KnowledgeRecord::PlainText(text) => text.trim().to_string(),
            KnowledgeRecord::Structured(concept) => [
                Some(concept.definition.as_str()),
                concept.intuition.as_deref(),
                concept.mini_check.as_deref(),
                concept.formula.as_deref(),
            ]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" / "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_has_definition_and_closing() {
        let record = KnowledgeRecord::PlainText("  Un concepto.  ".to_string());
        let text = record.format().unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "• Definición: Un concepto.");
        assert_eq!(lines[1], PromptTemplate::closing_prompt());
    }

    #[test]
    fn test_structured_includes_intuition_when_present() {
        let record = KnowledgeRecord::Structured(
            Concept::new("Def.")
                .with_intuition("Intu.")
                .with_formula("X = Y"),
        );
        let text = record.format().unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "• Intuición: Intu.");
        assert!(text.ends_with(PromptTemplate::closing_prompt()));
    }

    #[test]
    fn test_blank_intuition_is_skipped() {
        let record = KnowledgeRecord::Structured(Concept::new("Def.").with_intuition("   "));
        assert_eq!(record.format().unwrap().lines().count(), 2);
    }

    #[test]
    fn test_empty_definition_is_a_format_error() {
        let record = KnowledgeRecord::Structured(Concept::new(" ").with_intuition("algo"));
        assert_eq!(record.format(), Err(FormatError::EmptyDefinition));
        assert_eq!(record.raw_text(), "algo");
    }
}
