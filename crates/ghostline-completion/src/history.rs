//! Accepted-suggestion tracking
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A single completion the user accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedSuggestion {
    /// The accepted completion text
    pub text: String,
    /// The language context it was accepted in
    pub language: Language,
    /// Timestamp of acceptance
    pub accepted_at: DateTime<Utc>,
}

impl AcceptedSuggestion {
    pub fn new(text: String, language: Language) -> Self {
        Self {
            text,
            language,
            accepted_at: Utc::now(),
        }
    }
}

/// Append-only ordered log of accepted completions
///
/// Grows for the lifetime of the owning context manager; never truncated
/// or rewritten. Durability, if any, belongs to the embedding layer.
#[derive(Debug, Clone, Default)]
pub struct AcceptedSuggestionLog {
    entries: Vec<AcceptedSuggestion>,
}

impl AcceptedSuggestionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted completion
    pub fn record(&mut self, text: String, language: Language) {
        self.entries.push(AcceptedSuggestion::new(text, language));
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[AcceptedSuggestion] {
        &self.entries
    }

    /// Accepted completion texts, oldest first
    pub fn texts(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_in_order() {
        let mut log = AcceptedSuggestionLog::new();
        log.record("first".to_string(), Language::Rust);
        log.record("second".to_string(), Language::Rust);
        log.record("third".to_string(), Language::Python);

        assert_eq!(log.len(), 3);
        assert_eq!(log.texts(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_entries_keep_language() {
        let mut log = AcceptedSuggestionLog::new();
        log.record("x".to_string(), Language::Go);
        assert_eq!(log.entries()[0].language, Language::Go);
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = AcceptedSuggestionLog::new();
        assert!(log.is_empty());
        assert!(log.texts().is_empty());
    }
}
