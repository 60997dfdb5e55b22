//! Core types for the deck engine.

use serde::{Deserialize, Serialize};

/// A single drillable card: one displayed character and its accepted answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The displayed character (kana, kanji, ...). Never empty.
    pub prompt: String,
    /// Accepted answers, trimmed and lower-cased at parse time. Never empty.
    pub answers: Vec<String>,
    /// The raw pipe-delimited answer field as written in the deck file,
    /// shown verbatim by hints and the reference table.
    pub answer_display: String,
}

impl Entry {
    /// Build an entry from a prompt and a raw pipe-delimited answer field.
    ///
    /// Returns `None` when the prompt is empty or no usable answers survive
    /// normalization, in which case the source line counts as invalid.
    pub fn from_fields(prompt: &str, answer_field: &str) -> Option<Self> {
        let answers: Vec<String> = answer_field
            .split('|')
            .map(crate::matching::normalize_answer)
            .filter(|a| !a.is_empty())
            .collect();

        if prompt.is_empty() || answers.is_empty() {
            return None;
        }

        Some(Self {
            prompt: prompt.to_string(),
            answers,
            answer_display: answer_field.to_string(),
        })
    }
}

/// A titled group of entries, as delimited by `#` header lines in the deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<Entry>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }
}

/// Deck family, selecting the reference-table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckKind {
    /// Syllabary decks (hiragana, katakana): wide, dense grid.
    Syllabary,
    /// Logographic decks (kanji): fewer, wider cells.
    Logographic,
}

impl DeckKind {
    /// Column count of the reference table for this deck family.
    pub fn table_columns(self) -> usize {
        match self {
            Self::Syllabary => 12,
            Self::Logographic => 5,
        }
    }
}

impl Default for DeckKind {
    fn default() -> Self {
        Self::Syllabary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_normalizes_and_filters_answers() {
        let entry = Entry::from_fields("日", " Nichi | JITSU || hi ").unwrap();
        assert_eq!(entry.prompt, "日");
        assert_eq!(entry.answers, vec!["nichi", "jitsu", "hi"]);
        assert_eq!(entry.answer_display, " Nichi | JITSU || hi ");
    }

    #[test]
    fn entry_rejects_empty_answer_field() {
        assert!(Entry::from_fields("あ", " | | ").is_none());
        assert!(Entry::from_fields("あ", "").is_none());
    }

    #[test]
    fn entry_rejects_empty_prompt() {
        assert!(Entry::from_fields("", "a").is_none());
    }

    #[test]
    fn deck_kind_column_presets() {
        assert_eq!(DeckKind::Syllabary.table_columns(), 12);
        assert_eq!(DeckKind::Logographic.table_columns(), 5);
        assert_eq!(DeckKind::default(), DeckKind::Syllabary);
    }
}
