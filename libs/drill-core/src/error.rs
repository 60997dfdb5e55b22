//! Error and diagnostic types for drill-core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Fatal deck-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck text contained no recognizable entries. Aborts loading;
    /// a quiz cannot run against an empty deck.
    #[error("deck contains no valid entries")]
    EmptyDeck,
}

/// A malformed deck line that was skipped. Non-fatal: parsing continues and
/// the caller decides how to surface the diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 1-based line number in the source text.
    pub line: usize,
    /// The offending line, trimmed.
    pub content: String,
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "skipping invalid deck line {}: {}", self.line, self.content)
    }
}
