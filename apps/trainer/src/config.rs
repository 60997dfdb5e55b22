//! Runtime configuration assembled from the command line.

use std::path::PathBuf;

use drill_core::{DeckKind, ParseOptions};

use crate::error::LoadError;

/// Where the deck text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    Path(PathBuf),
    Url(String),
}

impl DeckSource {
    /// Classify a raw argument. Anything that does not look like an HTTP
    /// URL is treated as a filesystem path.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Self::Url(arg.to_string())
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }
}

/// Everything the trainer needs before it can load a deck, validated
/// once at startup.
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    pub source: DeckSource,
    pub kind: DeckKind,
    pub columns: Option<usize>,
    pub parse_options: ParseOptions,
}

impl TrainerConfig {
    pub fn new(
        deck: &str,
        kind: DeckKind,
        columns: Option<usize>,
        parse_options: ParseOptions,
    ) -> Result<Self, LoadError> {
        if deck.trim().is_empty() {
            return Err(LoadError::MissingDeckPath);
        }
        if columns == Some(0) {
            return Err(LoadError::InvalidColumns);
        }
        Ok(Self {
            source: DeckSource::from_arg(deck),
            kind,
            columns,
            parse_options,
        })
    }

    /// Column count for the reference table: the explicit override when
    /// given, the kind's preset otherwise.
    pub fn table_columns(&self) -> usize {
        self.columns.unwrap_or_else(|| self.kind.table_columns())
    }
}
