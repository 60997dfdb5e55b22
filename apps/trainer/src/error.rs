//! Fatal errors on the way to a running quiz.

use std::path::PathBuf;
use thiserror::Error;

/// Anything that prevents the trainer from reaching a loaded deck.
///
/// Every variant is fatal: main logs the detail and tells the user only
/// that the deck failed to load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no deck path or URL was given")]
    MissingDeckPath,

    #[error("table column count must be at least 1")]
    InvalidColumns,

    #[error("failed to read deck file {path:?}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch deck from {url}")]
    FetchUrl {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Deck(#[from] drill_core::DeckError),
}
