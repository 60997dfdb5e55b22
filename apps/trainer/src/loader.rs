//! Deck retrieval and parsing.

use drill_core::{parse_deck, Entry, Section};

use crate::config::{DeckSource, TrainerConfig};
use crate::error::LoadError;

/// A parsed deck with its warnings already reported.
#[derive(Debug, Clone)]
pub struct LoadedDeck {
    pub entries: Vec<Entry>,
    pub sections: Vec<Section>,
}

/// Fetch the deck text and parse it.
///
/// One attempt, no retry: transport and parse failures surface
/// immediately. Skipped lines are logged at warn level and do not fail
/// the load.
pub async fn load_deck(config: &TrainerConfig) -> Result<LoadedDeck, LoadError> {
    let text = fetch_text(&config.source).await?;
    let parsed = parse_deck(&text, &config.parse_options)?;

    for warning in &parsed.warnings {
        tracing::warn!("{warning}");
    }
    tracing::debug!(
        entries = parsed.entries.len(),
        sections = parsed.sections.len(),
        "deck loaded"
    );

    Ok(LoadedDeck {
        entries: parsed.entries,
        sections: parsed.sections,
    })
}

async fn fetch_text(source: &DeckSource) -> Result<String, LoadError> {
    match source {
        DeckSource::Path(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::ReadFile {
                    path: path.clone(),
                    source,
                })
        }
        DeckSource::Url(url) => {
            let fetched = async {
                let response = reqwest::get(url).await?;
                let response = response.error_for_status()?;
                response.text().await
            };
            fetched.await.map_err(|source| LoadError::FetchUrl {
                url: url.clone(),
                source,
            })
        }
    }
}
