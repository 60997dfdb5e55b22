//! End-to-end deck loading through the config and loader layers.

use std::io::Write;

use drill_core::{DeckError, DeckKind, ParseOptions};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use mojidrill_trainer::config::{DeckSource, TrainerConfig};
use mojidrill_trainer::error::LoadError;
use mojidrill_trainer::loader::load_deck;

fn file_config(path: &str) -> TrainerConfig {
    TrainerConfig::new(path, DeckKind::Syllabary, None, ParseOptions::default()).unwrap()
}

fn deck_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn loads_a_deck_from_a_file() {
    let file = deck_file("# Vowels\n\"あ\",\"a\"\n\"い\",\"i\"\nbogus line\n");
    let config = file_config(file.path().to_str().unwrap());

    let deck = load_deck(&config).await.unwrap();

    assert_eq!(deck.entries.len(), 2);
    assert_eq!(deck.sections.len(), 1);
    assert_eq!(deck.sections[0].title, "Vowels");
    assert_eq!(deck.sections[0].items.len(), 2);
}

#[tokio::test]
async fn custom_labels_reach_the_parser() {
    let file = deck_file("kanji: \"日\", reading: \"nichi|jitsu\"\n");
    let options = ParseOptions {
        prompt_label: "kanji".to_string(),
        answer_label: "reading".to_string(),
    };
    let config = TrainerConfig::new(
        file.path().to_str().unwrap(),
        DeckKind::Logographic,
        None,
        options,
    )
    .unwrap();

    let deck = load_deck(&config).await.unwrap();

    assert_eq!(deck.entries.len(), 1);
    assert_eq!(deck.entries[0].prompt, "日");
    assert_eq!(deck.entries[0].answers, vec!["nichi", "jitsu"]);
}

#[tokio::test]
async fn missing_file_is_a_read_error() {
    let config = file_config("definitely/not/here.txt");

    let err = load_deck(&config).await.unwrap_err();

    assert!(matches!(err, LoadError::ReadFile { .. }));
}

#[tokio::test]
async fn deck_without_entries_fails_the_load() {
    let file = deck_file("# Headers only\n# ====\n\n");
    let config = file_config(file.path().to_str().unwrap());

    let err = load_deck(&config).await.unwrap_err();

    assert!(matches!(err, LoadError::Deck(DeckError::EmptyDeck)));
}

#[tokio::test]
async fn bundled_kana_deck_loads_cleanly() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../decks/kana.txt");
    let deck = load_deck(&file_config(path)).await.unwrap();

    assert_eq!(deck.entries.len(), 102);
    let titles: Vec<&str> = deck.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Hiragana", "Katakana", "Dakuon"]);

    let wo = deck.entries.iter().find(|e| e.prompt == "を").unwrap();
    assert_eq!(wo.answers, vec!["o", "wo"]);
}

#[tokio::test]
async fn bundled_kanji_deck_loads_cleanly() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../decks/kanji.txt");
    let deck = load_deck(&file_config(path)).await.unwrap();

    assert_eq!(deck.entries.len(), 21);
    assert_eq!(deck.sections.len(), 3);

    // The last section still uses the legacy labeled format.
    let people = &deck.sections[2];
    assert_eq!(people.title, "People");
    assert_eq!(people.items[0].prompt, "男");
}

#[test]
fn blank_deck_argument_is_rejected_before_any_io() {
    let err =
        TrainerConfig::new("", DeckKind::Syllabary, None, ParseOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::MissingDeckPath));
}

#[test]
fn url_arguments_take_the_fetch_path() {
    let config = TrainerConfig::new(
        "https://example.com/decks/kana.txt",
        DeckKind::Syllabary,
        None,
        ParseOptions::default(),
    )
    .unwrap();

    assert!(matches!(config.source, DeckSource::Url(_)));
}
