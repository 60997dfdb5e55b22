//! Core drill library shared by the trainer front end.
//!
//! Provides:
//! - Deck text parser (sections, two entry formats, skip-with-warning)
//! - Answer matching for typed responses
//! - Quiz session state machine with delayed advance
//! - Fixed-column reference table renderer
//! - Shared types (Entry, Section, DeckKind)

pub mod error;
pub mod matching;
pub mod parser;
pub mod session;
pub mod table;
pub mod types;

pub use error::{DeckError, ParseWarning, Result};
pub use matching::{matches_entry, normalize_answer};
pub use parser::{parse_deck, ParseOptions, ParsedDeck, UNLABELED_SECTION};
pub use session::{QuizSession, SubmitOutcome, FEEDBACK_DELAY};
pub use table::render_table;
pub use types::{DeckKind, Entry, Section};
