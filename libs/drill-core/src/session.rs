//! Quiz session state machine.
//!
//! Holds the cursor, the running score, and the short feedback window that
//! follows a correct answer. Time never comes from the clock directly:
//! callers pass `Instant`s in, which keeps the window logic testable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

use crate::error::{DeckError, Result};
use crate::matching::matches_entry;
use crate::types::Entry;

/// How long correct-answer feedback stays up before the next card.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(200);

/// What became of one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    Incorrect,
    /// Dropped without judging: submitted mid-composition, or while the
    /// advance from a previous correct answer was still pending.
    Discarded,
}

/// One quiz run over a fixed deck.
///
/// The session owns its entries and its random generator; nothing outside
/// it mutates the cursor or the counters.
#[derive(Debug)]
pub struct QuizSession {
    entries: Vec<Entry>,
    current: usize,
    correct: u32,
    total: u32,
    feedback_until: Option<Instant>,
    composing: bool,
    rng: StdRng,
}

impl QuizSession {
    /// Start a session on the first card with an OS-seeded generator.
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        Self::with_rng(entries, StdRng::from_os_rng())
    }

    /// Start a session with a caller-provided generator. A fixed seed
    /// makes the card order reproducible.
    pub fn with_rng(entries: Vec<Entry>, rng: StdRng) -> Result<Self> {
        if entries.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self {
            entries,
            current: 0,
            correct: 0,
            total: 0,
            feedback_until: None,
            composing: false,
            rng,
        })
    }

    pub fn current_entry(&self) -> &Entry {
        &self.entries[self.current]
    }

    pub fn deck_len(&self) -> usize {
        self.entries.len()
    }

    /// Counters as `(correct, total)`.
    pub fn score(&self) -> (u32, u32) {
        (self.correct, self.total)
    }

    /// Raw answer field of the current card. Showing it does not count
    /// as an attempt.
    pub fn hint(&self) -> &str {
        &self.entries[self.current].answer_display
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Whether the session is awaiting input, with no advance pending.
    pub fn is_ready(&self) -> bool {
        self.feedback_until.is_none()
    }

    /// Suspend submit handling while a composed input sequence is active.
    pub fn begin_composition(&mut self) {
        self.composing = true;
    }

    pub fn end_composition(&mut self) {
        self.composing = false;
    }

    /// Judge one typed answer.
    ///
    /// Submissions during composition or while an advance is pending are
    /// discarded without touching the counters. A correct answer bumps
    /// both counters and opens the feedback window; the card itself
    /// changes later, in [`tick`]. An incorrect answer bumps only the
    /// total and leaves the card in place for another try.
    ///
    /// [`tick`]: QuizSession::tick
    pub fn submit(&mut self, typed: &str, now: Instant) -> SubmitOutcome {
        if self.composing || self.feedback_until.is_some() {
            return SubmitOutcome::Discarded;
        }

        self.total += 1;
        if matches_entry(self.current_entry(), typed) {
            self.correct += 1;
            self.feedback_until = Some(now + FEEDBACK_DELAY);
            SubmitOutcome::Correct
        } else {
            SubmitOutcome::Incorrect
        }
    }

    /// Carry out the delayed advance once its window has expired.
    /// Returns true when the card changed; callers redraw on true.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.feedback_until {
            Some(deadline) if now >= deadline => {
                self.feedback_until = None;
                self.current = self.pick_next();
                true
            }
            _ => false,
        }
    }

    /// Skip to another card without answering. Ignored while an advance
    /// is pending, so the scheduled change stays the only one.
    pub fn next_card(&mut self) -> bool {
        if self.feedback_until.is_some() {
            return false;
        }
        self.current = self.pick_next();
        true
    }

    /// Uniform draw over the deck, rejecting the current index. A deck of
    /// one card always stays on it.
    fn pick_next(&mut self) -> usize {
        if self.entries.len() <= 1 {
            return 0;
        }
        loop {
            let idx = self.rng.random_range(0..self.entries.len());
            if idx != self.current {
                return idx;
            }
        }
    }
}
