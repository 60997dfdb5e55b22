//! Interactive terminal front end.
//!
//! One loop owns the session, the input buffer, and the screen. It polls
//! every 50 ms so the delayed advance after a correct answer fires close
//! to its deadline even when no key arrives.

mod display;
mod input;

use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use drill_core::{QuizSession, SubmitOutcome};

use input::{QuizAction, TableAction};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Feedback line contents on the quiz screen.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Feedback {
    None,
    Correct,
    TryAgain,
    Hint(String),
    Notice(String),
}

enum Screen {
    Quiz,
    Table,
}

/// Raw-mode guard. Restores the terminal on every exit path.
struct Terminal;

impl Terminal {
    fn enter() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
        Ok(Self)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the quiz until the user quits. Returns the final counters.
pub fn run_quiz(mut session: QuizSession, table: String) -> anyhow::Result<(u32, u32)> {
    let _guard = Terminal::enter()?;
    let table_lines: Vec<String> = table.lines().map(str::to_string).collect();

    let mut out = stdout();
    let mut screen = Screen::Quiz;
    let mut buffer = String::new();
    let mut select_all = false;
    let mut feedback = Feedback::None;
    let mut scroll = 0usize;
    let mut dirty = true;

    loop {
        if session.tick(Instant::now()) {
            buffer.clear();
            select_all = false;
            feedback = Feedback::None;
            dirty = true;
        }

        if dirty {
            match screen {
                Screen::Quiz => display::draw_quiz(
                    &mut out,
                    &session.current_entry().prompt,
                    &feedback,
                    session.score(),
                    &buffer,
                    select_all,
                )?,
                Screen::Table => display::draw_table(&mut out, &table_lines, scroll)?,
            }
            dirty = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match screen {
                Screen::Quiz => match input::quiz_action(&key) {
                    QuizAction::Insert(c) => {
                        if select_all {
                            buffer.clear();
                            select_all = false;
                        }
                        buffer.push(c);
                        dirty = true;
                    }
                    QuizAction::Backspace => {
                        if select_all {
                            buffer.clear();
                            select_all = false;
                        } else {
                            buffer.pop();
                        }
                        dirty = true;
                    }
                    QuizAction::Submit => match session.submit(&buffer, Instant::now()) {
                        SubmitOutcome::Correct => {
                            buffer.clear();
                            select_all = false;
                            feedback = Feedback::Correct;
                            dirty = true;
                        }
                        SubmitOutcome::Incorrect => {
                            select_all = true;
                            feedback = Feedback::TryAgain;
                            dirty = true;
                        }
                        SubmitOutcome::Discarded => {}
                    },
                    QuizAction::NextCard => {
                        if session.next_card() {
                            buffer.clear();
                            select_all = false;
                            feedback = Feedback::None;
                            dirty = true;
                        }
                    }
                    QuizAction::Hint => {
                        if session.is_ready() {
                            feedback = Feedback::Hint(session.hint().to_string());
                            dirty = true;
                        }
                    }
                    QuizAction::ShowTable => {
                        if display::table_fits(&table_lines)? {
                            screen = Screen::Table;
                            scroll = 0;
                        } else {
                            tracing::warn!(
                                "reference table is wider than the terminal, skipping table view"
                            );
                            feedback =
                                Feedback::Notice("Table does not fit this terminal".to_string());
                        }
                        dirty = true;
                    }
                    QuizAction::Quit => break,
                    QuizAction::Ignore => {}
                },
                Screen::Table => match input::table_action(&key) {
                    TableAction::LineUp => {
                        scroll = scroll.saturating_sub(1);
                        dirty = true;
                    }
                    TableAction::LineDown => {
                        scroll = clamp_scroll(scroll + 1, &table_lines)?;
                        dirty = true;
                    }
                    TableAction::PageUp => {
                        scroll = scroll.saturating_sub(display::table_page_size()?);
                        dirty = true;
                    }
                    TableAction::PageDown => {
                        scroll = clamp_scroll(scroll + display::table_page_size()?, &table_lines)?;
                        dirty = true;
                    }
                    TableAction::Close => {
                        screen = Screen::Quiz;
                        dirty = true;
                    }
                    TableAction::Quit => break,
                    TableAction::Ignore => {}
                },
            },
            Event::Paste(text) => {
                if let Screen::Quiz = screen {
                    paste_into_buffer(&mut session, &mut buffer, &mut select_all, &text);
                    dirty = true;
                }
            }
            Event::Resize(_, _) => dirty = true,
            _ => {}
        }
    }

    Ok(session.score())
}

/// Feed a bracketed paste through the buffer as one composed burst.
///
/// Line breaks inside the burst go through submit, where the composition
/// gate drops them instead of queueing a judgment. Only a later explicit
/// Enter press submits whatever the burst left in the buffer.
fn paste_into_buffer(
    session: &mut QuizSession,
    buffer: &mut String,
    select_all: &mut bool,
    text: &str,
) {
    session.begin_composition();
    if *select_all {
        buffer.clear();
        *select_all = false;
    }
    for ch in text.chars() {
        match ch {
            '\n' => {
                let _ = session.submit(buffer.as_str(), Instant::now());
            }
            '\r' => {}
            _ => buffer.push(ch),
        }
    }
    session.end_composition();
}

fn clamp_scroll(wanted: usize, lines: &[String]) -> std::io::Result<usize> {
    let max = lines.len().saturating_sub(display::table_page_size()?);
    Ok(wanted.min(max))
}
