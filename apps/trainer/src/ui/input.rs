//! Key-to-action mapping for both screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What one key press asks the quiz screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Insert(char),
    Backspace,
    Submit,
    NextCard,
    Hint,
    ShowTable,
    Quit,
    Ignore,
}

pub fn quiz_action(key: &KeyEvent) -> QuizAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => QuizAction::Quit,
            KeyCode::Char('n') => QuizAction::NextCard,
            KeyCode::Char('r') => QuizAction::Hint,
            KeyCode::Char('t') => QuizAction::ShowTable,
            _ => QuizAction::Ignore,
        };
    }
    match key.code {
        KeyCode::Enter => QuizAction::Submit,
        KeyCode::Esc => QuizAction::Quit,
        KeyCode::Backspace => QuizAction::Backspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => QuizAction::Insert(c),
        _ => QuizAction::Ignore,
    }
}

/// What one key press asks the table screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Close,
    Quit,
    Ignore,
}

pub fn table_action(key: &KeyEvent) -> TableAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => TableAction::Quit,
            KeyCode::Char('t') => TableAction::Close,
            _ => TableAction::Ignore,
        };
    }
    match key.code {
        KeyCode::Up => TableAction::LineUp,
        KeyCode::Down => TableAction::LineDown,
        KeyCode::PageUp => TableAction::PageUp,
        KeyCode::PageDown => TableAction::PageDown,
        KeyCode::Esc | KeyCode::Char('q') => TableAction::Close,
        _ => TableAction::Ignore,
    }
}
