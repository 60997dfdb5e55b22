//! Screen drawing with crossterm.
//!
//! Fixed row layout, full redraw per frame. The caller batches a frame
//! into one queue and flushes once.

use std::io::Write;

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use unicode_width::UnicodeWidthStr;

use super::Feedback;

const TITLE_ROW: u16 = 0;
const PROMPT_ROW: u16 = 2;
const FEEDBACK_ROW: u16 = 4;
const SCORE_ROW: u16 = 5;
const INPUT_ROW: u16 = 7;
const HELP_ROW: u16 = 9;

const INPUT_PROMPT: &str = "> ";
const QUIZ_HELP: &str = "Enter submit | Ctrl+N next | Ctrl+R hint | Ctrl+T table | Esc quit";
const TABLE_HELP: &str = "Up/Down/PgUp/PgDn scroll | Esc close";

pub fn draw_quiz(
    out: &mut impl Write,
    prompt: &str,
    feedback: &Feedback,
    score: (u32, u32),
    buffer: &str,
    selected: bool,
) -> std::io::Result<()> {
    queue!(out, Clear(ClearType::All), cursor::Hide)?;

    queue!(
        out,
        cursor::MoveTo(0, TITLE_ROW),
        SetForegroundColor(Color::DarkGrey),
        Print("mojidrill"),
        ResetColor
    )?;

    queue!(
        out,
        cursor::MoveTo(0, PROMPT_ROW),
        SetAttribute(Attribute::Bold),
        Print(prompt),
        SetAttribute(Attribute::Reset)
    )?;

    let (text, color) = feedback_line(feedback);
    queue!(
        out,
        cursor::MoveTo(0, FEEDBACK_ROW),
        SetForegroundColor(color),
        Print(text),
        ResetColor
    )?;

    queue!(
        out,
        cursor::MoveTo(0, SCORE_ROW),
        Print(format!("Score: {}/{}", score.0, score.1))
    )?;

    queue!(out, cursor::MoveTo(0, INPUT_ROW), Print(INPUT_PROMPT))?;
    if selected {
        // Retained wrong answer, shown as a selection: the next typed
        // character replaces it wholesale.
        queue!(
            out,
            SetAttribute(Attribute::Reverse),
            Print(buffer),
            SetAttribute(Attribute::Reset)
        )?;
    } else {
        queue!(out, Print(buffer))?;
    }

    queue!(
        out,
        cursor::MoveTo(0, HELP_ROW),
        SetForegroundColor(Color::DarkGrey),
        Print(QUIZ_HELP),
        ResetColor
    )?;

    let col = (INPUT_PROMPT.width() + buffer.width()).min(u16::MAX as usize) as u16;
    queue!(out, cursor::MoveTo(col, INPUT_ROW), cursor::Show)?;
    out.flush()
}

fn feedback_line(feedback: &Feedback) -> (String, Color) {
    match feedback {
        Feedback::None => (String::new(), Color::Reset),
        Feedback::Correct => ("Correct!".to_string(), Color::Green),
        Feedback::TryAgain => ("Try again".to_string(), Color::Red),
        Feedback::Hint(text) => (format!("Hint: {text}"), Color::Yellow),
        Feedback::Notice(text) => (text.clone(), Color::DarkGrey),
    }
}

pub fn draw_table(out: &mut impl Write, lines: &[String], scroll: usize) -> std::io::Result<()> {
    let (_, rows) = terminal::size()?;
    let visible = rows.saturating_sub(2) as usize;

    queue!(out, Clear(ClearType::All), cursor::Hide)?;
    for (row, line) in lines.iter().skip(scroll).take(visible).enumerate() {
        queue!(out, cursor::MoveTo(0, row as u16), Print(line))?;
    }
    queue!(
        out,
        cursor::MoveTo(0, rows.saturating_sub(1)),
        SetForegroundColor(Color::DarkGrey),
        Print(TABLE_HELP),
        ResetColor
    )?;
    out.flush()
}

/// Body rows the table screen can show at the current terminal size.
pub fn table_page_size() -> std::io::Result<usize> {
    let (_, rows) = terminal::size()?;
    Ok(rows.saturating_sub(2) as usize)
}

/// Whether every table line fits the current terminal width.
pub fn table_fits(lines: &[String]) -> std::io::Result<bool> {
    let (cols, _) = terminal::size()?;
    let widest = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    Ok(widest <= cols as usize)
}
