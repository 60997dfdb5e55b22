//! Deck text parser.
//!
//! # Format
//! ```text
//! # Vowels
//! "あ","a"
//! "を","o|wo"
//! kana: "ん", romaji: "n"
//! ```
//!
//! Lines starting with `#` open a new section unless the remaining text is
//! empty or made of `=` signs, which marks a decorative separator. Entry
//! lines come in two shapes: the quoted pair above, or the older labeled
//! form where both fields appear as `label: "value"` anywhere in the line.
//! Anything else is skipped with a warning.

use crate::error::{DeckError, ParseWarning, Result};
use crate::types::{Entry, Section};

/// Section title for entries that appear before any header line.
pub const UNLABELED_SECTION: &str = "Unlabeled";

/// Field labels accepted by the legacy entry format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub prompt_label: String,
    pub answer_label: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            prompt_label: "kana".to_string(),
            answer_label: "romaji".to_string(),
        }
    }
}

/// Everything produced by one pass over a deck file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDeck {
    /// Every recognized entry in file order, ignoring sections.
    pub entries: Vec<Entry>,
    /// The same entries grouped under their nearest preceding header.
    pub sections: Vec<Section>,
    /// Skipped lines, in file order.
    pub warnings: Vec<ParseWarning>,
}

/// Parse deck text into the flat quiz list and the sectioned table view.
///
/// Both views are built in the same pass, so they always agree on which
/// lines were recognized. Sections that end up with no entries are dropped.
/// Fails only when the whole deck yields no entry at all.
pub fn parse_deck(text: &str, options: &ParseOptions) -> Result<ParsedDeck> {
    let mut entries = Vec::new();
    let mut sections = Vec::new();
    let mut warnings = Vec::new();
    let mut current = Section::new(UNLABELED_SECTION);

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        match classify_line(line, options) {
            LineKind::Blank | LineKind::Separator => {}
            LineKind::Header(title) => {
                let finished = std::mem::replace(&mut current, Section::new(title));
                if !finished.items.is_empty() {
                    sections.push(finished);
                }
            }
            LineKind::Entry(entry) => {
                current.items.push(entry.clone());
                entries.push(entry);
            }
            LineKind::Invalid => warnings.push(ParseWarning {
                line: idx + 1,
                content: line.to_string(),
            }),
        }
    }

    if !current.items.is_empty() {
        sections.push(current);
    }

    if entries.is_empty() {
        return Err(DeckError::EmptyDeck);
    }

    Ok(ParsedDeck {
        entries,
        sections,
        warnings,
    })
}

#[derive(Debug)]
enum LineKind<'a> {
    Blank,
    /// `#` line with no title text, or a title made of `=` signs.
    Separator,
    Header(&'a str),
    Entry(Entry),
    Invalid,
}

fn classify_line<'a>(line: &'a str, options: &ParseOptions) -> LineKind<'a> {
    if line.is_empty() {
        return LineKind::Blank;
    }

    if line.starts_with('#') {
        let title = line.trim_start_matches('#').trim();
        if title.is_empty() || title.chars().all(|c| c == '=') {
            return LineKind::Separator;
        }
        return LineKind::Header(title);
    }

    match parse_entry_line(line, options) {
        Some(entry) => LineKind::Entry(entry),
        None => LineKind::Invalid,
    }
}

/// The two entry formats, tried in fixed precedence order. A line that
/// matches the quoted shape but fails field validation is invalid outright,
/// not retried as a labeled line.
fn parse_entry_line(line: &str, options: &ParseOptions) -> Option<Entry> {
    let (prompt, answers) = quoted_pair(line).or_else(|| labeled_pair(line, options))?;
    Entry::from_fields(prompt, answers)
}

/// Primary format: `"prompt","answers"`, spanning the whole line.
fn quoted_pair(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('"')?;
    let (prompt, rest) = take_quoted(rest)?;
    let rest = rest.trim_start().strip_prefix(',')?;
    let rest = rest.trim_start().strip_prefix('"')?;
    let (answers, rest) = take_quoted(rest)?;
    rest.trim().is_empty().then_some((prompt, answers))
}

/// Legacy format: both `label: "value"` fields somewhere in the line, in
/// either order.
fn labeled_pair<'a>(line: &'a str, options: &ParseOptions) -> Option<(&'a str, &'a str)> {
    let prompt = labeled_quote(line, &options.prompt_label)?;
    let answers = labeled_quote(line, &options.answer_label)?;
    Some((prompt, answers))
}

/// First `label: "value"` occurrence in the line, allowing whitespace
/// around the colon. The value must be non-empty and quote-free.
fn labeled_quote<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    if label.is_empty() {
        return None;
    }
    let mut rest = line;
    while let Some(pos) = rest.find(label) {
        let tail = rest[pos + label.len()..].trim_start();
        if let Some(tail) = tail.strip_prefix(':') {
            if let Some(tail) = tail.trim_start().strip_prefix('"') {
                if let Some((value, _)) = take_quoted(tail) {
                    return Some(value);
                }
            }
        }
        rest = &rest[pos + label.len()..];
    }
    None
}

/// Split a non-empty run of characters off at the closing quote.
fn take_quoted(s: &str) -> Option<(&str, &str)> {
    let end = s.find('"')?;
    if end == 0 {
        return None;
    }
    Some((&s[..end], &s[end + 1..]))
}
