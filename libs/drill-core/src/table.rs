//! Plain-text reference table for a sectioned deck.

use unicode_width::UnicodeWidthStr;

use crate::types::Section;

const CELL_GAP: usize = 2;

/// Render sections as a fixed-column grid.
///
/// Each section gets its title, then rows of entries with the prompt line
/// sitting above the raw answer line, then a dotted separator. Cells are
/// padded to the widest string in the section, measured in display
/// columns so full-width characters keep the grid aligned. Stateless;
/// every call renders the whole table from scratch.
pub fn render_table(sections: &[Section], columns: usize) -> String {
    let columns = columns.max(1);
    let mut out = String::new();

    for section in sections {
        let cell = cell_width(section) + CELL_GAP;

        out.push_str(&section.title);
        out.push('\n');

        for chunk in section.items.chunks(columns) {
            push_row(&mut out, columns, cell, |i| {
                chunk.get(i).map(|e| e.prompt.as_str())
            });
            push_row(&mut out, columns, cell, |i| {
                chunk.get(i).map(|e| e.answer_display.as_str())
            });
        }

        out.push_str(&"·".repeat(cell * columns));
        out.push('\n');
    }

    out
}

/// One grid line: cells padded to `cell` display columns, missing cells
/// at the end of the final chunk left empty, trailing padding dropped.
fn push_row<'a>(out: &mut String, columns: usize, cell: usize, text: impl Fn(usize) -> Option<&'a str>) {
    let mut line = String::new();
    for i in 0..columns {
        let s = text(i).unwrap_or("");
        line.push_str(s);
        for _ in s.width()..cell {
            line.push(' ');
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn cell_width(section: &Section) -> usize {
    section
        .items
        .iter()
        .flat_map(|e| [e.prompt.width(), e.answer_display.width()])
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entry;
    use pretty_assertions::assert_eq;

    fn section(title: &str, pairs: &[(&str, &str)]) -> Section {
        let mut s = Section::new(title);
        s.items = pairs
            .iter()
            .map(|(p, a)| Entry::from_fields(p, a).unwrap())
            .collect();
        s
    }

    #[test]
    fn lays_out_rows_with_prompts_above_answers() {
        let s = section("Vowels", &[("あ", "a"), ("い", "i"), ("う", "u")]);

        // Widest string is a kana at two display columns, so cells span
        // four. The lone entry in the last row gets no trailing padding.
        let expected = "Vowels\nあ  い\na   i\nう\nu\n········\n";
        assert_eq!(render_table(&[s], 2), expected);
    }

    #[test]
    fn chunks_rows_at_the_column_count() {
        let s = section(
            "K",
            &[("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko")],
        );
        let out = render_table(&[s], 2);

        // Title, three prompt/answer row pairs, separator.
        assert_eq!(out.lines().count(), 8);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("か"));
        assert!(lines[2].starts_with("ka"));
        assert!(lines[5].starts_with("こ"));
        assert!(lines[6].starts_with("ko"));
    }

    #[test]
    fn answer_cells_show_the_raw_field() {
        let s = section("W", &[("を", "o|wo")]);
        let out = render_table(&[s], 12);

        assert!(out.contains("o|wo"));
    }

    #[test]
    fn cells_align_on_display_width() {
        let s = section("Mixed", &[("日", "nichi"), ("あ", "a")]);
        let out = render_table(&[s], 2);
        let lines: Vec<&str> = out.lines().collect();

        // "nichi" is the widest at five columns, so the second prompt
        // starts at column seven on every row.
        assert_eq!(lines[1], "日     あ");
        assert_eq!(lines[2], "nichi  a");
    }

    #[test]
    fn each_section_gets_its_own_heading_and_separator() {
        let a = section("A", &[("あ", "a")]);
        let b = section("B", &[("い", "i")]);
        let out = render_table(&[a, b], 5);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "A");
        assert!(lines[3].chars().all(|c| c == '·'));
        assert_eq!(lines[4], "B");
        assert!(lines[7].chars().all(|c| c == '·'));
    }

    #[test]
    fn no_sections_renders_nothing() {
        assert_eq!(render_table(&[], 12), "");
    }

    #[test]
    fn rows_never_carry_trailing_whitespace() {
        let s = section("K", &[("か", "ka"), ("き", "ki"), ("く", "ku")]);
        let out = render_table(&[s], 2);

        for line in out.lines() {
            assert_eq!(line, line.trim_end());
        }
    }
}
