//! Answer matching for typed responses.

use crate::types::Entry;

/// Normalize one answer for comparison: trim edges, lowercase the rest.
///
/// Applied to both deck answers at parse time and typed input at check
/// time, so the two sides always meet in the same form.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check a typed response against an entry.
///
/// Two ways to be right: echo the prompt itself (case-sensitive, so a
/// pasted 日 counts but a lowercased Latin prompt does not), or type any
/// accepted answer, compared case-insensitively after trimming.
pub fn matches_entry(entry: &Entry, typed: &str) -> bool {
    let trimmed = typed.trim();
    if trimmed == entry.prompt {
        return true;
    }
    let normalized = normalize_answer(typed);
    entry.answers.iter().any(|answer| *answer == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(prompt: &str, answers: &str) -> Entry {
        Entry::from_fields(prompt, answers).unwrap()
    }

    #[test]
    fn accepts_any_listed_answer() {
        let e = entry("日", "nichi|jitsu|hi");

        assert!(matches_entry(&e, "nichi"));
        assert!(matches_entry(&e, "jitsu"));
        assert!(matches_entry(&e, "hi"));
        assert!(!matches_entry(&e, "getsu"));
    }

    #[test]
    fn answers_ignore_case_and_edge_whitespace() {
        let e = entry("日", "nichi|jitsu|hi");

        assert!(matches_entry(&e, "NICHI"));
        assert!(matches_entry(&e, "  hi  "));
        assert!(matches_entry(&e, "\tJitsu\n"));
    }

    #[test]
    fn echoing_the_prompt_counts() {
        let e = entry("日", "nichi");

        assert!(matches_entry(&e, "日"));
        assert!(matches_entry(&e, "  日 "));
    }

    #[test]
    fn prompt_echo_is_case_sensitive() {
        let e = entry("Ka", "ka");

        assert!(matches_entry(&e, "Ka"));
        // "ka" misses the prompt but still hits the answer list.
        assert!(matches_entry(&e, "ka"));

        let no_lower = entry("Ka", "x");
        assert!(!matches_entry(&no_lower, "ka"));
    }

    #[test]
    fn interior_whitespace_is_preserved() {
        let e = entry("お茶", "o cha");

        assert!(matches_entry(&e, " O Cha "));
        assert!(!matches_entry(&e, "ocha"));
    }

    #[test]
    fn empty_input_never_matches() {
        let e = entry("あ", "a");

        assert!(!matches_entry(&e, ""));
        assert!(!matches_entry(&e, "   "));
    }
}
