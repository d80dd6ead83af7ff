//! Per-line syllable totals

use lazy_static::lazy_static;
use regex::Regex;

use super::heuristic::count_syllables;

lazy_static! {
    /// Whitespace and hyphens separate words ("well-known" is two)
    static ref WORD_SEPARATOR: Regex = Regex::new(r"[\s-]+").unwrap();

    /// Everything but ASCII letters and apostrophes is dropped from a token
    static ref NON_WORD_CHAR: Regex = Regex::new(r"[^a-zA-Z']").unwrap();
}

/// Word tokens of a plain-text line, as they will be scored
///
/// Tokens are cleaned down to letters and apostrophes; a token that cleans to
/// nothing (punctuation, digits) is kept as an empty string and scores 0.
pub fn tokenize_line(line: &str) -> Vec<String> {
    WORD_SEPARATOR
        .split(line.trim())
        .filter(|word| !word.is_empty())
        .map(|word| NON_WORD_CHAR.replace_all(word, "").into_owned())
        .collect()
}

/// Syllables in one plain-text line, or `None` if the line is blank
pub fn count_line(line: &str) -> Option<u32> {
    if line.trim().is_empty() {
        return None;
    }

    Some(tokenize_line(line).iter().map(|token| count_syllables(token)).sum())
}
