//! Heuristic English syllable counter
//!
//! Counts vowel groups after removing common silent endings. It is not a
//! phonetic counter, but it is deterministic: the lyric gutter shows exactly
//! what these rules produce, so they must not be "improved" casually.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Silent `-es`/`-ed`, or a silent final `e`, after a non-vowel.
    /// The non-vowel is removed together with the ending.
    static ref SILENT_ENDING: Regex = Regex::new(r"(?:[^aeiouy]e[sd]|[^aeiouy]e)$").unwrap();

    /// A leading `y` is a consonant
    static ref LEADING_Y: Regex = Regex::new(r"^y").unwrap();

    /// One syllable nucleus per match
    static ref VOWEL_GROUP: Regex = Regex::new(r"[aeiouy]{1,2}").unwrap();
}

const VOWELS: &str = "aeiouy";

/// Syllables in one cleaned word token
///
/// Returns 0 only for an empty token, otherwise at least 1.
///
/// # Examples
/// - "cat" -> 1 (three letters or fewer is always one)
/// - "broke" -> 1 ("ke" is a silent ending)
/// - "little" -> 2 (final "le" after a consonant is its own syllable)
pub fn count_syllables(word: &str) -> u32 {
    let word = word.trim().to_lowercase();
    let length = word.chars().count();

    if length == 0 {
        return 0;
    }
    if length <= 3 {
        return 1;
    }

    let stem = SILENT_ENDING.replace(&word, "");
    let stem = LEADING_Y.replace(&stem, "");

    let groups = VOWEL_GROUP.find_iter(&stem).count() as u32;
    if groups == 0 {
        return 1;
    }

    if has_consonant_le_ending(&word) {
        return groups + 1;
    }

    groups
}

/// Word ends in "le" and the letter before it is a consonant other than `l`
/// ("table", "little", but not "bale" or "belle")
fn has_consonant_le_ending(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 2 || !word.ends_with("le") {
        return false;
    }
    let before = chars[chars.len() - 3];
    !VOWELS.contains(before) && before != 'l'
}
