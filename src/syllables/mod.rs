//! Syllable counting
//!
//! - `heuristic`: syllables in a single cleaned word
//! - `line`: tokenizing a plain-text line and summing its words

pub mod heuristic;
pub mod line;

pub use heuristic::count_syllables;
pub use line::{count_line, tokenize_line};
