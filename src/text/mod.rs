//! Text handling for lyric content
//!
//! ## Modules
//!
//! - `markup`: forgiving tokenizer for contentEditable HTML fragments
//! - `normalize`: markup to plain rendered text
//! - `segment`: splitting plain-text and markup blocks into lines

pub mod markup;
pub mod normalize;
pub mod segment;

pub use normalize::normalize;
pub use segment::{split_markup_lines, split_plain_lines, MarkupLine};
