//! Data models shared between the engine and the editor UI
//!
//! - `song`: the song/section/lyric documents the editor passes in
//! - `score`: the per-line and per-section counts handed back

pub mod score;
pub mod song;

pub use score::{BlockScore, LineScore, SectionScore, SongScore};
pub use song::{Lyric, Section, Song};
