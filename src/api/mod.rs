//! Lyriq syllable engine WASM API
//!
//! JavaScript-facing entry points for the lyric editor's syllable gutter.
//!
//! # Module Structure
//!
//! - `helpers`: console logging and the serde bridge (never throws)
//! - `core`: the exported scoring functions

pub mod helpers;
pub mod core;

pub use core::*;
