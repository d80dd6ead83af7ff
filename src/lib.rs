//! Lyriq Syllable Engine WASM Module
//!
//! Live syllable counts for the Lyriq songwriting editor: a heuristic English
//! syllable counter, markup normalization, and line segmentation for explicit
//! line records, plain text, contentEditable markup, and soft-wrapped visual
//! lines measured from the DOM.

pub mod models;
pub mod text;
pub mod syllables;
pub mod layout;
pub mod engine;
pub mod api;

// Re-export commonly used types
pub use engine::{score_line, score_plain_line, BlockInput, SyllableEngine};
pub use models::*;
pub use syllables::{count_line, count_syllables};
pub use text::normalize;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Lyriq syllable engine WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("logger already initialized: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
