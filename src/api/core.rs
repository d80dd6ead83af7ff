//! WASM exports for the lyric editor
//!
//! Every function here is safe to call on each keystroke and never throws:
//! malformed input is logged and scored as empty.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize_or_default, serialize};
use crate::engine::{BlockInput, SyllableEngine};
use crate::layout::{measure_container, ClusterConfig};
use crate::models::{Lyric, Song, SongScore};
use crate::syllables::{count_line, count_syllables};
use crate::text::split_markup_lines;
use crate::{wasm_log, wasm_warn};

fn count_to_js(count: Option<u32>) -> JsValue {
    count.map_or(JsValue::NULL, JsValue::from)
}

/// Syllables in one word (0 for an empty word)
#[wasm_bindgen(js_name = countSyllables)]
pub fn count_word_syllables(word: &str) -> u32 {
    count_syllables(word)
}

/// Syllables in one plain-text line, or `null` if the line is blank
#[wasm_bindgen(js_name = countLine)]
pub fn count_plain_line(text: &str) -> JsValue {
    count_to_js(count_line(text))
}

/// Counts for plain-text lines (the mobile editor's line array)
#[wasm_bindgen(js_name = countLines)]
pub fn count_plain_lines(lines: Vec<String>) -> js_sys::Array {
    lines
        .iter()
        .map(|line| count_to_js(count_line(line)))
        .collect()
}

/// Score explicit lyric records: `[{ id, html }]` (or `{ id, text }`)
#[wasm_bindgen(js_name = scoreLines)]
pub fn score_lines(lines: JsValue) -> JsValue {
    let lyrics: Vec<Lyric> = deserialize_or_default(lines, "scoreLines: invalid lyric records");
    let score = SyllableEngine::new().score_block(BlockInput::Lines(&lyrics));
    serialize(&score, "scoreLines: failed to serialize result")
}

/// Sum of all line counts of explicit lyric records
#[wasm_bindgen(js_name = totalSyllables)]
pub fn total_syllables(lines: JsValue) -> u32 {
    let lyrics: Vec<Lyric> = deserialize_or_default(lines, "totalSyllables: invalid lyric records");
    SyllableEngine::new().total(BlockInput::Lines(&lyrics))
}

/// Score multi-line plain text, one line per `\n`
#[wasm_bindgen(js_name = scoreText)]
pub fn score_text(text: &str) -> JsValue {
    let score = SyllableEngine::new().score_block(BlockInput::PlainText(text));
    serialize(&score, "scoreText: failed to serialize result")
}

/// Score a contentEditable block's `innerHTML`, one line per `<div>`/`<p>`
#[wasm_bindgen(js_name = scoreMarkup)]
pub fn score_markup(html: &str) -> JsValue {
    let score = SyllableEngine::new().score_block(BlockInput::Markup(html));
    serialize(&score, "scoreMarkup: failed to serialize result")
}

/// Split a contentEditable block's `innerHTML` into `{ id, html }` records
///
/// Each record takes its block's `data-lyric-id`; lines without one get a
/// positional id (`line-0`, `line-1`, ...).
#[wasm_bindgen(js_name = splitMarkupLines)]
pub fn split_markup_records(html: &str) -> JsValue {
    serialize(&markup_records(html), "splitMarkupLines: failed to serialize result")
}

/// Rust-side implementation of `splitMarkupLines`
pub fn markup_records(html: &str) -> Vec<Lyric> {
    split_markup_lines(html)
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let id = line.id.unwrap_or_else(|| format!("line-{}", index));
            Lyric::new(id, line.html)
        })
        .collect()
}

/// Score the visual (soft-wrapped) lines of a laid-out container
///
/// Call after layout has settled. Returns `null` when the container has no
/// rendered words or cannot be measured. `config` is an optional partial
/// `{ line_height_ratio, font_size_ratio, fallback_tolerance }`.
#[wasm_bindgen(js_name = scoreContainer)]
pub fn score_container(container: &web_sys::Element, config: JsValue) -> JsValue {
    let config: ClusterConfig = deserialize_or_default(config, "scoreContainer: invalid config");

    let block = match measure_container(container) {
        Ok(block) => block,
        Err(e) => {
            wasm_warn!("scoreContainer: {}", e);
            return JsValue::NULL;
        }
    };

    match SyllableEngine::with_config(config).score_rendered(&block) {
        Some(score) => {
            wasm_log!("scoreContainer: {} visual lines", score.lines.len());
            serialize(&score, "scoreContainer: failed to serialize result")
        }
        None => JsValue::NULL,
    }
}

/// Per-section and total counts for a whole song document
#[wasm_bindgen(js_name = scoreSong)]
pub fn score_song(song: JsValue) -> JsValue {
    let song: Song = deserialize_or_default(song, "scoreSong: invalid song");
    let score = SyllableEngine::new().score_song(&song);
    serialize(&score, "scoreSong: failed to serialize result")
}

/// JSON in, JSON out variant of `scoreSong` (for workers and tests)
#[wasm_bindgen(js_name = scoreSongJson)]
pub fn score_song_json(json: &str) -> String {
    score_song_json_str(json)
}

/// Rust-side implementation of `scoreSongJson`
pub fn score_song_json_str(json: &str) -> String {
    let song: Song = serde_json::from_str(json).unwrap_or_else(|e| {
        log::warn!("scoreSongJson: invalid song JSON ({}), treating as empty", e);
        Song::default()
    });
    let score = SyllableEngine::new().score_song(&song);
    serde_json::to_string(&score).unwrap_or_else(|e| {
        log::error!("scoreSongJson: failed to serialize result: {}", e);
        serde_json::to_string(&SongScore::default()).unwrap_or_default()
    })
}
