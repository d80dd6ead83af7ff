//! Visual line reconstruction from word geometry
//!
//! A contentEditable block that soft-wraps has no markup for its wrapped
//! lines, so lines are recovered from where the words were painted: words
//! whose tops lie within a tolerance of each other form one row.

use serde::{Deserialize, Serialize};

/// A rendered word and its bounding-box top, relative to the container top
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MeasuredWord {
    pub text: String,
    pub top: f64,

    /// Continues the previous word with no whitespace between them, as when
    /// inline markup splits a word (`beau<b>tiful</b>`)
    #[serde(default)]
    pub joins_previous: bool,
}

impl MeasuredWord {
    pub fn new(text: impl Into<String>, top: f64) -> Self {
        Self { text: text.into(), top, joins_previous: false }
    }

    /// A fragment glued to the word before it
    pub fn continuation(text: impl Into<String>, top: f64) -> Self {
        Self { text: text.into(), top, joins_previous: true }
    }
}

/// Computed text metrics of the container, in pixels (`None` when unknown)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct FontMetrics {
    pub line_height: Option<f64>,
    pub font_size: Option<f64>,
}

/// Everything the clustering needs from one laid-out container
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RenderedBlock {
    /// Words in document order
    pub words: Vec<MeasuredWord>,
    #[serde(default)]
    pub metrics: FontMetrics,
}

/// Clustering tolerance settings
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct ClusterConfig {
    /// Fraction of the line height two words' tops may differ by
    pub line_height_ratio: f64,

    /// Fraction of the font size, used when the line height is unknown
    pub font_size_ratio: f64,

    /// Tolerance in pixels when neither metric is known
    pub fallback_tolerance: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            line_height_ratio: 0.3,
            font_size_ratio: 0.3,
            fallback_tolerance: 5.0,
        }
    }
}

/// A row of words sharing (roughly) one top coordinate
#[derive(Clone, Debug, PartialEq)]
pub struct VisualRow {
    /// Top of the word that started the row
    pub top: f64,
    pub words: Vec<String>,
}

impl VisualRow {
    /// Row text as one line, words joined by single spaces
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

fn usable(metric: Option<f64>) -> Option<f64> {
    metric.filter(|value| value.is_finite() && *value > 0.0)
}

/// Vertical distance within which two words count as the same row
pub fn tolerance(metrics: &FontMetrics, config: &ClusterConfig) -> f64 {
    if let Some(line_height) = usable(metrics.line_height) {
        line_height * config.line_height_ratio
    } else if let Some(font_size) = usable(metrics.font_size) {
        font_size * config.font_size_ratio
    } else {
        config.fallback_tolerance
    }
}

/// Glue word fragments back onto the word they continue
///
/// A fragment only joins when it was painted on the same row; a fragment
/// that wrapped (or sits in the next block) stays a word of its own.
pub fn merge_fragments(words: &[MeasuredWord], tolerance: f64) -> Vec<MeasuredWord> {
    let mut merged: Vec<MeasuredWord> = Vec::with_capacity(words.len());

    for word in words {
        match merged.last_mut() {
            Some(last) if word.joins_previous && (word.top - last.top).abs() <= tolerance => {
                last.text.push_str(&word.text);
            }
            _ => merged.push(MeasuredWord::new(word.text.clone(), word.top)),
        }
    }

    merged
}

/// Greedily group words into rows, then order rows top to bottom
///
/// Each word joins the first row whose representative top is within
/// `tolerance`, otherwise it starts a new row. Words keep document order
/// inside a row.
pub fn cluster_rows(words: &[MeasuredWord], tolerance: f64) -> Vec<VisualRow> {
    let mut rows: Vec<VisualRow> = Vec::new();

    for word in words {
        match rows.iter_mut().find(|row| (word.top - row.top).abs() <= tolerance) {
            Some(row) => row.words.push(word.text.clone()),
            None => rows.push(VisualRow {
                top: word.top,
                words: vec![word.text.clone()],
            }),
        }
    }

    rows.sort_by(|a, b| a.top.total_cmp(&b.top));
    rows
}

/// Text of each visual line of a rendered block, or `None` if it has no words
pub fn visual_lines(block: &RenderedBlock, config: &ClusterConfig) -> Option<Vec<String>> {
    if block.words.is_empty() {
        return None;
    }

    let tolerance = tolerance(&block.metrics, config);
    let words = merge_fragments(&block.words, tolerance);
    let rows = cluster_rows(&words, tolerance);
    log::debug!(
        "clustered {} words into {} rows (tolerance {:.2}px)",
        words.len(),
        rows.len(),
        tolerance
    );

    Some(rows.iter().map(VisualRow::text).collect())
}
