//! Syllable engine facade
//!
//! Turns whatever shape of content the editor has at hand into per-line
//! syllable counts. Every call is independent and side-effect free, so the
//! UI can call it on each keystroke.

use crate::layout::{visual_lines, ClusterConfig, RenderedBlock};
use crate::models::{BlockScore, LineScore, Lyric, SectionScore, Song, SongScore};
use crate::syllables::count_line;
use crate::text::{normalize, split_markup_lines, split_plain_lines};

/// Content to score, tagged by how its lines are delimited
#[derive(Debug, Clone, Copy)]
pub enum BlockInput<'a> {
    /// Line records kept by the editor (markup or plain text per record)
    Lines(&'a [Lyric]),

    /// Multi-line plain text, one line per `\n`
    PlainText(&'a str),

    /// A contentEditable block's `innerHTML`, one line per `<div>`/`<p>`
    Markup(&'a str),

    /// A measured, laid-out container whose lines may soft-wrap
    Rendered(&'a RenderedBlock),
}

/// Score one line of content; markup is stripped before counting
pub fn score_line(line_id: Option<&str>, content: &str) -> LineScore {
    score_plain_line(line_id, normalize(content))
}

/// Score one line of plain text exactly as typed
pub fn score_plain_line(line_id: Option<&str>, text: impl Into<String>) -> LineScore {
    let text = text.into();
    let count = count_line(&text);
    LineScore {
        line_id: line_id.map(str::to_string),
        text,
        count,
    }
}

/// Stateless scorer; holds only the clustering settings
#[derive(Debug, Clone, Default)]
pub struct SyllableEngine {
    config: ClusterConfig,
}

impl SyllableEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClusterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Per-line counts (and their total) for a block, in line order
    ///
    /// A rendered block with no words scores as an empty block.
    pub fn score_block(&self, input: BlockInput<'_>) -> BlockScore {
        let score = match input {
            BlockInput::Lines(lyrics) => self.score_lyrics(lyrics),
            BlockInput::PlainText(text) => BlockScore::from_lines(
                split_plain_lines(text)
                    .into_iter()
                    .map(|line| score_plain_line(None, line))
                    .collect(),
            ),
            BlockInput::Markup(html) => BlockScore::from_lines(
                split_markup_lines(html)
                    .iter()
                    .map(|line| score_line(line.id.as_deref(), &line.html))
                    .collect(),
            ),
            BlockInput::Rendered(block) => self.score_rendered(block).unwrap_or_default(),
        };

        log::debug!(
            "scored {} lines, {} syllables",
            score.lines.len(),
            score.total
        );
        score
    }

    /// Sum of all non-null line counts
    pub fn total(&self, input: BlockInput<'_>) -> u32 {
        self.score_block(input).total
    }

    /// Explicit line records: the caller's line boundaries are trusted as-is
    pub fn score_lyrics(&self, lyrics: &[Lyric]) -> BlockScore {
        BlockScore::from_lines(
            lyrics
                .iter()
                .map(|lyric| match lyric.plain_text() {
                    Some(text) => score_plain_line(Some(&lyric.id), text),
                    None => score_line(Some(&lyric.id), &lyric.html),
                })
                .collect(),
        )
    }

    /// Visual lines of a measured container, or `None` when it has no words
    pub fn score_rendered(&self, block: &RenderedBlock) -> Option<BlockScore> {
        let lines = visual_lines(block, &self.config)?;
        Some(BlockScore::from_lines(
            lines
                .into_iter()
                .map(|text| score_plain_line(None, text))
                .collect(),
        ))
    }

    /// Every section of a song, plus the song total
    pub fn score_song(&self, song: &Song) -> SongScore {
        let sections: Vec<SectionScore> = song
            .sections
            .iter()
            .map(|section| {
                let block = self.score_lyrics(&section.lyrics);
                SectionScore {
                    section_id: section.id.clone(),
                    title: section.title.clone(),
                    lines: block.lines,
                    total: block.total,
                }
            })
            .collect();

        let total = sections.iter().map(|section| section.total).sum();
        SongScore { sections, total }
    }
}
