//! Result types returned to the editor's syllable gutter

use serde::{Deserialize, Serialize};

/// Syllable count for one line
///
/// `count` is `None` when the line has no content; the gutter renders that
/// as blank. `Some(0)` is a real count (e.g. a line of punctuation).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineScore {
    /// Id of the lyric record this line came from (absent for visual rows)
    pub line_id: Option<String>,

    /// Plain text that was scored
    pub text: String,

    pub count: Option<u32>,
}

/// Counts for a block of lines, in input order
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BlockScore {
    pub lines: Vec<LineScore>,

    /// Sum of all non-null counts
    pub total: u32,
}

impl BlockScore {
    pub fn from_lines(lines: Vec<LineScore>) -> Self {
        let total = lines.iter().filter_map(|line| line.count).sum();
        Self { lines, total }
    }

    /// Per-line counts without the text, in order
    pub fn counts(&self) -> Vec<Option<u32>> {
        self.lines.iter().map(|line| line.count).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Counts for one song section
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SectionScore {
    pub section_id: String,
    pub title: String,
    pub lines: Vec<LineScore>,
    pub total: u32,
}

/// Counts for a whole song
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SongScore {
    pub sections: Vec<SectionScore>,
    pub total: u32,
}
