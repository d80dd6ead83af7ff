//! Song document structures as the editor hands them over
//!
//! Only the parts the syllable engine reads are modelled. Everything else the
//! UI keeps on a section (audio takes, playback state) is ignored on
//! deserialization.

use serde::{Deserialize, Serialize};

/// One lyric line record
///
/// The web editor stores markup in `html`; the mobile editor stores plain
/// text in `text`, which is never parsed as markup.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Lyric {
    #[serde(default)]
    pub id: String,

    /// Rich line content
    #[serde(default)]
    pub html: String,

    /// Plain line content from the mobile editor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Lyric {
    pub fn new(id: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            html: html.into(),
            text: None,
        }
    }

    /// A mobile record holding plain text
    pub fn plain(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            html: String::new(),
            text: Some(text.into()),
        }
    }

    /// Plain text to score as-is, when the record has no markup
    pub fn plain_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|_| self.html.is_empty())
    }
}

/// A titled song section (verse, chorus, ...)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Section {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub lyrics: Vec<Lyric>,
}

/// The whole song as an ordered list of sections
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Song {
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_text_field_is_accepted() {
        let json = r#"{"id":"a","text":"hello there"}"#;
        let lyric: Lyric = serde_json::from_str(json).unwrap();
        assert_eq!(lyric.plain_text(), Some("hello there"));
        assert_eq!(lyric, Lyric::plain("a", "hello there"));
    }

    #[test]
    fn test_markup_wins_over_text() {
        let json = r#"{"id":"a","html":"<b>hi</b>","text":"hi"}"#;
        let lyric: Lyric = serde_json::from_str(json).unwrap();
        assert_eq!(lyric.plain_text(), None);
    }

    #[test]
    fn test_web_record_serializes_without_text() {
        let json = serde_json::to_string(&Lyric::new("a", "hi")).unwrap();
        assert_eq!(json, r#"{"id":"a","html":"hi"}"#);
    }

    #[test]
    fn test_unknown_section_fields_are_ignored() {
        let json = r#"{
            "sections": [{
                "id": "s1",
                "title": "Verse",
                "lyrics": [{"id": "l1", "html": "<b>hi</b>"}],
                "takes": [{"id": "t1", "url": "blob:x", "duration": 3.5}]
            }]
        }"#;
        let song: Song = serde_json::from_str(json).unwrap();
        assert_eq!(song.sections.len(), 1);
        assert_eq!(song.sections[0].lyrics[0].html, "<b>hi</b>");
    }
}
