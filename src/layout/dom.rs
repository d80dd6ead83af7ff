//! Measuring a live contentEditable container
//!
//! Walks every text node under the container, measures each word with a DOM
//! `Range`, and reads the computed line height and font size. Must be called
//! after layout has settled (after paint, on resize or font change), never
//! from inside a batch of pending DOM writes.

use web_sys::{Element, Window};

use super::cluster::{FontMetrics, MeasuredWord, RenderedBlock};
use super::errors::{js_message, MeasureError, MeasureResult};

/// `NodeFilter.SHOW_TEXT`
const SHOW_TEXT: u32 = 0x4;

/// A whitespace-delimited word inside one text node
///
/// `start..end` are UTF-16 offsets, which is what `Range` expects.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSpan {
    pub start: u32,
    pub end: u32,
    pub text: String,
}

/// Split text node content into words with their UTF-16 offsets
pub fn word_spans(text: &str) -> Vec<WordSpan> {
    let mut spans = Vec::new();
    let mut offset = 0u32;
    let mut current: Option<(u32, String)> = None;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if let Some((start, word)) = current.take() {
                spans.push(WordSpan { start, end: offset, text: word });
            }
        } else {
            current.get_or_insert_with(|| (offset, String::new())).1.push(ch);
        }
        offset += ch.len_utf16() as u32;
    }

    if let Some((start, word)) = current {
        spans.push(WordSpan { start, end: offset, text: word });
    }

    spans
}

/// Parse a computed CSS length like `"24px"`; `"normal"` and other units
/// are unknown
pub fn parse_px(value: &str) -> Option<f64> {
    value
        .trim()
        .strip_suffix("px")
        .and_then(|number| number.trim().parse::<f64>().ok())
        .filter(|px| px.is_finite() && *px > 0.0)
}

/// Measure every rendered word of `container`
///
/// Word tops are relative to the container's own top, so the result does not
/// change when the page scrolls or the container moves. A word that starts a
/// text node right where the previous node's last word ended is marked as
/// continuing it, matching what `textContent` reads.
pub fn measure_container(container: &Element) -> MeasureResult<RenderedBlock> {
    let window = web_sys::window().ok_or(MeasureError::NoWindow)?;
    let document = window.document().ok_or(MeasureError::NoDocument)?;

    let origin = container.get_bounding_client_rect().top();
    let walker = document
        .create_tree_walker_with_what_to_show(container, SHOW_TEXT)
        .map_err(|e| MeasureError::dom("createTreeWalker", e))?;
    let range = document
        .create_range()
        .map_err(|e| MeasureError::dom("createRange", e))?;

    let mut words = Vec::new();
    // The last measured word touches the end of its text node
    let mut open_word = false;
    while let Some(node) = walker
        .next_node()
        .map_err(|e| MeasureError::dom("TreeWalker.nextNode", e))?
    {
        let Some(text) = node.text_content() else {
            continue;
        };
        if text.is_empty() {
            continue;
        }

        let node_len: u32 = text.chars().map(|ch| ch.len_utf16() as u32).sum();
        let glued = open_word;
        open_word = false;

        for span in word_spans(&text) {
            range
                .set_start(&node, span.start)
                .map_err(|e| MeasureError::dom("Range.setStart", e))?;
            range
                .set_end(&node, span.end)
                .map_err(|e| MeasureError::dom("Range.setEnd", e))?;

            let rect = range.get_bounding_client_rect();
            // Zero-sized: not rendered (display: none, collapsed)
            if rect.width() == 0.0 && rect.height() == 0.0 {
                open_word = false;
                continue;
            }

            open_word = span.end == node_len;
            words.push(MeasuredWord {
                joins_previous: glued && span.start == 0,
                text: span.text,
                top: rect.top() - origin,
            });
        }
    }

    Ok(RenderedBlock {
        words,
        metrics: read_metrics(&window, container),
    })
}

fn read_metrics(window: &Window, container: &Element) -> FontMetrics {
    let style = match window.get_computed_style(container) {
        Ok(Some(style)) => style,
        Ok(None) => return FontMetrics::default(),
        Err(e) => {
            log::warn!("getComputedStyle failed: {}", js_message(&e));
            return FontMetrics::default();
        }
    };

    let property = |name: &str| {
        style
            .get_property_value(name)
            .ok()
            .and_then(|value| parse_px(&value))
    };

    FontMetrics {
        line_height: property("line-height"),
        font_size: property("font-size"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_spans_offsets() {
        let spans = word_spans("  Up in\tthe ");
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Up", "in", "the"]);
        assert_eq!((spans[0].start, spans[0].end), (2, 4));
        assert_eq!((spans[2].start, spans[2].end), (8, 11));
    }

    #[test]
    fn test_word_spans_count_utf16_units() {
        // U+1F3B5 is two UTF-16 code units
        let spans = word_spans("\u{1F3B5}la la");
        assert_eq!((spans[0].start, spans[0].end), (0, 4));
        assert_eq!((spans[1].start, spans[1].end), (5, 7));
    }

    #[test]
    fn test_word_spans_nbsp_separates() {
        assert_eq!(word_spans("a\u{a0}b").len(), 2);
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("24px"), Some(24.0));
        assert_eq!(parse_px(" 17.5px "), Some(17.5));
        assert_eq!(parse_px("normal"), None);
        assert_eq!(parse_px("1.5em"), None);
        assert_eq!(parse_px("0px"), None);
        assert_eq!(parse_px(""), None);
    }
}
