//! Splitting content blocks into line records
//!
//! Two text-based shapes reach the engine besides explicit lyric records:
//! the mobile editor's multi-line plain string, and the web editor's
//! contentEditable `innerHTML`, where the browser wraps each line in a
//! `<div>` (or `<p>`) and leaves `<div><br></div>` for blank lines.

use super::markup::{is_void, tokenize, MarkupToken, TagKind};
use super::normalize::{decode_entities, normalize};

/// Attribute the web editor stamps on each line block
const LYRIC_ID_ATTR: &str = "data-lyric-id";

/// One line of a contentEditable block
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupLine {
    /// The block's `data-lyric-id`, if it carried one
    pub id: Option<String>,

    /// Inner markup of the line
    pub html: String,
}

impl MarkupLine {
    fn loose(html: String) -> Self {
        Self { id: None, html }
    }
}

/// Plain text split on newlines, one entry per line
///
/// Mirrors `text.split('\n')`: an empty string is one empty line and a
/// trailing newline yields a trailing empty line. A `\r` before the newline
/// is dropped.
pub fn split_plain_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

fn is_line_block(name: &str) -> bool {
    matches!(name, "div" | "p")
}

/// Inner markup of a line block; a lone `<br>` placeholder means empty
fn block_line(id: Option<String>, inner: &str) -> MarkupLine {
    let compact: String = inner.chars().filter(|c| !c.is_whitespace()).collect();
    let html = if compact.eq_ignore_ascii_case("<br>") || compact.eq_ignore_ascii_case("<br/>") {
        String::new()
    } else {
        inner.to_string()
    };
    MarkupLine { id, html }
}

/// Push pending top-level markup as its own line if it renders any text
fn flush_loose(loose: &mut String, lines: &mut Vec<MarkupLine>) {
    if !normalize(loose).trim().is_empty() {
        lines.push(MarkupLine::loose(loose.clone()));
    }
    loose.clear();
}

/// Value of attribute `wanted` in a start tag such as `<div class=x data-a="1">`
///
/// Names compare case-insensitively; values may be double-quoted,
/// single-quoted or bare, and have their entities resolved.
pub fn attribute_value(tag: &str, wanted: &str) -> Option<String> {
    let body = tag.strip_prefix('<').unwrap_or(tag);
    let mut rest = body.trim_start_matches(|c: char| !c.is_whitespace() && c != '>' && c != '/');

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '/');
        if rest.is_empty() || rest.starts_with('>') {
            return None;
        }

        let name_len = rest
            .find(|c: char| c.is_whitespace() || matches!(c, '=' | '>' | '/'))
            .unwrap_or(rest.len());
        let name = &rest[..name_len];
        rest = rest[name_len..].trim_start();

        let mut value = None;
        if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            let (raw, remaining) = match after_eq.chars().next() {
                Some(quote @ ('"' | '\'')) => {
                    let inner = &after_eq[1..];
                    let close = inner.find(quote).unwrap_or(inner.len());
                    (&inner[..close], inner.get(close + 1..).unwrap_or(""))
                }
                _ => {
                    let end = after_eq
                        .find(|c: char| c.is_whitespace() || c == '>')
                        .unwrap_or(after_eq.len());
                    after_eq.split_at(end)
                }
            };
            value = Some(raw);
            rest = remaining;
        }

        if name.eq_ignore_ascii_case(wanted) {
            return value.map(|raw| decode_entities(raw).into_owned());
        }
    }
}

fn lyric_id(tag: &str) -> Option<String> {
    attribute_value(tag, LYRIC_ID_ATTR).filter(|id| !id.trim().is_empty())
}

/// Split a contentEditable block into per-line markup fragments
///
/// Every top-level `<div>`/`<p>` becomes one line. Text typed before the
/// first block (the browser leaves the first line bare) becomes a line of
/// its own, as does each top-level run ended by a `<br>`. A block that
/// renders no text at all yields no lines. Block lines carry the block's
/// `data-lyric-id`; loose lines have no id.
pub fn split_markup_lines(html: &str) -> Vec<MarkupLine> {
    if normalize(html).trim().is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut loose = String::new();
    // Id and byte offset where the open block's inner markup starts
    let mut block: Option<(Option<String>, usize)> = None;
    let mut depth = 0usize;

    for token in tokenize(html) {
        match (block.is_some(), token) {
            (true, MarkupToken::Tag { name, kind, start, .. }) => match kind {
                TagKind::Open if !is_void(&name) => depth += 1,
                TagKind::Close => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        if let Some((id, inner_start)) = block.take() {
                            lines.push(block_line(id, &html[inner_start..start]));
                        }
                    }
                }
                _ => {}
            },
            (true, _) => {}
            (false, MarkupToken::Tag { name, kind, start, end }) => match kind {
                TagKind::Open if is_line_block(&name) => {
                    flush_loose(&mut loose, &mut lines);
                    block = Some((lyric_id(&html[start..end]), end));
                    depth = 1;
                }
                TagKind::Open | TagKind::SelfClosing if name == "br" => {
                    flush_loose(&mut loose, &mut lines);
                }
                _ => loose.push_str(&html[start..end]),
            },
            (false, MarkupToken::Text(text)) => loose.push_str(text),
            (false, MarkupToken::RawText(_) | MarkupToken::Comment) => {}
        }
    }

    if let Some((id, inner_start)) = block {
        lines.push(block_line(id, &html[inner_start..]));
    }
    flush_loose(&mut loose, &mut lines);

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn htmls(lines: Vec<MarkupLine>) -> Vec<String> {
        lines.into_iter().map(|line| line.html).collect()
    }

    #[test]
    fn test_plain_lines() {
        assert_eq!(split_plain_lines("one\ntwo\r\n"), vec!["one", "two", ""]);
        assert_eq!(split_plain_lines(""), vec![""]);
    }

    #[test]
    fn test_div_per_line() {
        let lines = htmls(split_markup_lines("<div>first <b>line</b></div><div><br></div><div>third</div>"));
        assert_eq!(lines, vec!["first <b>line</b>", "", "third"]);
    }

    #[test]
    fn test_bare_first_line() {
        let lines = htmls(split_markup_lines("opening words<div>second</div>"));
        assert_eq!(lines, vec!["opening words", "second"]);
    }

    #[test]
    fn test_top_level_breaks_split_loose_text() {
        let lines = htmls(split_markup_lines("one<br>two<br>"));
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_nested_blocks_stay_in_one_line() {
        let lines = htmls(split_markup_lines("<div>a <div>b</div> c</div><p>d</p>"));
        assert_eq!(lines, vec!["a <div>b</div> c", "d"]);
    }

    #[test]
    fn test_unclosed_block_runs_to_end() {
        assert_eq!(htmls(split_markup_lines("<div>never closed")), vec!["never closed"]);
    }

    #[test]
    fn test_blank_block_has_no_lines() {
        assert!(split_markup_lines("<div><br></div>").is_empty());
        assert!(split_markup_lines("   ").is_empty());
    }

    #[test]
    fn test_blocks_keep_lyric_ids() {
        let lines = split_markup_lines(
            "intro<div data-lyric-id=\"abc\">hello</div><p class=x data-lyric-id='d&amp;e'><br></p><div>no id</div>",
        );
        let ids: Vec<Option<&str>> = lines.iter().map(|line| line.id.as_deref()).collect();
        assert_eq!(ids, vec![None, Some("abc"), Some("d&e"), None]);
        assert_eq!(lines[1].html, "hello");
        assert_eq!(lines[2].html, "");
    }

    #[test]
    fn test_attribute_value_forms() {
        assert_eq!(attribute_value("<div DATA-LYRIC-ID=a1>", "data-lyric-id").as_deref(), Some("a1"));
        assert_eq!(attribute_value("<div hidden data-x=\"1\">", "data-x").as_deref(), Some("1"));
        assert_eq!(attribute_value("<div xdata-x=\"1\">", "data-x"), None);
        assert_eq!(attribute_value("<div title=\"data-x=2\">", "data-x"), None);
        assert_eq!(attribute_value("<div data-x=\"unterminated>", "data-x").as_deref(), Some("unterminated>"));
        assert_eq!(attribute_value("<br/>", "data-x"), None);
    }
}
