//! Forgiving HTML fragment tokenizer
//!
//! Lyric lines from the web editor are contentEditable `innerHTML` fragments:
//! mostly text with `<b>`, `<i>`, `<u>`, `<strike>`, `<br>` and the `<div>`
//! wrappers the browser inserts per line. This scanner splits such a fragment
//! into text runs and tags without building a tree. It never fails; anything
//! it cannot make sense of is either kept as text or dropped.

/// Whether a tag opens, closes, or is written self-closing (`<br/>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Open,
    Close,
    SelfClosing,
}

/// One token of a markup fragment
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupToken<'a> {
    /// Character data, entities still encoded
    Text(&'a str),

    /// A start or end tag. `start..end` is the byte span of the whole tag.
    Tag {
        name: String,
        kind: TagKind,
        start: usize,
        end: usize,
    },

    /// Body of a `<script>` or `<style>` element (never rendered)
    RawText(&'a str),

    /// Comment, doctype or processing instruction
    Comment,
}

/// Elements that never have content or an end tag
pub fn is_void(name: &str) -> bool {
    matches!(
        name,
        "br" | "wbr" | "img" | "hr" | "input" | "meta" | "link" | "area" | "base" | "col" | "embed" | "source" | "track"
    )
}

fn is_raw_text(name: &str) -> bool {
    matches!(name, "script" | "style")
}

/// A `<` only starts markup when followed by one of these (HTML tokenizer rule)
fn starts_markup(next: Option<&u8>) -> bool {
    matches!(next, Some(b) if b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?'))
}

/// Split a fragment into tokens, in document order
pub fn tokenize(html: &str) -> Vec<MarkupToken<'_>> {
    let bytes = html.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut text_start = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'<' || !starts_markup(bytes.get(pos + 1)) {
            pos += 1;
            continue;
        }

        if text_start < pos {
            tokens.push(MarkupToken::Text(&html[text_start..pos]));
        }

        if html[pos..].starts_with("<!--") {
            let end = html[pos + 4..]
                .find("-->")
                .map_or(bytes.len(), |offset| pos + 4 + offset + 3);
            tokens.push(MarkupToken::Comment);
            pos = end;
            text_start = end;
            continue;
        }

        // Unterminated tag at end of input: the browser drops it, so do we
        let Some(close) = find_tag_end(bytes, pos + 1) else {
            text_start = bytes.len();
            break;
        };

        let end = close + 1;
        let token = parse_tag(&html[pos + 1..close], pos, end);
        pos = end;
        text_start = end;

        let Some(token) = token else {
            continue;
        };

        let raw_name = match &token {
            MarkupToken::Tag { name, kind: TagKind::Open, .. } if is_raw_text(name) => Some(name.clone()),
            _ => None,
        };
        tokens.push(token);

        if let Some(name) = raw_name {
            let body_end = find_raw_text_end(html, pos, &name);
            if body_end > pos {
                tokens.push(MarkupToken::RawText(&html[pos..body_end]));
            }
            pos = body_end;
            text_start = body_end;
        }
    }

    if text_start < bytes.len() {
        tokens.push(MarkupToken::Text(&html[text_start..]));
    }

    tokens
}

/// Index of the `>` closing a tag that starts before `from`, skipping quoted
/// attribute values
fn find_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (offset, &b) in bytes[from..].iter().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(from + offset),
            None => {}
        }
    }
    None
}

/// Start of the matching `</name` for a raw-text element, or end of input
fn find_raw_text_end(html: &str, from: usize, name: &str) -> usize {
    let needle = format!("</{}", name);
    // ASCII lowercasing keeps byte offsets intact
    html[from..]
        .to_ascii_lowercase()
        .find(&needle)
        .map_or(html.len(), |offset| from + offset)
}

/// Interpret the text between `<` and `>`
fn parse_tag(inner: &str, start: usize, end: usize) -> Option<MarkupToken<'static>> {
    if inner.starts_with('!') || inner.starts_with('?') {
        return Some(MarkupToken::Comment);
    }

    let (closing, body) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };

    let name: String = body
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | ':'))
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if name.is_empty() {
        return None;
    }

    let kind = if closing {
        TagKind::Close
    } else if body.trim_end().ends_with('/') {
        TagKind::SelfClosing
    } else {
        TagKind::Open
    };

    Some(MarkupToken::Tag { name, kind, start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_names(html: &str) -> Vec<(String, TagKind)> {
        tokenize(html)
            .into_iter()
            .filter_map(|token| match token {
                MarkupToken::Tag { name, kind, .. } => Some((name, kind)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_text_and_tags() {
        let tokens = tokenize("<b>hello</b> world");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1], MarkupToken::Text("hello"));
        assert_eq!(tokens[3], MarkupToken::Text(" world"));
    }

    #[test]
    fn test_tag_spans() {
        let html = "ab<DIV class=\"x\">c</div>";
        let tokens = tokenize(html);
        match &tokens[1] {
            MarkupToken::Tag { name, kind, start, end } => {
                assert_eq!(name, "div");
                assert_eq!(*kind, TagKind::Open);
                assert_eq!(&html[*start..*end], "<DIV class=\"x\">");
            }
            other => panic!("expected tag, got {:?}", other),
        }
    }

    #[test]
    fn test_lone_angle_bracket_is_text() {
        assert_eq!(tokenize("a < b"), vec![MarkupToken::Text("a < b")]);
        assert_eq!(tokenize("3<4"), vec![MarkupToken::Text("3<4")]);
    }

    #[test]
    fn test_unterminated_tag_is_dropped() {
        assert_eq!(tokenize("hello <b"), vec![MarkupToken::Text("hello ")]);
    }

    #[test]
    fn test_quoted_angle_bracket_inside_attribute() {
        let names = tag_names("<span title=\"a>b\">x</span>");
        assert_eq!(names, vec![("span".to_string(), TagKind::Open), ("span".to_string(), TagKind::Close)]);
    }

    #[test]
    fn test_self_closing_and_comments() {
        let tokens = tokenize("a<br/>b<!-- note -->c");
        assert_eq!(tokens[2], MarkupToken::Text("b"));
        assert_eq!(tokens[3], MarkupToken::Comment);
        assert_eq!(tag_names("<br/>"), vec![("br".to_string(), TagKind::SelfClosing)]);
    }

    #[test]
    fn test_script_body_is_raw() {
        let tokens = tokenize("x<script>if (a < b) {}</SCRIPT>y");
        assert!(tokens.contains(&MarkupToken::RawText("if (a < b) {}")));
        assert_eq!(tokens.last(), Some(&MarkupToken::Text("y")));
    }

    #[test]
    fn test_multibyte_text_survives() {
        let tokens = tokenize("café <i>naïve</i>");
        assert_eq!(tokens[0], MarkupToken::Text("café "));
        assert_eq!(tokens[2], MarkupToken::Text("naïve"));
    }
}
