//! Markup to plain text
//!
//! Produces what `textContent` would give for a lyric fragment: tags and
//! comments vanish, entities are resolved, `<br>` contributes nothing.

use std::borrow::Cow;

use quick_xml::escape::unescape_with;

use super::markup::{tokenize, MarkupToken};

/// Plain-text rendering of one rich-content fragment
///
/// Never fails. Malformed markup degrades to whatever text could be
/// recovered, possibly an empty string.
pub fn normalize(fragment: &str) -> String {
    if !fragment.contains('<') {
        return decode_entities(fragment).into_owned();
    }

    let mut plain = String::with_capacity(fragment.len());
    for token in tokenize(fragment) {
        if let MarkupToken::Text(text) = token {
            plain.push_str(&decode_entities(text));
        }
    }
    plain
}

/// Longest reference name looked at, `#x10FFFF` and named entities included
const MAX_REFERENCE_LEN: usize = 32;

/// Resolve character references in a text run
///
/// Each reference is decoded on its own. A bare `&` (as in "rock & roll")
/// or an unknown name stays as literal text without affecting the
/// references around it.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut decoded = String::with_capacity(text.len());
    let mut entity_buf = String::new();
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        let Some(len) = reference_len(after) else {
            decoded.push('&');
            rest = after;
            continue;
        };

        entity_buf.clear();
        entity_buf.push('&');
        entity_buf.push_str(&after[..len]);
        entity_buf.push(';');
        match unescape_with(&entity_buf, resolve_html_entity) {
            Ok(resolved) => decoded.push_str(&resolved),
            Err(e) => {
                log::debug!("keeping unknown reference {}: {:?}", entity_buf, e);
                decoded.push_str(&entity_buf);
            }
        }
        rest = &after[len + 1..];
    }

    decoded.push_str(rest);
    Cow::Owned(decoded)
}

/// Length of the reference name before `;`, if `after` starts with one
fn reference_len(after: &str) -> Option<usize> {
    let len = after.find(';')?;
    let name = &after[..len];
    let well_formed = !name.is_empty()
        && name.len() <= MAX_REFERENCE_LEN
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'#');
    well_formed.then_some(len)
}

/// Named references: the markup set plus the HTML Latin-1 letters and
/// symbols that show up in pasted lyrics
fn resolve_html_entity(name: &str) -> Option<&'static str> {
    let resolved = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        "ensp" => "\u{2002}",
        "emsp" => "\u{2003}",
        "thinsp" => "\u{2009}",
        "shy" => "\u{ad}",
        "zwj" => "\u{200d}",
        "zwnj" => "\u{200c}",

        "rsquo" => "\u{2019}",
        "lsquo" => "\u{2018}",
        "rdquo" => "\u{201d}",
        "ldquo" => "\u{201c}",
        "laquo" => "\u{ab}",
        "raquo" => "\u{bb}",
        "hellip" => "\u{2026}",
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "bull" => "\u{2022}",
        "middot" => "\u{b7}",
        "iexcl" => "\u{a1}",
        "iquest" => "\u{bf}",

        "copy" => "\u{a9}",
        "reg" => "\u{ae}",
        "trade" => "\u{2122}",
        "deg" => "\u{b0}",
        "sect" => "\u{a7}",
        "para" => "\u{b6}",
        "cent" => "\u{a2}",
        "pound" => "\u{a3}",
        "euro" => "\u{20ac}",
        "yen" => "\u{a5}",
        "times" => "\u{d7}",
        "divide" => "\u{f7}",
        "hearts" => "\u{2665}",
        "sharp" => "\u{266f}",
        "flat" => "\u{266d}",

        "agrave" => "\u{e0}",
        "aacute" => "\u{e1}",
        "acirc" => "\u{e2}",
        "atilde" => "\u{e3}",
        "auml" => "\u{e4}",
        "aring" => "\u{e5}",
        "aelig" => "\u{e6}",
        "ccedil" => "\u{e7}",
        "egrave" => "\u{e8}",
        "eacute" => "\u{e9}",
        "ecirc" => "\u{ea}",
        "euml" => "\u{eb}",
        "igrave" => "\u{ec}",
        "iacute" => "\u{ed}",
        "icirc" => "\u{ee}",
        "iuml" => "\u{ef}",
        "ntilde" => "\u{f1}",
        "ograve" => "\u{f2}",
        "oacute" => "\u{f3}",
        "ocirc" => "\u{f4}",
        "otilde" => "\u{f5}",
        "ouml" => "\u{f6}",
        "oslash" => "\u{f8}",
        "ugrave" => "\u{f9}",
        "uacute" => "\u{fa}",
        "ucirc" => "\u{fb}",
        "uuml" => "\u{fc}",
        "yacute" => "\u{fd}",
        "yuml" => "\u{ff}",
        "szlig" => "\u{df}",
        "oelig" => "\u{153}",

        "Agrave" => "\u{c0}",
        "Aacute" => "\u{c1}",
        "Acirc" => "\u{c2}",
        "Atilde" => "\u{c3}",
        "Auml" => "\u{c4}",
        "Aring" => "\u{c5}",
        "AElig" => "\u{c6}",
        "Ccedil" => "\u{c7}",
        "Egrave" => "\u{c8}",
        "Eacute" => "\u{c9}",
        "Ecirc" => "\u{ca}",
        "Euml" => "\u{cb}",
        "Igrave" => "\u{cc}",
        "Iacute" => "\u{cd}",
        "Icirc" => "\u{ce}",
        "Iuml" => "\u{cf}",
        "Ntilde" => "\u{d1}",
        "Ograve" => "\u{d2}",
        "Oacute" => "\u{d3}",
        "Ocirc" => "\u{d4}",
        "Otilde" => "\u{d5}",
        "Ouml" => "\u{d6}",
        "Oslash" => "\u{d8}",
        "Ugrave" => "\u{d9}",
        "Uacute" => "\u{da}",
        "Ucirc" => "\u{db}",
        "Uuml" => "\u{dc}",
        "Yacute" => "\u{dd}",
        "OElig" => "\u{152}",
        _ => return None,
    };
    Some(resolved)
}
