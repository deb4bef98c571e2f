//! Break-marker normalization and emphasis splitting.

use crate::style::TextStyle;

/// Replace every angle-bracket-delimited token with a newline.
///
/// This is the only markup the engine interprets: `<br>` and friends
/// become explicit line breaks, literal newlines pass through untouched,
/// and an unterminated `<` is kept as ordinary text.
pub fn normalize_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        let (head, tail) = rest.split_at(open);
        out.push_str(head);
        match tail.find('>') {
            Some(close) => {
                out.push('\n');
                // `close` indexes the ASCII '>' inside `tail`.
                rest = tail.get(close + 1..).unwrap_or_default();
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Partition a body around the first verbatim occurrence of `emphasis`.
///
/// Returns `(text, style)` segments in reading order. When `emphasis` is
/// empty or does not occur (case-sensitive), the whole body is a single
/// plain segment. A repeated emphasis substring splits only at its first
/// occurrence; later occurrences stay plain.
///
/// Segment texts are trimmed; wrapping later re-joins words with single
/// spaces, so trimming never loses a word.
pub fn split_emphasis(body: &str, emphasis: &str) -> Vec<(String, TextStyle)> {
    if !emphasis.is_empty() {
        if let Some(at) = body.find(emphasis) {
            let before = &body[..at];
            let after = body.get(at + emphasis.len()..).unwrap_or_default();
            return vec![
                (before.trim().to_string(), TextStyle::Plain),
                (emphasis.trim().to_string(), TextStyle::Emphasis),
                (after.trim().to_string(), TextStyle::Plain),
            ];
        }
    }
    vec![(body.trim().to_string(), TextStyle::Plain)]
}
