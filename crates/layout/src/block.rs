//! Whole-quote layout: segments → wrapped, vertically placed lines.

use crate::style::TextStyle;
use crate::text::split_emphasis;
use crate::wrap::{wrap_words, LayoutError, TextMeasure};

/// Vertical gap between consecutive lines, on top of the font size.
pub const LINE_GAP: u32 = 5;

/// Geometry the engine lays out against.
#[derive(Debug, Copy, Clone)]
pub struct LayoutParams {
    /// Canvas width minus both horizontal margins.
    pub usable_width: u32,
    /// First line's y offset from the top of the canvas.
    pub top_margin: i32,
}

/// One wrapped line with its style and vertical position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    /// Words joined by single spaces, never wider than the usable width
    /// unless the line is a single over-long word.
    pub text: String,
    /// Style to draw this line in.
    pub style: TextStyle,
    /// Top edge of the line, in canvas pixels.
    pub y: i32,
}

/// The positioned body of a quote, ready for drawing.
///
/// Concatenating all lines' words in order, respecting style boundaries,
/// reproduces the cleaned input quote as a whitespace-equivalent string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutBlock {
    /// Body font size the lines were measured at.
    pub body_size: u32,
    /// Lines in top-to-bottom reading order.
    pub lines: Vec<PlacedLine>,
}

/// Lay out a normalized quote body.
///
/// `body` must already be break-normalized (see
/// [`normalize_breaks`](crate::normalize_breaks)); embedded newlines are
/// honored as explicit line breaks. Lines start at `params.top_margin`
/// and advance by `body_size + 5` pixels, continuously across the
/// plain/emphasis/plain segments — no extra gap at segment boundaries.
///
/// An empty body yields an empty line list, which is valid, not an error.
pub fn layout_quote(
    body: &str,
    emphasis: &str,
    body_size: u32,
    params: &LayoutParams,
    measure: &impl TextMeasure,
) -> Result<LayoutBlock, LayoutError> {
    let pitch = body_size.saturating_add(LINE_GAP) as i32;
    let mut lines = Vec::new();
    let mut y = params.top_margin;

    for (segment, style) in split_emphasis(body, emphasis) {
        for paragraph in segment.split('\n') {
            for text in wrap_words(paragraph, style, params.usable_width, measure)? {
                lines.push(PlacedLine { text, style, y });
                y = y.saturating_add(pitch);
            }
        }
    }

    Ok(LayoutBlock { body_size, lines })
}

/// The fixed-format attribution caption: `- <title> by <author>`.
///
/// Always a single line; a long attribution is the caller's problem, the
/// engine never wraps it.
pub fn attribution(title: &str, author: &str) -> String {
    format!("- {title} by {author}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::testing::FixedMeasure;

    const PARAMS: LayoutParams = LayoutParams {
        usable_width: 100,
        top_margin: 40,
    };

    // 10 px per char → at most 10 chars per line.
    fn layout(body: &str, emphasis: &str) -> LayoutBlock {
        layout_quote(body, emphasis, 32, &PARAMS, &FixedMeasure { advance: 10 }).unwrap()
    }

    #[test]
    fn test_lines_advance_by_size_plus_gap() {
        let block = layout("aaaa bbbb cccc dddd", "");
        assert!(block.lines.len() >= 2);
        assert_eq!(block.lines[0].y, 40);
        assert_eq!(block.lines[1].y, 40 + 37);
    }

    #[test]
    fn test_pitch_continuous_across_segments() {
        // Every segment wraps to one line; positions must be one pitch apart.
        let block = layout("aaaa bold cccc", "bold");
        let styles: Vec<TextStyle> = block.lines.iter().map(|l| l.style).collect();
        assert_eq!(
            styles,
            vec![TextStyle::Plain, TextStyle::Emphasis, TextStyle::Plain]
        );
        let ys: Vec<i32> = block.lines.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![40, 77, 114]);
    }

    #[test]
    fn test_explicit_newline_forces_break() {
        let block = layout("one\ntwo", "");
        assert_eq!(block.lines.len(), 2);
        assert_eq!(block.lines[0].text, "one");
        assert_eq!(block.lines[1].text, "two");
    }

    #[test]
    fn test_empty_body_yields_no_lines() {
        let block = layout("", "");
        assert!(block.lines.is_empty());
    }

    #[test]
    fn test_whitespace_equivalence_with_emphasis() {
        let body = "before words shown bold after words";
        let block = layout(body, "shown bold");
        let rejoined: Vec<String> = block.lines.iter().map(|l| l.text.clone()).collect();
        assert_eq!(rejoined.join(" "), body);
    }

    #[test]
    fn test_emphasis_absent_all_plain() {
        let block = layout("no emphasis here", "missing");
        assert!(block.lines.iter().all(|l| l.style == TextStyle::Plain));
    }

    #[test]
    fn test_attribution_format() {
        assert_eq!(attribution("Ulysses", "James Joyce"), "- Ulysses by James Joyce");
    }
}
