//! Greedy word wrap against an injected measurement capability.

use thiserror::Error;

use crate::style::TextStyle;

/// A text measurement could not be produced (e.g. a glyph the font does
/// not carry). Never swallowed: it fails the whole layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("text measurement failed: {0}")]
pub struct MeasureError(pub String);

/// Errors produced by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The measurement capability failed.
    #[error(transparent)]
    Measure(#[from] MeasureError),
}

/// Pixel-width measurement capability, injected into the engine.
///
/// Implementations must measure the string exactly as it will later be
/// drawn in the given style (the concrete font behind each style is the
/// implementor's business; the engine never sees glyph data).
pub trait TextMeasure {
    /// Pixel width of `text` rendered in `style`.
    fn width(&self, text: &str, style: TextStyle) -> Result<u32, MeasureError>;
}

/// Greedily wrap `text` into lines no wider than `usable_width` pixels.
///
/// Words are whitespace-split and accumulated; when adding a word pushes
/// the measured line over the limit, the line is closed before that word.
/// A single word wider than the limit is emitted alone and allowed to
/// overflow rather than retried. All words appear in their original
/// order, none dropped or duplicated.
pub fn wrap_words(
    text: &str,
    style: TextStyle,
    usable_width: u32,
    measure: &impl TextMeasure,
) -> Result<Vec<String>, LayoutError> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        current.push(word);
        let candidate = current.join(" ");
        if measure.width(&candidate, style)? > usable_width {
            if current.len() == 1 {
                // Unbreakable over-long word: emit alone, never retried.
                lines.push(candidate);
                current.clear();
            } else {
                let overflowed = current.pop();
                lines.push(current.join(" "));
                current.clear();
                current.extend(overflowed);
            }
        }
    }
    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    Ok(lines)
}


#[cfg(test)]
mod tests {
    use super::testing::{BrokenMeasure, FixedMeasure};
    use super::*;

    // advance 10 px/char, width 100 px → at most 10 characters per line
    fn wrap(text: &str, usable: u32) -> Vec<String> {
        wrap_words(text, TextStyle::Plain, usable, &FixedMeasure { advance: 10 }).unwrap()
    }

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(wrap("ab cd", 100), vec!["ab cd"]);
    }

    #[test]
    fn test_wrap_closes_line_before_overflowing_word() {
        // "aaaa bbbb" is 9 chars (90 px); adding "cc" makes 120 px.
        assert_eq!(wrap("aaaa bbbb cc", 100), vec!["aaaa bbbb", "cc"]);
    }

    #[test]
    fn test_no_words_dropped_or_reordered() {
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = wrap(text, 100);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_no_line_exceeds_limit_except_single_long_word() {
        let lines = wrap("short extraordinarily tiny", 100);
        for line in &lines {
            let over = line.chars().count() as u32 * 10 > 100;
            assert!(!over || !line.contains(' '), "over-wide multi-word line: {line}");
        }
    }

    #[test]
    fn test_overlong_word_emitted_alone() {
        let lines = wrap("incomprehensibilities then more", 100);
        assert_eq!(lines[0], "incomprehensibilities");
        assert_eq!(lines.join(" "), "incomprehensibilities then more");
    }

    #[test]
    fn test_empty_text_yields_no_lines() {
        assert!(wrap("", 100).is_empty());
        assert!(wrap("   ", 100).is_empty());
    }

    #[test]
    fn test_runs_of_whitespace_collapse() {
        assert_eq!(wrap("a \t  b", 100), vec!["a b"]);
    }

    #[test]
    fn test_measurement_failure_propagates() {
        let err = wrap_words("any text", TextStyle::Plain, 100, &BrokenMeasure);
        assert!(matches!(err, Err(LayoutError::Measure(_))));
    }
}
