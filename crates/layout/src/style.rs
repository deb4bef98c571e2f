//! Text styles and the quote-length font size step function.

/// The three styles a laid-out line can carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Regular body text.
    Plain,
    /// Bold body text — the part of the quote that names the time.
    Emphasis,
    /// The smaller italic-equivalent attribution line.
    Caption,
}

/// Pick the body font size for a quote of the given (normalized) text.
///
/// A monotonically non-increasing step function of character length with
/// strict `<` at every boundary: a 100-character quote already drops to
/// size 28.
pub fn font_size_for(text: &str) -> u32 {
    let length = text.chars().count();
    if length < 100 {
        32
    } else if length < 200 {
        28
    } else if length < 300 {
        24
    } else {
        20
    }
}

/// Caption size derived from the body size (four points smaller).
pub fn caption_size(body_size: u32) -> u32 {
    body_size.saturating_sub(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of_len(n: usize) -> String {
        "x".repeat(n)
    }

    #[test]
    fn test_font_size_step_boundaries() {
        // Boundary lengths resolve to the smaller-size bucket.
        for (len, size) in [(99, 32), (100, 28), (199, 28), (200, 24), (299, 24), (300, 20)] {
            assert_eq!(font_size_for(&text_of_len(len)), size, "length {len}");
        }
    }

    #[test]
    fn test_font_size_counts_chars_not_bytes() {
        // 99 two-byte characters is still under the first boundary.
        assert_eq!(font_size_for(&"é".repeat(99)), 32);
    }

    #[test]
    fn test_font_size_empty_text() {
        assert_eq!(font_size_for(""), 32);
    }

    #[test]
    fn test_caption_size_offset() {
        assert_eq!(caption_size(32), 28);
        assert_eq!(caption_size(20), 16);
    }
}
