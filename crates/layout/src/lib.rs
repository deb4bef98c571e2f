//! Adaptive text layout engine.
//!
//! Pure functions that turn a quotation (optionally containing one
//! emphasized substring) into a positioned sequence of styled lines for a
//! fixed-width monochrome canvas. The engine owns no font data: pixel
//! widths come from an injected [`TextMeasure`] capability, so the same
//! code runs against the real font atlas and against test doubles.
//!
//! Pipeline, in order:
//!
//! 1. [`normalize_breaks`] — tag-like break markers become newlines.
//! 2. [`font_size_for`] — step function of the normalized text length.
//! 3. Emphasis split — plain / emphasis / plain around the first verbatim
//!    occurrence of the emphasis substring.
//! 4. Greedy word wrap per segment against the measured pixel width.
//! 5. Vertical placement — top-down, `font_size + 5` pixels per line,
//!    continuous across segments.

mod block;
mod style;
mod text;
mod wrap;

pub use block::{attribution, layout_quote, LayoutBlock, LayoutParams, PlacedLine};
pub use style::{caption_size, font_size_for, TextStyle};
pub use text::{normalize_breaks, split_emphasis};
pub use wrap::{wrap_words, LayoutError, MeasureError, TextMeasure};
