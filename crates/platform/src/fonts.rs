//! Serif font atlas — measurement and drawing for the three text styles.
//!
//! The panel has no scalable font machinery, so the four abstract body
//! sizes the layout engine picks (32/28/24/20) map onto the nearest
//! pre-rendered Times faces from the u8g2 collection, with a bold face
//! for the emphasis style and a smaller regular face for the caption.
//! Line pitch upstream still uses the abstract size; only glyphs come
//! from the mapped face.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use thiserror::Error;
use u8g2_fonts::types::{FontColor, VerticalPosition};
use u8g2_fonts::{fonts, FontRenderer};

use layout::{caption_size, MeasureError, TextMeasure, TextStyle};

static TIMES_10: FontRenderer = FontRenderer::new::<fonts::u8g2_font_timR10_tf>();
static TIMES_12: FontRenderer = FontRenderer::new::<fonts::u8g2_font_timR12_tf>();
static TIMES_14: FontRenderer = FontRenderer::new::<fonts::u8g2_font_timR14_tf>();
static TIMES_18: FontRenderer = FontRenderer::new::<fonts::u8g2_font_timR18_tf>();
static TIMES_24: FontRenderer = FontRenderer::new::<fonts::u8g2_font_timR24_tf>();

static TIMES_BOLD_12: FontRenderer = FontRenderer::new::<fonts::u8g2_font_timB12_tf>();
static TIMES_BOLD_14: FontRenderer = FontRenderer::new::<fonts::u8g2_font_timB14_tf>();
static TIMES_BOLD_18: FontRenderer = FontRenderer::new::<fonts::u8g2_font_timB18_tf>();
static TIMES_BOLD_24: FontRenderer = FontRenderer::new::<fonts::u8g2_font_timB24_tf>();

fn regular_face(size: u32) -> &'static FontRenderer {
    match size {
        s if s >= 32 => &TIMES_24,
        28..=31 => &TIMES_18,
        24..=27 => &TIMES_14,
        20..=23 => &TIMES_12,
        _ => &TIMES_10,
    }
}

fn bold_face(size: u32) -> &'static FontRenderer {
    match size {
        s if s >= 32 => &TIMES_BOLD_24,
        28..=31 => &TIMES_BOLD_18,
        24..=27 => &TIMES_BOLD_14,
        _ => &TIMES_BOLD_12,
    }
}

/// A string could not be measured or drawn (usually a glyph the face
/// does not carry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("font rendering failed: {0}")]
pub struct FontError(pub String);

/// The three styles of one render, derived once per quote from the
/// chosen body size.
#[derive(Debug, Copy, Clone)]
pub struct FontAtlas {
    body_size: u32,
}

impl FontAtlas {
    /// Derive the style set for a quote laid out at `body_size`.
    pub fn new(body_size: u32) -> Self {
        Self { body_size }
    }

    /// Abstract size a style renders at (caption is four below the body).
    pub fn style_size(&self, style: TextStyle) -> u32 {
        match style {
            TextStyle::Caption => caption_size(self.body_size),
            TextStyle::Plain | TextStyle::Emphasis => self.body_size,
        }
    }

    fn face(&self, style: TextStyle) -> &'static FontRenderer {
        let size = self.style_size(style);
        match style {
            TextStyle::Emphasis => bold_face(size),
            TextStyle::Plain | TextStyle::Caption => regular_face(size),
        }
    }

    /// Draw `text` with its top-left corner at `origin`.
    pub fn draw<D>(
        &self,
        text: &str,
        origin: Point,
        style: TextStyle,
        target: &mut D,
    ) -> Result<(), FontError>
    where
        D: DrawTarget<Color = BinaryColor>,
        D::Error: core::fmt::Debug,
    {
        self.face(style)
            .render(
                text,
                origin,
                VerticalPosition::Top,
                FontColor::Transparent(BinaryColor::On),
                target,
            )
            .map_err(|e| FontError(format!("{e:?}")))?;
        Ok(())
    }
}

impl TextMeasure for FontAtlas {
    fn width(&self, text: &str, style: TextStyle) -> Result<u32, MeasureError> {
        let dims = self
            .face(style)
            .get_rendered_dimensions(text, Point::zero(), VerticalPosition::Top)
            .map_err(|e| MeasureError(format!("{e:?}")))?;
        Ok(dims.advance.x.max(0) as u32)
    }
}
