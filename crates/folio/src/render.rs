//! Render orchestrator — one quote record to one pushed frame.

use embedded_graphics::prelude::Point;

use layout::{
    attribution, font_size_for, layout_quote, normalize_breaks, LayoutParams, TextStyle,
};
use platform::{DisplayDriver, FontAtlas, Frame};
use quotes::QuoteRecord;

use crate::error::AppError;

/// Horizontal margin on each side of the canvas, in pixels.
pub const MARGIN: u32 = 40;

/// Vertical offset of the attribution line from the bottom edge.
pub const ATTRIBUTION_RISE: u32 = 60;

/// Assembles full frames for a fixed canvas geometry.
///
/// Every render starts from a fresh white frame — there is no diffing
/// against the previous one; a slow full repaint is the device's normal
/// mode of operation. A failed render reports to the caller and leaves
/// the display (and the caller's `last_rendered_key`) untouched.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    width: u32,
    height: u32,
}

impl Renderer {
    /// Orchestrator for a `width` × `height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Lay out and draw `record` onto a fresh frame.
    pub fn compose(&self, record: &QuoteRecord) -> Result<Frame, AppError> {
        let body = normalize_breaks(&record.body);
        let body_size = font_size_for(&body);
        let atlas = FontAtlas::new(body_size);
        let params = LayoutParams {
            usable_width: self.width.saturating_sub(2 * MARGIN),
            top_margin: MARGIN as i32,
        };

        let block = layout_quote(&body, &record.emphasis, body_size, &params, &atlas)?;

        let mut frame = Frame::new(self.width, self.height);
        for line in &block.lines {
            atlas.draw(&line.text, Point::new(MARGIN as i32, line.y), line.style, &mut frame)?;
        }

        let caption = attribution(&record.title, &record.author);
        let caption_y = (self.height as i32).saturating_sub(ATTRIBUTION_RISE as i32);
        atlas.draw(
            &caption,
            Point::new(MARGIN as i32, caption_y),
            TextStyle::Caption,
            &mut frame,
        )?;

        Ok(frame)
    }

    /// Compose `record` and push the finished frame to the device.
    pub fn render<D: DisplayDriver>(
        &self,
        record: &QuoteRecord,
        driver: &mut D,
    ) -> Result<(), AppError> {
        let frame = self.compose(record)?;
        driver.push(&frame).map_err(AppError::device)?;
        tracing::info!(title = %record.title, "displayed quote");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::mocks::RecordingDriver;

    fn record(body: &str, emphasis: &str) -> QuoteRecord {
        QuoteRecord {
            emphasis: emphasis.to_string(),
            body: body.to_string(),
            title: "Some Novel".to_string(),
            author: "A. Writer".to_string(),
        }
    }

    #[test]
    fn test_render_pushes_one_frame_with_ink() {
        let renderer = Renderer::new(800, 480);
        let mut driver = RecordingDriver::new();
        renderer
            .render(&record("It was nine o'clock.", "nine o'clock"), &mut driver)
            .unwrap();
        assert_eq!(driver.push_count, 1);
        let frame = driver.last_frame.unwrap();
        assert!(frame.ink_count() > 0);
    }

    #[test]
    fn test_empty_body_still_draws_attribution() {
        let renderer = Renderer::new(800, 480);
        let frame = renderer.compose(&record("", "")).unwrap();
        // Only the caption near the bottom contributes ink.
        assert!(frame.ink_count() > 0);
        let mut top_ink = 0usize;
        for y in 0..300 {
            for x in 0..800 {
                if frame.pixel(x, y) == Some(embedded_graphics::pixelcolor::BinaryColor::On) {
                    top_ink += 1;
                }
            }
        }
        assert_eq!(top_ink, 0);
    }

    #[test]
    fn test_failed_push_reports_device_error() {
        let renderer = Renderer::new(800, 480);
        let mut driver = RecordingDriver {
            fail_pushes: true,
            ..RecordingDriver::default()
        };
        let err = renderer.render(&record("Short quote.", ""), &mut driver);
        assert!(matches!(err, Err(AppError::Device(_))));
    }

    #[test]
    fn test_long_quote_wraps_within_margins() {
        let renderer = Renderer::new(800, 480);
        let body = "A rather long quotation that speaks at considerable length about the \
                    hour of the day, the light in the windows, and the slow turning of pages \
                    in a quiet room somewhere far away from here.";
        let frame = renderer.compose(&record(body, "hour of the day")).unwrap();
        // No ink well inside the left margin (glyphs may bear a pixel or
        // two left of their origin, so leave slack near the edge).
        for y in 0..480 {
            for x in 0..MARGIN - 8 {
                assert_ne!(
                    frame.pixel(x, y),
                    Some(embedded_graphics::pixelcolor::BinaryColor::On),
                    "ink in left margin at ({x}, {y})"
                );
            }
        }
    }
}
