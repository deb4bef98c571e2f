//! Offline rendering of a single quote frame to a PNG on disk.
//!
//! Useful for checking layout from a desktop without a panel attached:
//! the exact frame the device would receive is written as an 8-bit
//! grayscale image, black ink on white.

use std::path::Path;

use anyhow::Context;
use embedded_graphics::pixelcolor::BinaryColor;
use image::GrayImage;

use quotes::{QuoteIndex, TimeKey};

use crate::render::Renderer;

/// Compose the frame for `key` (falling back like the live loop does)
/// and write it to `out` as a PNG.
pub fn write_preview(
    index: &QuoteIndex,
    key: &TimeKey,
    renderer: &Renderer,
    out: &Path,
) -> anyhow::Result<()> {
    let record = index
        .resolve(key)
        .with_context(|| format!("no quote for {key} and no fallback entry"))?;
    let frame = renderer
        .compose(record)
        .with_context(|| format!("composing frame for {key}"))?;

    let mut img = GrayImage::new(frame.width(), frame.height());
    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let luma = match frame.pixel(x, y) {
                Some(BinaryColor::On) => 0u8,
                _ => 255u8,
            };
            img.put_pixel(x, y, image::Luma([luma]));
        }
    }
    img.save(out)
        .with_context(|| format!("writing preview to {}", out.display()))?;
    tracing::info!(%key, path = %out.display(), "wrote preview");
    Ok(())
}
