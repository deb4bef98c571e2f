//! Packed monochrome framebuffer — one full display frame.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// In-memory 1-bpp canvas in the e-paper wire format.
///
/// Rows are padded to byte boundaries and packed MSB-first; a set bit is
/// a white pixel, a cleared bit is black ink. A fresh frame is all
/// white. Drawing uses embedded-graphics ([`DrawTarget`]) with
/// [`BinaryColor::On`] meaning ink; out-of-bounds pixels are clipped,
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    bytes_per_row: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Create a white frame of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let bytes_per_row = (width as usize).div_ceil(8);
        Self {
            width,
            height,
            bytes_per_row,
            data: vec![0xFF; bytes_per_row.saturating_mul(height as usize)],
        }
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every pixel to white.
    pub fn clear_white(&mut self) {
        self.data.fill(0xFF);
    }

    /// The packed buffer, row-major, ready for the panel's frame push.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Color at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<BinaryColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize).saturating_mul(self.bytes_per_row) + (x as usize) / 8;
        let mask = 0x80_u8 >> (x % 8);
        let byte = self.data.get(index)?;
        // Cleared bit = ink.
        Some(if byte & mask == 0 {
            BinaryColor::On
        } else {
            BinaryColor::Off
        })
    }

    /// Number of ink (black) pixels in the frame.
    pub fn ink_count(&self) -> usize {
        let mut count = 0usize;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixel(x, y) == Some(BinaryColor::On) {
                    count += 1;
                }
            }
        }
        count
    }

    fn set(&mut self, x: u32, y: u32, color: BinaryColor) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize).saturating_mul(self.bytes_per_row) + (x as usize) / 8;
        let mask = 0x80_u8 >> (x % 8);
        if let Some(byte) = self.data.get_mut(index) {
            match color {
                BinaryColor::On => *byte &= !mask,
                BinaryColor::Off => *byte |= mask,
            }
        }
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set(point.x as u32, point.y as u32, color);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
