//! Runtime error taxonomy.
//!
//! Startup failures (fonts, device, quote table) surface as `anyhow`
//! errors in `main` and abort with a non-zero exit. A resolution miss is
//! not an error at all — the loop skips the tick. Everything below is
//! fatal to the running loop: it propagates up, the loop performs its
//! one cleanup pass, and the process exits non-zero.

use thiserror::Error;

/// Unrecoverable failures on the render path.
#[derive(Debug, Error)]
pub enum AppError {
    /// The layout engine failed (measurement capability error).
    #[error("quote layout failed")]
    Layout(#[from] layout::LayoutError),
    /// Drawing text onto the frame failed.
    #[error("glyph drawing failed")]
    Font(#[from] platform::FontError),
    /// The display driver rejected an operation.
    #[error("display device failure")]
    Device(#[source] anyhow::Error),
}

impl AppError {
    /// Wrap a driver error from the display seam.
    pub fn device<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Device(anyhow::Error::new(err))
    }
}
