//! Hardware abstraction for the quote display.
//!
//! Trait-based seams between the render path and the physical device,
//! so everything above this crate runs identically against the real
//! panel and against recording test doubles.
//!
//! ```text
//! Application (folio crate: loop + orchestrator)
//!         ↓
//! Platform (this crate: DisplayDriver, Frame, FontAtlas)
//!         ↓
//! Hardware (epd-waveshare over Linux SPI/GPIO, `hardware` feature)
//! ```
//!
//! - [`DisplayDriver`] — initialize / push / clear / sleep, all fallible
//! - [`Frame`] — packed 1-bpp monochrome canvas, one full display frame
//! - [`FontAtlas`] — serif faces per style and size; measure + draw
//! - [`mocks`] — recording doubles (`mocks` feature, plus unit tests)

pub mod driver;
pub mod fonts;
pub mod frame;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

#[cfg(feature = "hardware")]
pub mod epd7in5;

pub use driver::DisplayDriver;
pub use fonts::{FontAtlas, FontError};
pub use frame::Frame;
