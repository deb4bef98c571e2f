//! Folio — a literary clock for a slow-refresh e-paper panel.
//!
//! Every minute of the day maps to a quotation that mentions that time.
//! The daemon polls the wall clock, and only when the displayed minute
//! changes does it resolve the quote, lay it out adaptively for the
//! 800×480 monochrome canvas, and push one full repaint to the panel.
//!
//! Crate layout:
//!
//! - [`clock`] — minute-resolution clock source seam
//! - [`render`] — orchestrator: fresh frame, layout, draw, push
//! - [`refresh`] — the polling loop and its lifecycle state machine
//! - [`preview`] — render one time key to a PNG, no hardware needed
//! - [`error`] — runtime error taxonomy

pub mod clock;
pub mod error;
pub mod preview;
pub mod refresh;
pub mod render;

pub use clock::{ClockSource, WallClock};
pub use error::AppError;
pub use refresh::{LoopState, Observation, RefreshLoop};
pub use render::Renderer;
