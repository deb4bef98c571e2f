//! Display driver trait — the only seam the render path touches.

use crate::frame::Frame;

/// Control interface for an e-paper panel.
///
/// All operations are fallible and blocking; e-paper refresh latency (a
/// couple of seconds) dominates, so no per-call timeouts are applied.
/// [`push`](Self::push) is the only call on the hot redraw path —
/// `init`, `clear` and `sleep` run at startup and shutdown.
pub trait DisplayDriver {
    /// Driver-specific failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Power up and configure the panel.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Transfer a full frame and refresh the panel with it.
    fn push(&mut self, frame: &Frame) -> Result<(), Self::Error>;

    /// Blank the physical display.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Put the panel into low-power deep sleep.
    fn sleep(&mut self) -> Result<(), Self::Error>;
}
