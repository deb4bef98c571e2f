//! Refresh loop and lifecycle state machine.
//!
//! A single cooperative task polls the clock at a coarse interval and
//! redraws only when the minute key changes — the panel takes seconds
//! per refresh, so suppressing redundant repaints is the loop's core
//! correctness property. The poll-interval wait is the sole cancellation
//! point; a shutdown request observed there (or an error propagating out
//! of a render) routes through [`LoopState::ShuttingDown`], whose entry
//! runs the device cleanup sequence exactly once and never lets a
//! cleanup failure block process exit.

use std::time::Duration;

use tokio::sync::Notify;

use platform::DisplayDriver;
use quotes::{QuoteIndex, TimeKey};

use crate::clock::ClockSource;
use crate::error::AppError;
use crate::render::Renderer;

/// Lifecycle states of the refresh loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopState {
    /// Waiting for the minute to change.
    Idle,
    /// The key changed; looking up its record.
    Resolving(TimeKey),
    /// A record was found; repainting the panel.
    Rendering(TimeKey),
    /// Cancellation or a fatal error; cleanup pending.
    ShuttingDown,
    /// Cleanup done; the loop will not run again.
    Terminated,
}

/// Outcome of one clock observation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Observation {
    /// Key unchanged — nothing was drawn or pushed.
    Unchanged,
    /// Key changed and the new quote is on the panel.
    Rendered,
    /// Key changed but no record exists for it (nor the fallback);
    /// the display is left as it was, the next tick retries.
    Miss,
}

/// The polling loop. Owns the display state; nothing else may write it.
pub struct RefreshLoop<'a, D: DisplayDriver, C: ClockSource> {
    index: &'a QuoteIndex,
    renderer: Renderer,
    driver: &'a mut D,
    clock: C,
    interval: Duration,
    state: LoopState,
    last_rendered_key: Option<TimeKey>,
}

impl<'a, D: DisplayDriver, C: ClockSource> RefreshLoop<'a, D, C> {
    /// Assemble a loop over an exclusively-borrowed device.
    pub fn new(
        index: &'a QuoteIndex,
        renderer: Renderer,
        driver: &'a mut D,
        clock: C,
        interval: Duration,
    ) -> Self {
        Self {
            index,
            renderer,
            driver,
            clock,
            interval,
            state: LoopState::Idle,
            last_rendered_key: None,
        }
    }

    /// Key of the frame currently on the panel, if any.
    pub fn last_rendered_key(&self) -> Option<&TimeKey> {
        self.last_rendered_key.as_ref()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &LoopState {
        &self.state
    }

    /// One synchronous pass: observe the clock and redraw if the minute
    /// changed. On a fatal render error the state moves to
    /// [`LoopState::ShuttingDown`] and the error is returned; the caller
    /// must still run [`shutdown`](Self::shutdown).
    pub fn observe(&mut self) -> Result<Observation, AppError> {
        let key = self.clock.current_key();
        if self.last_rendered_key.as_ref() == Some(&key) {
            // Idle → Idle: zero draw and push calls.
            return Ok(Observation::Unchanged);
        }

        self.state = LoopState::Resolving(key.clone());
        let Some(record) = self.index.resolve(&key) else {
            tracing::warn!(%key, "no quote for this minute");
            self.state = LoopState::Idle;
            return Ok(Observation::Miss);
        };

        tracing::info!(%key, "minute changed, updating display");
        self.state = LoopState::Rendering(key.clone());
        match self.renderer.render(record, self.driver) {
            Ok(()) => {
                self.last_rendered_key = Some(key);
                self.state = LoopState::Idle;
                Ok(Observation::Rendered)
            }
            Err(e) => {
                self.state = LoopState::ShuttingDown;
                Err(e)
            }
        }
    }

    /// Device cleanup on `ShuttingDown` entry: defensively re-initialize,
    /// clear the physical display, and put it to low-power sleep. Each
    /// step is best-effort — failures are logged and swallowed so that
    /// termination is never blocked.
    pub fn shutdown(&mut self) {
        tracing::info!("cleaning up display");
        if let Err(e) = self.driver.init() {
            tracing::warn!(error = %e, "cleanup: re-init failed");
        }
        if let Err(e) = self.driver.clear() {
            tracing::warn!(error = %e, "cleanup: clear failed");
        }
        if let Err(e) = self.driver.sleep() {
            tracing::warn!(error = %e, "cleanup: sleep failed");
        }
        self.state = LoopState::Terminated;
    }

    /// Drive the loop until `shutdown_signal` fires or a render fails.
    ///
    /// Returns `Ok(())` after a clean cancellation-triggered shutdown and
    /// the fatal error otherwise; cleanup has run in both cases.
    pub async fn run(mut self, shutdown_signal: &Notify) -> Result<(), AppError> {
        let mut fatal = None;
        while self.state != LoopState::Terminated {
            if self.state != LoopState::ShuttingDown {
                match self.observe() {
                    Ok(Observation::Unchanged) => {}
                    Ok(Observation::Rendered | Observation::Miss) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "render failed, shutting down");
                        fatal = Some(e);
                    }
                }
            }
            if self.state != LoopState::ShuttingDown {
                // The sole suspension — and cancellation — point.
                tokio::select! {
                    () = tokio::time::sleep(self.interval) => {}
                    () = shutdown_signal.notified() => {
                        tracing::info!("shutdown requested");
                        self.state = LoopState::ShuttingDown;
                    }
                }
            }
            if self.state == LoopState::ShuttingDown {
                self.shutdown();
            }
        }
        match fatal {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
