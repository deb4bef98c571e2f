//! Minute-resolution clock seam.

use chrono::Timelike;
use quotes::TimeKey;

/// Source of the current time key.
///
/// The loop never reads the wall clock directly; tests substitute a
/// scripted clock to drive minute transitions deterministically.
pub trait ClockSource {
    /// The key for the current minute.
    fn current_key(&self) -> TimeKey;
}

/// Local wall-clock time, truncated to the minute.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl ClockSource for WallClock {
    fn current_key(&self) -> TimeKey {
        let now = chrono::Local::now();
        TimeKey::from_hour_minute(now.hour(), now.minute())
    }
}
