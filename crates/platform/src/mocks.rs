//! Recording test doubles for the display seam.

use thiserror::Error;

use crate::driver::DisplayDriver;
use crate::frame::Frame;

/// Failure injected by an armed [`RecordingDriver`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("injected display failure: {0}")]
pub struct MockError(pub &'static str);

/// Display driver that records every call instead of touching hardware.
///
/// Tests assert on the call counters (e.g. an unchanged minute performs
/// zero pushes) and on the last pushed frame. Arm `fail_pushes` /
/// `fail_cleanup` to exercise the error paths.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    /// Number of `init` calls (cleanup re-initializes, so ≥ 1 normally).
    pub init_count: usize,
    /// Number of full-frame pushes.
    pub push_count: usize,
    /// Number of physical clears.
    pub clear_count: usize,
    /// Number of deep-sleep commands.
    pub sleep_count: usize,
    /// Clone of the most recently pushed frame.
    pub last_frame: Option<Frame>,
    /// When set, every `push` fails.
    pub fail_pushes: bool,
    /// When set, `init`/`clear`/`sleep` fail (cleanup must swallow this).
    pub fail_cleanup: bool,
}

impl RecordingDriver {
    /// A fresh, always-succeeding driver.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayDriver for RecordingDriver {
    type Error = MockError;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.init_count += 1;
        if self.fail_cleanup {
            return Err(MockError("init"));
        }
        Ok(())
    }

    fn push(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.push_count += 1;
        if self.fail_pushes {
            return Err(MockError("push"));
        }
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.clear_count += 1;
        if self.fail_cleanup {
            return Err(MockError("clear"));
        }
        Ok(())
    }

    fn sleep(&mut self) -> Result<(), Self::Error> {
        self.sleep_count += 1;
        if self.fail_cleanup {
            return Err(MockError("sleep"));
        }
        Ok(())
    }
}
