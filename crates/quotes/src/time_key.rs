//! Canonical minute-resolution time key.

use core::fmt;

/// The reserved key used when the current minute has no entry of its own.
pub const FALLBACK_KEY: &str = "0:00 midnight";

/// A canonical `"H:MM"` key identifying which quote should be shown "now".
///
/// The hour carries no leading zero and the minute always has two digits,
/// matching the key column of the quote table. Keys compare as plain
/// strings; two keys are the same minute iff they are byte-equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeKey(String);

impl TimeKey {
    /// Wrap an already-canonical key string (e.g. a table column value).
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Build the key for a given hour and minute of the day.
    pub fn from_hour_minute(hour: u32, minute: u32) -> Self {
        Self(format!("{hour}:{minute:02}"))
    }

    /// The reserved fallback key, conventionally representing midnight.
    pub fn fallback() -> Self {
        Self(FALLBACK_KEY.to_string())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_hour_minute_pads_minute() {
        assert_eq!(TimeKey::from_hour_minute(9, 5).as_str(), "9:05");
    }

    #[test]
    fn test_key_hour_not_padded() {
        assert_eq!(TimeKey::from_hour_minute(0, 0).as_str(), "0:00");
        assert_eq!(TimeKey::from_hour_minute(23, 59).as_str(), "23:59");
    }

    #[test]
    fn test_fallback_key_literal() {
        assert_eq!(TimeKey::fallback().as_str(), "0:00 midnight");
    }

    #[test]
    fn test_keys_compare_as_strings() {
        assert_eq!(TimeKey::new("9:00"), TimeKey::from_hour_minute(9, 0));
        assert_ne!(TimeKey::new("09:00"), TimeKey::from_hour_minute(9, 0));
    }
}
