//! Time-of-day values as rendered by the clock.

use core::fmt::Write as _;

use heapless::String;

/// A single reading of the wall clock, already timezone-adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeSample {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Decompose local seconds into a time of day.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_local_secs(secs: u64) -> Self {
        let day = secs % 86_400;
        Self {
            hour: (day / 3600) as u8,
            minute: (day / 60 % 60) as u8,
            second: (day % 60) as u8,
        }
    }

    /// Format as `HH:MM:SS`.
    pub fn format(&self) -> String<8> {
        let mut out = String::new();
        // Writing at most 8 bytes into an 8-byte string cannot fail
        let _ = write!(
            out,
            "{:02}:{:02}:{:02}",
            self.hour, self.minute, self.second
        );
        out
    }
}
