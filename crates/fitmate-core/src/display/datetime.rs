//! Time formatting helpers.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Renders a timestamp in the system time zone as `YYYY-MM-DD HH:MM TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

/// Renders a second count as a countdown clock.
///
/// Durations under an hour print as `MM:SS`, longer ones as `H:MM:SS`.
///
/// ```rust
/// use fitmate_core::display::Clock;
///
/// assert_eq!(Clock(75).to_string(), "01:15");
/// assert_eq!(Clock(3_725).to_string(), "1:02:05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock(pub u64);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;

        if hours > 0 {
            write!(f, "{hours}:{minutes:02}:{seconds:02}")
        } else {
            write!(f, "{minutes:02}:{seconds:02}")
        }
    }
}
