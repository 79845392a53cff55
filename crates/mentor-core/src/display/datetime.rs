//! DateTime display utilities.
//!
//! Wrapper types for formatting timestamps and tracked durations in a
//! consistent, human-readable form using the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting
/// via the `Display` trait.
///
/// # Format
///
/// `YYYY-MM-DD HH:MM:SS TZ`, zero-padded, 24-hour clock.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A second count formatted as a compact `1h 23m` / `12m` / `45s` duration.
pub struct Duration(pub i64);

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.max(0);
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;

        if hours > 0 {
            write!(f, "{hours}h {minutes}m")
        } else if minutes > 0 {
            write!(f, "{minutes}m")
        } else {
            write!(f, "{seconds}s")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_formats() {
        assert_eq!(Duration(45).to_string(), "45s");
        assert_eq!(Duration(610).to_string(), "10m");
        assert_eq!(Duration(5025).to_string(), "1h 23m");
        assert_eq!(Duration(-5).to_string(), "0s");
    }
}
