//! Timestamp formatting in the viewer's time zone.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

const FORMAT: &str = "%Y-%m-%d %H:%M %Z";

/// Formats a timestamp as `YYYY-MM-DD HH:MM TZ` in the system time zone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl LocalDateTime<'_> {
    /// Formats in an explicit zone instead of the system one.
    pub fn in_zone(&self, tz: TimeZone) -> String {
        self.0.to_zoned(tz).strftime(FORMAT).to_string()
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.in_zone(TimeZone::system()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_in_utc() {
        let ts: Timestamp = "2024-03-15T12:00:00Z".parse().unwrap();
        assert_eq!(LocalDateTime(&ts).in_zone(TimeZone::UTC), "2024-03-15 12:00 UTC");
    }
}
