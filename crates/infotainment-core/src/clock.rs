//! Clock and date text for the home screen and dashboard

use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};

/// How often the clock labels are refreshed
pub const CLOCK_REFRESH: Duration = Duration::from_secs(1);

/// Formatted time and date labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    /// "HH:MM", 24 hour
    pub time: String,
    /// "dd Month, Weekday"
    pub date: String,
}

impl ClockFace {
    pub fn from_datetime<Tz>(at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            time: at.format("%H:%M").to_string(),
            date: at.format("%d %B, %A").to_string(),
        }
    }

    /// Labels for the current local time
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 7, 5, 42).unwrap();
        let face = ClockFace::from_datetime(&at);
        assert_eq!(face.time, "07:05");
        assert_eq!(face.date, "18 October, Sunday");
    }

    #[test]
    fn test_day_is_zero_padded() {
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 23, 59, 0).unwrap();
        let face = ClockFace::from_datetime(&at);
        assert_eq!(face.time, "23:59");
        assert_eq!(face.date, "02 March, Monday");
    }
}
