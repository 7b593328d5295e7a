//! Simulated time units and elapsed-time breakdown
//!
//! The simulation counts time in seconds; a year is a flat 365 days.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Convert simulated seconds to (fractional) years
pub fn seconds_to_years(seconds: f64) -> f64 {
    seconds / SECONDS_PER_YEAR
}

/// Simulated elapsed time split into calendar components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedTime {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl ElapsedTime {
    pub fn from_seconds(total: f64) -> Self {
        let total = if total.is_finite() { total.max(0.0) } else { 0.0 };

        let years = (total / SECONDS_PER_YEAR).floor();
        let days = ((total % SECONDS_PER_YEAR) / SECONDS_PER_DAY).floor();
        let hours = ((total % SECONDS_PER_DAY) / SECONDS_PER_HOUR).floor();
        let minutes = ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE).floor();
        let seconds = (total % SECONDS_PER_MINUTE).floor();

        Self {
            years: years as u64,
            days: days as u64,
            hours: hours as u64,
            minutes: minutes as u64,
            seconds: seconds as u64,
        }
    }

    /// Whole seconds represented by the breakdown
    pub fn total_seconds(&self) -> u64 {
        self.seconds
            + self.minutes * 60
            + self.hours * 3_600
            + self.days * 86_400
            + self.years * 31_536_000
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.years > 0 {
            write!(f, "{} years, {} days", self.years, self.days)
        } else if self.days > 0 {
            write!(f, "{} days, {} hours", self.days, self.hours)
        } else if self.hours > 0 {
            write!(f, "{}h {}m", self.hours, self.minutes)
        } else {
            write!(f, "{}s", self.total_seconds())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_is_365_days() {
        assert_eq!(SECONDS_PER_YEAR, SECONDS_PER_DAY * 365.0);
        assert_eq!(seconds_to_years(SECONDS_PER_YEAR * 500.0), 500.0);
    }

    #[test]
    fn test_breakdown() {
        let t = ElapsedTime::from_seconds(SECONDS_PER_YEAR * 3.0 + SECONDS_PER_DAY * 12.0 + 3_725.0);
        assert_eq!(t.years, 3);
        assert_eq!(t.days, 12);
        assert_eq!(t.hours, 1);
        assert_eq!(t.minutes, 2);
        assert_eq!(t.seconds, 5);
    }

    #[test]
    fn test_display_precedence() {
        assert_eq!(
            ElapsedTime::from_seconds(SECONDS_PER_YEAR * 2.0 + SECONDS_PER_DAY * 4.0).to_string(),
            "2 years, 4 days"
        );
        assert_eq!(
            ElapsedTime::from_seconds(SECONDS_PER_DAY * 5.0 + SECONDS_PER_HOUR * 7.0).to_string(),
            "5 days, 7 hours"
        );
        assert_eq!(ElapsedTime::from_seconds(3_720.0).to_string(), "1h 2m");
        assert_eq!(ElapsedTime::from_seconds(42.0).to_string(), "42s");
        assert_eq!(ElapsedTime::from_seconds(0.0).to_string(), "0s");
    }

    #[test]
    fn test_garbage_input_is_zero() {
        assert_eq!(ElapsedTime::from_seconds(f64::NAN).total_seconds(), 0);
        assert_eq!(ElapsedTime::from_seconds(-5.0).total_seconds(), 0);
    }
}
