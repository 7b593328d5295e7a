//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

use crate::core::calendar::{SECONDS_PER_DAY, SECONDS_PER_YEAR};
use crate::core::error::{Result, SimError};

/// Simulation tick counter
pub type Tick = u64;

/// Time acceleration selected by the driver
///
/// Each mode maps one real second to a fixed amount of simulated time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedMode {
    #[default]
    RealTime,
    DayPerSecond,
    MonthPerSecond,
    YearPerSecond,
    DecadePerSecond,
    CenturyPerSecond,
    MillenniumPerSecond,
    TenMillenniaPerSecond,
}

impl SpeedMode {
    const ALL: [SpeedMode; 8] = [
        SpeedMode::RealTime,
        SpeedMode::DayPerSecond,
        SpeedMode::MonthPerSecond,
        SpeedMode::YearPerSecond,
        SpeedMode::DecadePerSecond,
        SpeedMode::CenturyPerSecond,
        SpeedMode::MillenniumPerSecond,
        SpeedMode::TenMillenniaPerSecond,
    ];

    pub fn all() -> &'static [SpeedMode] {
        &Self::ALL
    }

    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            1..=8 => Ok(Self::ALL[(id - 1) as usize]),
            _ => Err(SimError::UnknownSpeedMode(id)),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            SpeedMode::RealTime => 1,
            SpeedMode::DayPerSecond => 2,
            SpeedMode::MonthPerSecond => 3,
            SpeedMode::YearPerSecond => 4,
            SpeedMode::DecadePerSecond => 5,
            SpeedMode::CenturyPerSecond => 6,
            SpeedMode::MillenniumPerSecond => 7,
            SpeedMode::TenMillenniaPerSecond => 8,
        }
    }

    /// Simulated seconds per real second
    pub fn multiplier(self) -> f64 {
        match self {
            SpeedMode::RealTime => 1.0,
            SpeedMode::DayPerSecond => SECONDS_PER_DAY,
            SpeedMode::MonthPerSecond => SECONDS_PER_DAY * 30.0,
            SpeedMode::YearPerSecond => SECONDS_PER_YEAR,
            SpeedMode::DecadePerSecond => SECONDS_PER_YEAR * 10.0,
            SpeedMode::CenturyPerSecond => SECONDS_PER_YEAR * 100.0,
            SpeedMode::MillenniumPerSecond => SECONDS_PER_YEAR * 1_000.0,
            SpeedMode::TenMillenniaPerSecond => SECONDS_PER_YEAR * 10_000.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeedMode::RealTime => "Real time",
            SpeedMode::DayPerSecond => "1 day/s",
            SpeedMode::MonthPerSecond => "1 month/s",
            SpeedMode::YearPerSecond => "1 year/s",
            SpeedMode::DecadePerSecond => "1 decade/s",
            SpeedMode::CenturyPerSecond => "1 century/s",
            SpeedMode::MillenniumPerSecond => "1 millennium/s",
            SpeedMode::TenMillenniaPerSecond => "10 millennia/s",
        }
    }
}
