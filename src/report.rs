//! Display helpers for drivers
//!
//! Pure formatting over engine state: population magnitudes, growth
//! direction and longer-term trend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Abbreviate a population count: 1.2K, 3.4M, 5.6B, 7.8T
pub fn format_population(population: u64) -> String {
    let n = population as f64;
    if n >= 1e12 {
        format!("{:.1}T", n / 1e12)
    } else if n >= 1e9 {
        format!("{:.1}B", n / 1e9)
    } else if n >= 1e6 {
        format!("{:.1}M", n / 1e6)
    } else if n >= 1e3 {
        format!("{:.1}K", n / 1e3)
    } else {
        population.to_string()
    }
}

/// Sign of the net growth rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthDirection {
    Growth,
    Decline,
    Stable,
}

impl GrowthDirection {
    /// `net` is birth rate minus death rate, in percentage points
    pub fn from_net(net: f64) -> Self {
        if net > 0.0 {
            GrowthDirection::Growth
        } else if net < 0.0 {
            GrowthDirection::Decline
        } else {
            GrowthDirection::Stable
        }
    }
}

impl fmt::Display for GrowthDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GrowthDirection::Growth => "growth",
            GrowthDirection::Decline => "decline",
            GrowthDirection::Stable => "stable",
        };
        f.write_str(label)
    }
}

/// Coarse trend with a dead band of half a percentage point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthTrend {
    Rising,
    Falling,
    Steady,
}

impl GrowthTrend {
    const DEAD_BAND: f64 = 0.5;

    pub fn from_net(net: f64) -> Self {
        if net > Self::DEAD_BAND {
            GrowthTrend::Rising
        } else if net < -Self::DEAD_BAND {
            GrowthTrend::Falling
        } else {
            GrowthTrend::Steady
        }
    }
}

impl fmt::Display for GrowthTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GrowthTrend::Rising => "RISING",
            GrowthTrend::Falling => "FALLING",
            GrowthTrend::Steady => "STEADY",
        };
        f.write_str(label)
    }
}
