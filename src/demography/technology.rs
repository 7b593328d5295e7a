//! The technology ladder
//!
//! A fixed sequence of tiers. The engine indexes into it by elapsed
//! simulated time; tiers are never mutated.

use serde::Serialize;

/// One rung of the technology ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TechTier {
    pub name: &'static str,
    pub level: usize,
    /// Percentage points added to the birth rate
    pub birth_bonus: f64,
    /// Percentage points subtracted from the death rate
    pub death_reduction: f64,
    /// Carrying capacity granted by this tier
    pub capacity: u64,
}

const fn tier(
    name: &'static str,
    level: usize,
    birth_bonus: f64,
    death_reduction: f64,
    capacity: u64,
) -> TechTier {
    TechTier {
        name,
        level,
        birth_bonus,
        death_reduction,
        capacity,
    }
}

pub const TECHNOLOGY_LADDER: [TechTier; 12] = [
    tier("Stone tools", 0, 0.0, 0.0, 1_000),
    tier("Agriculture", 1, 0.2, 0.1, 5_000),
    tier("Bronze working", 2, 0.25, 0.2, 20_000),
    tier("Iron working", 3, 0.3, 0.3, 50_000),
    tier("Writing and law", 4, 0.3, 0.4, 100_000),
    tier("Medicine", 5, 0.2, 0.6, 250_000),
    tier("Printing press", 6, 0.1, 0.7, 500_000),
    tier("Steam power", 7, 0.1, 0.9, 1_000_000),
    tier("Electricity", 8, 0.0, 1.1, 5_000_000),
    tier("Vaccines", 9, -0.2, 1.3, 10_000_000),
    tier("Computing", 10, -0.4, 1.4, 50_000_000),
    tier("AI & robotics", 11, -0.6, 1.5, 100_000_000),
];

/// Highest valid tech level
pub const MAX_TECH_LEVEL: usize = TECHNOLOGY_LADDER.len() - 1;

/// Look up a tier, saturating at the top of the ladder
pub fn tier_at(level: usize) -> &'static TechTier {
    &TECHNOLOGY_LADDER[level.min(MAX_TECH_LEVEL)]
}

/// Tech level reached after `years` of simulated time
pub fn level_for_years(years: f64, years_per_level: f64) -> usize {
    if !years.is_finite() || years <= 0.0 {
        return 0;
    }
    let raw = (years / years_per_level).floor();
    if raw >= MAX_TECH_LEVEL as f64 {
        MAX_TECH_LEVEL
    } else {
        raw as usize
    }
}
