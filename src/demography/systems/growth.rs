//! Population growth

use crate::core::calendar::SECONDS_PER_YEAR;
use crate::core::config::SimulationConfig;

/// Multiplicative growth for one tick, clamped to 1 +/- max_change_per_tick
pub fn growth_factor(net_growth_rate: f64, sim_seconds: f64, config: &SimulationConfig) -> f64 {
    let raw = net_growth_rate * sim_seconds / SECONDS_PER_YEAR;
    let limit = config.max_change_per_tick;
    1.0 + raw.clamp(-limit, limit)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationUpdate {
    pub population: u64,
    /// The small-population decline override replaced the multiplicative result
    pub stabilized: bool,
}

/// Apply `factor` to `population`
///
/// The result never drops below 1. When it would land under
/// `stabilization_threshold` while shrinking, only one individual is lost.
pub fn next_population(
    population: u64,
    factor: f64,
    net_growth_rate: f64,
    config: &SimulationConfig,
) -> PopulationUpdate {
    let scaled = (population as f64 * factor).round().max(1.0) as u64;

    if scaled < config.stabilization_threshold && net_growth_rate < 0.0 {
        return PopulationUpdate {
            population: population.saturating_sub(1).max(1),
            stabilized: true,
        };
    }

    PopulationUpdate {
        population: scaled,
        stabilized: false,
    }
}
