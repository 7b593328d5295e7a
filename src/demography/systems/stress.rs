//! Overpopulation stress

use crate::core::config::SimulationConfig;

/// Population relative to carrying capacity, floored at 1
pub fn overpopulation_factor(population: u64, carrying_capacity: u64) -> f64 {
    if carrying_capacity == 0 {
        return 1.0;
    }
    (population as f64 / carrying_capacity as f64).max(1.0)
}

/// Stress produced by `factor`; zero at or under capacity
pub fn overpopulation_stress(factor: f64, config: &SimulationConfig) -> f64 {
    if factor <= 1.0 {
        return 0.0;
    }
    (factor - 1.0).powf(config.stress_exponent) * config.stress_scale
}
