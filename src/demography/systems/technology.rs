//! Technology advancement

use crate::core::calendar::seconds_to_years;
use crate::core::config::SimulationConfig;
use crate::demography::technology::level_for_years;

/// Tech level after `elapsed_sim_time` seconds, never below `current`
pub fn derive_tech_level(current: usize, elapsed_sim_time: f64, config: &SimulationConfig) -> usize {
    let derived = level_for_years(seconds_to_years(elapsed_sim_time), config.years_per_tech_level);
    derived.max(current)
}
