//! Simulation state record

use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::demography::technology::tier_at;

/// Everything one tick reads and writes
///
/// Owned by the engine. Callers get a shared borrow or a copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub population: u64,
    /// Births per 100 people per year
    pub birth_rate: f64,
    /// Deaths per 100 people per year
    pub death_rate: f64,
    /// Simulated seconds since the last reset
    pub elapsed_sim_time: f64,
    pub tech_level: usize,
    pub carrying_capacity: u64,
    /// Conflicts active during the last tick (not a running total)
    pub wars_count: u32,
    /// population / carrying_capacity, floored at 1
    pub overpopulation_factor: f64,
}

impl SimulationState {
    pub fn initial(config: &SimulationConfig) -> Self {
        Self {
            population: config.initial_population,
            birth_rate: config.base_birth_rate,
            death_rate: config.base_death_rate,
            elapsed_sim_time: 0.0,
            tech_level: 0,
            carrying_capacity: tier_at(0).capacity,
            wars_count: 0,
            overpopulation_factor: 1.0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.population == 0 {
            Phase::Extinct
        } else {
            Phase::Alive
        }
    }

    pub fn net_growth(&self) -> f64 {
        self.birth_rate - self.death_rate
    }

    pub fn elapsed_years(&self) -> f64 {
        crate::core::calendar::seconds_to_years(self.elapsed_sim_time)
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::initial(&SimulationConfig::default())
    }
}

/// Lifecycle of a population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Alive,
    /// Terminal until reset
    Extinct,
}
