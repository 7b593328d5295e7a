//! Birth and death rate computation

use crate::core::config::SimulationConfig;
use crate::demography::random::RandomSource;
use crate::demography::technology::TechTier;

/// A birth/death rate pair in percent per year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub birth: f64,
    pub death: f64,
}

impl Rates {
    /// Net growth as a fraction of the population per year
    pub fn net_growth_rate(&self) -> f64 {
        (self.birth - self.death) / 100.0
    }
}

/// Baselines adjusted by technology, war and overpopulation stress
///
/// Stress always adds to mortality and removes `stress_birth_share` of
/// itself from natality. The birth rate may go negative here; the floor
/// is applied by [`jitter_rate`].
pub fn base_rates(
    config: &SimulationConfig,
    tier: &TechTier,
    war_mortality: f64,
    stress: f64,
) -> Rates {
    Rates {
        birth: config.base_birth_rate + tier.birth_bonus - stress * config.stress_birth_share,
        death: config.base_death_rate - tier.death_reduction + war_mortality + stress,
    }
}

/// Uniform jitter of +/- `rate_variation`, floored at `rate_floor`
pub fn jitter_rate<S: RandomSource>(rate: f64, config: &SimulationConfig, source: &mut S) -> f64 {
    let offset = (source.unit() - 0.5) * config.rate_variation * 2.0;
    (rate + offset).max(config.rate_floor)
}
