//! Simulation configuration with documented constants
//!
//! Every tunable number used by the population engine lives here.
//! The defaults reproduce the reference model exactly; a TOML file can
//! override any subset of them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Configuration for the population engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === INITIAL STATE ===
    /// Population after construction and after every reset
    pub initial_population: u64,

    /// Biological birth rate baseline (% per year) before modifiers
    pub base_birth_rate: f64,

    /// Biological death rate baseline (% per year) before modifiers
    pub base_death_rate: f64,

    // === RATE JITTER ===
    /// Half-width of the uniform jitter applied to each rate every tick
    ///
    /// At 0.2 a rate moves at most 0.2 percentage points either way.
    pub rate_variation: f64,

    /// Lowest value a jittered rate may take
    pub rate_floor: f64,

    // === GROWTH ===
    /// Largest fractional population change a single tick may apply
    ///
    /// Bounds the effect of large speed multipliers: at 0.1 no tick can
    /// move the population by more than 10%.
    pub max_change_per_tick: f64,

    /// Below this population, a shrinking population loses at most one
    /// individual per tick
    pub stabilization_threshold: u64,

    // === TECHNOLOGY ===
    /// Simulated years between consecutive technology tiers
    pub years_per_tech_level: f64,

    // === WAR ===
    /// Exclusive upper bound of the random component of the war count
    pub random_war_ceiling: u32,

    /// Each full block of this many people adds one more war
    pub population_per_war: u64,

    /// Death rate points added per active war
    pub war_mortality: f64,

    // === OVERPOPULATION ===
    /// Exponent applied to the overpopulation excess
    pub stress_exponent: f64,

    /// Multiplier applied after the exponent
    ///
    /// stress = (factor - 1)^exponent * scale
    pub stress_scale: f64,

    /// Fraction of stress subtracted from the birth rate
    pub stress_birth_share: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_population: 100,
            base_birth_rate: 2.1,
            base_death_rate: 1.8,

            rate_variation: 0.2,
            rate_floor: 0.1,

            max_change_per_tick: 0.1,
            stabilization_threshold: 10,

            years_per_tech_level: 500.0,

            random_war_ceiling: 5,
            population_per_war: 10_000,
            war_mortality: 0.5,

            stress_exponent: 1.5,
            stress_scale: 2.0,
            stress_birth_share: 0.3,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading simulation config");
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.initial_population == 0 {
            return Err(SimError::InvalidConfig(
                "initial_population must be at least 1".into(),
            ));
        }

        for (name, value) in [
            ("base_birth_rate", self.base_birth_rate),
            ("base_death_rate", self.base_death_rate),
            ("rate_floor", self.rate_floor),
            ("years_per_tech_level", self.years_per_tech_level),
            ("stress_exponent", self.stress_exponent),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("rate_variation", self.rate_variation),
            ("war_mortality", self.war_mortality),
            ("stress_scale", self.stress_scale),
            ("stress_birth_share", self.stress_birth_share),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        if !(self.max_change_per_tick > 0.0 && self.max_change_per_tick < 1.0) {
            return Err(SimError::InvalidConfig(format!(
                "max_change_per_tick ({}) must lie in (0, 1)",
                self.max_change_per_tick
            )));
        }

        if self.population_per_war == 0 {
            return Err(SimError::InvalidConfig(
                "population_per_war must be at least 1".into(),
            ));
        }

        if self.random_war_ceiling == 0 {
            return Err(SimError::InvalidConfig(
                "random_war_ceiling must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
