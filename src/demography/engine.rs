//! The population engine
//!
//! Holds the single [`SimulationState`] and advances it one tick at a time.
//! A tick is computed on a copy of the state and committed in one
//! assignment, so a rejected tick leaves nothing behind.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::error::{Result, SimError};
use crate::core::types::{SpeedMode, Tick};
use crate::demography::random::RandomSource;
use crate::demography::state::{Phase, SimulationState};
use crate::demography::systems;
use crate::demography::technology::{tier_at, MAX_TECH_LEVEL};

/// Result of a call to [`PopulationEngine::step`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StepOutcome {
    Advanced(TickReport),
    /// The population is extinct; state was left untouched
    Extinct,
}

impl StepOutcome {
    pub fn report(&self) -> Option<&TickReport> {
        match self {
            StepOutcome::Advanced(report) => Some(report),
            StepOutcome::Extinct => None,
        }
    }
}

/// Intermediate values of one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: Tick,
    pub wars: u32,
    pub war_mortality: f64,
    pub stress: f64,
    pub net_growth_rate: f64,
    /// Clamped multiplicative growth applied this tick
    pub growth_factor: f64,
    pub stabilized: bool,
    pub tech_advance: Option<TechAdvance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechAdvance {
    pub from: usize,
    pub to: usize,
}

/// Owns the simulation state and the random source driving it
pub struct PopulationEngine<S: RandomSource = ChaCha8Rng> {
    config: SimulationConfig,
    state: SimulationState,
    source: S,
    tick: Tick,
}

impl PopulationEngine<ChaCha8Rng> {
    /// Engine seeded from OS entropy
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Self::with_source(config, ChaCha8Rng::from_entropy())
    }

    /// Engine with a repeatable random stream
    pub fn seeded(config: SimulationConfig, seed: u64) -> Result<Self> {
        Self::with_source(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<S: RandomSource> PopulationEngine<S> {
    pub fn with_source(config: SimulationConfig, source: S) -> Result<Self> {
        config.validate()?;
        let state = SimulationState::initial(&config);
        Ok(Self {
            config,
            state,
            source,
            tick: 0,
        })
    }

    /// Resume from a captured state
    ///
    /// The carrying capacity is re-derived from the tech level.
    pub fn from_state(config: SimulationConfig, state: SimulationState, source: S) -> Result<Self> {
        config.validate()?;

        if state.tech_level > MAX_TECH_LEVEL {
            return Err(SimError::InvalidState(format!(
                "tech_level {} exceeds ladder maximum {}",
                state.tech_level, MAX_TECH_LEVEL
            )));
        }
        if !state.elapsed_sim_time.is_finite() || state.elapsed_sim_time < 0.0 {
            return Err(SimError::InvalidState(format!(
                "elapsed_sim_time must be finite and non-negative, got {}",
                state.elapsed_sim_time
            )));
        }
        if !state.birth_rate.is_finite() || !state.death_rate.is_finite() {
            return Err(SimError::InvalidState("rates must be finite".into()));
        }

        let state = SimulationState {
            carrying_capacity: tier_at(state.tech_level).capacity,
            ..state
        };

        Ok(Self {
            config,
            state,
            source,
            tick: 0,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn snapshot(&self) -> SimulationState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Ticks applied since construction or the last reset
    pub fn ticks(&self) -> Tick {
        self.tick
    }

    /// Advance by one real second at the given speed
    pub fn advance(&mut self, mode: SpeedMode) -> Result<StepOutcome> {
        self.step(mode.multiplier())
    }

    /// Advance the simulation by `sim_seconds` of simulated time
    pub fn step(&mut self, sim_seconds: f64) -> Result<StepOutcome> {
        if !sim_seconds.is_finite() || sim_seconds <= 0.0 {
            tracing::warn!(sim_seconds, "rejected tick with invalid elapsed time");
            return Err(SimError::InvalidElapsed(sim_seconds));
        }

        if self.state.phase() == Phase::Extinct {
            tracing::warn!(tick = self.tick, "population extinct, tick ignored");
            return Ok(StepOutcome::Extinct);
        }

        let config = &self.config;
        let prev = self.state;
        let mut next = prev;

        // 1. Technology
        let tech_level = systems::derive_tech_level(prev.tech_level, prev.elapsed_sim_time, config);
        let tech_advance = if tech_level != prev.tech_level {
            next.tech_level = tech_level;
            next.carrying_capacity = tier_at(tech_level).capacity;
            Some(TechAdvance {
                from: prev.tech_level,
                to: tech_level,
            })
        } else {
            None
        };
        let tier = tier_at(next.tech_level);

        // 2. Wars
        let wars = systems::draw_wars(prev.population, config, &mut self.source);
        let war_mortality = systems::war_mortality(wars, config);

        // 3. Overpopulation
        let overpopulation = systems::overpopulation_factor(prev.population, next.carrying_capacity);
        let stress = systems::overpopulation_stress(overpopulation, config);

        // 4-5. Rates
        let base = systems::base_rates(config, tier, war_mortality, stress);
        let rates = systems::Rates {
            birth: systems::jitter_rate(base.birth, config, &mut self.source),
            death: systems::jitter_rate(base.death, config, &mut self.source),
        };

        // 6-7. Growth
        let net_growth_rate = rates.net_growth_rate();
        let growth_factor = systems::growth_factor(net_growth_rate, sim_seconds, config);
        let update = systems::next_population(prev.population, growth_factor, net_growth_rate, config);

        // 8. Commit
        next.population = update.population;
        next.birth_rate = rates.birth;
        next.death_rate = rates.death;
        next.wars_count = wars;
        next.overpopulation_factor = overpopulation;
        next.elapsed_sim_time = prev.elapsed_sim_time + sim_seconds;

        self.state = next;
        self.tick += 1;

        if let Some(advance) = tech_advance {
            tracing::info!(
                from = tier_at(advance.from).name,
                to = tier.name,
                year = prev.elapsed_years(),
                capacity = tier.capacity,
                "technology advanced"
            );
        }

        tracing::debug!(
            tick = self.tick,
            population = next.population,
            birth_rate = next.birth_rate,
            death_rate = next.death_rate,
            wars,
            stress,
            growth_factor,
            stabilized = update.stabilized,
            "tick applied"
        );

        Ok(StepOutcome::Advanced(TickReport {
            tick: self.tick,
            wars,
            war_mortality,
            stress,
            net_growth_rate,
            growth_factor,
            stabilized: update.stabilized,
            tech_advance,
        }))
    }

    /// Restore the initial state. Idempotent.
    pub fn reset(&mut self) {
        self.state = SimulationState::initial(&self.config);
        self.tick = 0;
        tracing::info!(population = self.state.population, "simulation reset");
    }
}
