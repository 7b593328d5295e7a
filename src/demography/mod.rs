//! Demographic simulation
//!
//! A single population evolving under stochastic birth and death rates,
//! modulated by a technology ladder, recurring wars and overpopulation
//! stress. The host calls [`PopulationEngine::step`] once per real-time
//! interval with the simulated seconds that interval represents.

pub mod engine;
pub mod output;
pub mod random;
pub mod state;
pub mod systems;
pub mod technology;

pub use engine::{PopulationEngine, StepOutcome, TechAdvance, TickReport};
pub use output::{RunSummary, TechMilestone};
pub use random::RandomSource;
pub use state::{Phase, SimulationState};
pub use technology::{TechTier, MAX_TECH_LEVEL, TECHNOLOGY_LADDER};
