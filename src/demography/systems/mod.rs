//! Per-tick systems
//!
//! Each system is a pure function over the previous state, the config and
//! (where needed) a random source. The engine runs them in order.

mod growth;
mod rates;
mod stress;
mod technology;
mod warfare;

pub use growth::{growth_factor, next_population, PopulationUpdate};
pub use rates::{base_rates, jitter_rate, Rates};
pub use stress::{overpopulation_factor, overpopulation_stress};
pub use technology::derive_tech_level;
pub use warfare::{draw_wars, war_mortality};
