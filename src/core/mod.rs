pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::{ElapsedTime, SECONDS_PER_YEAR};
pub use config::SimulationConfig;
pub use error::{Result, SimError};
pub use types::SpeedMode;
