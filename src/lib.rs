//! Population Sim - tick-driven demographic simulation

pub mod core;
pub mod demography;
pub mod report;
