//! Run summary and serialization

use serde::{Deserialize, Serialize};

use crate::core::calendar::ElapsedTime;
use crate::core::types::Tick;
use crate::demography::engine::TickReport;
use crate::demography::state::SimulationState;
use crate::demography::technology::tier_at;
use crate::report::format_population;

/// A technology tier reached during a run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TechMilestone {
    pub tick: Tick,
    pub level: usize,
    pub name: String,
    /// Simulated year at which the tier was adopted
    pub year: f64,
}

/// Aggregate statistics over a sequence of ticks
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: Tick,
    pub initial_population: u64,
    pub peak_population: u64,
    pub min_population: u64,
    pub total_wars: u64,
    pub stabilized_ticks: u64,
    pub milestones: Vec<TechMilestone>,
    pub final_state: SimulationState,
}

impl RunSummary {
    pub fn new(initial: &SimulationState) -> Self {
        Self {
            ticks: 0,
            initial_population: initial.population,
            peak_population: initial.population,
            min_population: initial.population,
            total_wars: 0,
            stabilized_ticks: 0,
            milestones: Vec::new(),
            final_state: *initial,
        }
    }

    /// Fold one applied tick into the summary
    pub fn record(&mut self, report: &TickReport, state: &SimulationState) {
        self.ticks += 1;
        self.peak_population = self.peak_population.max(state.population);
        self.min_population = self.min_population.min(state.population);
        self.total_wars += report.wars as u64;
        if report.stabilized {
            self.stabilized_ticks += 1;
        }
        if let Some(advance) = report.tech_advance {
            self.milestones.push(TechMilestone {
                tick: report.tick,
                level: advance.to,
                name: tier_at(advance.to).name.to_string(),
                year: self.final_state.elapsed_years(),
            });
        }
        self.final_state = *state;
    }

    pub fn to_json(&self) -> crate::core::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let state = &self.final_state;
        format!(
            "Simulated {} ticks ({})\nPopulation {} -> {} (peak {}, low {})\nTechnology: {} | wars drawn: {} | stabilized ticks: {}",
            self.ticks,
            ElapsedTime::from_seconds(state.elapsed_sim_time),
            format_population(self.initial_population),
            format_population(state.population),
            format_population(self.peak_population),
            format_population(self.min_population),
            tier_at(state.tech_level).name,
            self.total_wars,
            self.stabilized_ticks,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;
    use crate::core::types::SpeedMode;
    use crate::demography::engine::PopulationEngine;
    use crate::demography::technology::MAX_TECH_LEVEL;

    #[test]
    fn test_summary_tracks_run() {
        let mut engine = PopulationEngine::seeded(SimulationConfig::default(), 42).unwrap();
        let mut summary = RunSummary::new(engine.state());

        for _ in 0..40 {
            let outcome = engine.advance(SpeedMode::MillenniumPerSecond).unwrap();
            if let Some(report) = outcome.report() {
                summary.record(report, engine.state());
            }
        }

        assert_eq!(summary.ticks, 40);
        assert_eq!(summary.final_state, *engine.state());
        assert!(summary.peak_population >= summary.min_population);
        assert!(summary.min_population >= 1);
        // 40 millennia pushes well past the top of the ladder
        assert_eq!(engine.state().tech_level, MAX_TECH_LEVEL);
        assert_eq!(summary.milestones.last().map(|m| m.level), Some(MAX_TECH_LEVEL));
        for pair in summary.milestones.windows(2) {
            assert!(pair[1].level > pair[0].level);
            assert!(pair[1].year > pair[0].year);
        }
    }

    #[test]
    fn test_json_contains_final_state() {
        let summary = RunSummary::new(&SimulationState::default());
        let json = summary.to_json().unwrap();
        assert!(json.contains("\"final_state\""));
        assert!(json.contains("\"population\": 100"));
    }
}
