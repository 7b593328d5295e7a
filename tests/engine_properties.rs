//! Property tests for per-tick invariants

use proptest::prelude::*;

use population_sim::core::{SimulationConfig, SpeedMode};
use population_sim::demography::{PopulationEngine, SimulationState, MAX_TECH_LEVEL};

fn speed_mode() -> impl Strategy<Value = SpeedMode> {
    (1u8..=8).prop_map(|id| SpeedMode::from_id(id).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tick_invariants_hold(seed in any::<u64>(), modes in prop::collection::vec(speed_mode(), 1..200)) {
        let mut engine = PopulationEngine::seeded(SimulationConfig::default(), seed).unwrap();
        let mut last_level = engine.state().tech_level;

        for mode in modes {
            let report = *engine.advance(mode).unwrap().report().unwrap();
            let state = engine.state();

            prop_assert!(state.population >= 1);
            prop_assert!(state.birth_rate >= 0.1);
            prop_assert!(state.death_rate >= 0.1);
            prop_assert!(report.growth_factor >= 0.9 && report.growth_factor <= 1.1);
            prop_assert!(state.tech_level >= last_level);
            prop_assert!(state.tech_level <= MAX_TECH_LEVEL);
            prop_assert!(state.overpopulation_factor >= 1.0);
            last_level = state.tech_level;
        }
    }

    #[test]
    fn any_positive_elapsed_is_bounded(
        seed in any::<u64>(),
        population in 1u64..5_000_000,
        sim_seconds in 1e-3f64..1e15,
    ) {
        let state = SimulationState { population, ..SimulationState::default() };
        let mut engine = PopulationEngine::from_state(
            SimulationConfig::default(),
            state,
            {
                use rand::SeedableRng;
                rand_chacha::ChaCha8Rng::seed_from_u64(seed)
            },
        ).unwrap();

        let report = *engine.step(sim_seconds).unwrap().report().unwrap();
        let after = engine.state().population as f64;

        prop_assert!(report.growth_factor >= 0.9 && report.growth_factor <= 1.1);
        prop_assert!(after >= 1.0);
        // Rounding adds at most half an individual on top of the 10% clamp
        prop_assert!(after <= population as f64 * 1.1 + 0.5);
        prop_assert!(after >= (population as f64 * 0.9 - 0.5).min(population as f64 - 1.0).max(1.0));
    }

    #[test]
    fn reset_is_idempotent(seed in any::<u64>(), ticks in 0usize..50) {
        let mut engine = PopulationEngine::seeded(SimulationConfig::default(), seed).unwrap();
        for _ in 0..ticks {
            engine.advance(SpeedMode::MillenniumPerSecond).unwrap();
        }
        engine.reset();
        let once = engine.snapshot();
        engine.reset();
        prop_assert_eq!(once, engine.snapshot());
        prop_assert_eq!(once, SimulationState::default());
    }
}
