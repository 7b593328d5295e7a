//! War generation

use crate::core::config::SimulationConfig;
use crate::demography::random::RandomSource;

/// Fresh war count for this tick
///
/// A random component in [0, random_war_ceiling) plus one war per full
/// `population_per_war` people.
pub fn draw_wars<S: RandomSource>(population: u64, config: &SimulationConfig, source: &mut S) -> u32 {
    let random = source.below(config.random_war_ceiling);
    let crowding = (population / config.population_per_war).min(u32::MAX as u64) as u32;
    random.saturating_add(crowding)
}

/// Death rate points added by `wars` simultaneous conflicts
pub fn war_mortality(wars: u32, config: &SimulationConfig) -> f64 {
    wars as f64 * config.war_mortality
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_small_population_wars_bounded() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            assert!(draw_wars(9_999, &config, &mut rng) < 5);
        }
    }

    #[test]
    fn test_large_population_adds_wars() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let wars = draw_wars(35_000, &config, &mut rng);
            assert!((3..8).contains(&wars), "got {}", wars);
        }
    }

    #[test]
    fn test_mortality_per_war() {
        let config = SimulationConfig::default();
        assert_eq!(war_mortality(0, &config), 0.0);
        assert_eq!(war_mortality(4, &config), 2.0);
    }
}
