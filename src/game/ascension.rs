//! Ascension: the prestige reset.
//!
//! Ascending trades the entire current run for a permanent production
//! multiplier. The new level is a flat recomputation from the run's totals:
//! it overwrites the previous level rather than adding to it (a preserved
//! quirk; see DESIGN.md), clamped to at least 1 so production never nulls
//! out.

use crate::game::state::GameState;
use crate::game::types::{Resource, Sector};

/// Population per ascension point.
const POPULATION_PER_POINT: u64 = 50_000;
/// Summed resources per ascension point.
const RESOURCES_PER_POINT: u64 = 500_000;
/// Summed buildings per ascension point.
const BUILDINGS_PER_POINT: u64 = 25;
/// Battle power per ascension point.
const BATTLE_POWER_PER_POINT: u64 = 100;

/// Which part of the run an ascension score is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AscensionSource {
    /// Current population, one point per 50 000.
    Population,
    /// Sum of all stockpiles, one point per 500 000.
    Resources,
    /// Sum of all building counts, one point per 25.
    Buildings,
    /// Battle power, one point per 100.
    Battle,
    /// Sum of the four categories.
    All,
}

impl GameState {
    /// Ascension points the current run is worth in one category.
    #[must_use]
    pub fn ascension_value(&self, source: AscensionSource) -> u64 {
        match source {
            AscensionSource::Population => {
                #[allow(clippy::cast_sign_loss)]
                let population = self.population.max(0) as u64;
                population / POPULATION_PER_POINT
            }
            AscensionSource::Resources => {
                let total: u64 = Resource::ALL
                    .iter()
                    .map(|&r| self.resource_get(r))
                    .fold(0u64, u64::saturating_add);
                total / RESOURCES_PER_POINT
            }
            AscensionSource::Buildings => {
                let total: u64 = Sector::ALL
                    .iter()
                    .map(|&s| self.production_line(s).buildings)
                    .fold(0u64, u64::saturating_add);
                total / BUILDINGS_PER_POINT
            }
            AscensionSource::Battle => self.battle_power / BATTLE_POWER_PER_POINT,
            AscensionSource::All => {
                self.ascension_value(AscensionSource::Population)
                    + self.ascension_value(AscensionSource::Resources)
                    + self.ascension_value(AscensionSource::Buildings)
                    + self.ascension_value(AscensionSource::Battle)
            }
        }
    }

    /// Reset the run, keeping only the freshly computed ascension level.
    ///
    /// Every other field returns to its first-run default, including the
    /// shop cost table and the battle state.
    pub fn ascend_now(&mut self) {
        let level = self.ascension_value(AscensionSource::All).max(1);
        *self = GameState::new();
        self.ascension = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::shop::ShopItem;

    fn run_worth_nine() -> GameState {
        let mut state = GameState::new();
        state.population = 100_000;
        state.resource_set(Resource::Wood, 600_000);
        state.resource_set(Resource::Elements, 400_000);
        for _ in 0..50 {
            state.production_build(Sector::Food);
        }
        state.battle_power = 300;
        state
    }

    #[test]
    fn test_category_values() {
        let state = run_worth_nine();
        assert_eq!(state.ascension_value(AscensionSource::Population), 2);
        assert_eq!(state.ascension_value(AscensionSource::Resources), 2);
        assert_eq!(state.ascension_value(AscensionSource::Buildings), 2);
        assert_eq!(state.ascension_value(AscensionSource::Battle), 3);
        assert_eq!(state.ascension_value(AscensionSource::All), 9);
    }

    #[test]
    fn test_ascend_resets_run_and_sets_level() {
        let mut state = run_worth_nine();
        state.food = 12_345;
        state.ascend_now();

        assert_eq!(state.ascension(), 9);
        assert_eq!(state.housing(), 10);
        assert_eq!(state.population(), 10);
        assert_eq!(state.food(), 100);
        for resource in Resource::ALL {
            assert_eq!(state.resource_get(resource), 0);
        }
        for sector in Sector::ALL {
            assert_eq!(state.production_line(sector).buildings, 0);
            assert_eq!(state.production_line(sector).multiplier, 1);
        }
        assert_eq!(state.battle_power(), 0);
        assert_eq!(state.battle().targets(), 10);
        assert_eq!(state.battle().timer(), -1);
    }

    #[test]
    fn test_ascend_overwrites_rather_than_accumulates() {
        let mut state = run_worth_nine();
        state.ascend_now();
        assert_eq!(state.ascension(), 9);
        // A second, worthless ascension drops back to the floor of 1.
        state.ascend_now();
        assert_eq!(state.ascension(), 1);
    }

    #[test]
    fn test_ascend_resets_shop_costs() {
        let mut state = run_worth_nine();
        state.resource_set(Resource::Wood, 1_000_000);
        state.resource_set(Resource::Stone, 1_000_000);
        assert!(state.apply(crate::game::commands::Command::Buy(ShopItem::Housing)));
        assert_ne!(state.shop().price(ShopItem::Housing), [10, 10]);
        state.ascend_now();
        assert_eq!(state.shop().price(ShopItem::Housing), [10, 10]);
    }

    #[test]
    fn test_negative_population_scores_zero() {
        let mut state = GameState::new();
        state.population = -100;
        assert_eq!(state.ascension_value(AscensionSource::Population), 0);
    }
}
