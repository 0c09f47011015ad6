//! The fixed-step economy: production, food, and population dynamics.
//!
//! The driver calls [`GameState::tick`] once per frame; every 60th call runs
//! one economic step. Step order matters and is fixed:
//!
//! 1. Clamp population to zero (a lost battle may have pushed it negative).
//! 2. Recompute free population and labor efficiency.
//! 3. Apply production in [`Sector`] declaration order. Refining sectors
//!    consume inputs produced earlier in the same step: fiber sees this
//!    step's wood, iron sees this step's stone, steel sees both refiners'
//!    output.
//! 4. Consume food and grow or starve the population.
//! 5. Advance the battle countdown and resolve on expiry.
//!
//! # Labor efficiency
//!
//! Each effective unit of production output demands one worker. When demand
//! exceeds population, every line is scaled by `population / demand`. A zero
//! population with standing demand is treated as full efficiency rather than
//! zero; see DESIGN.md for the record of that decision.

use crate::game::battle::ChanceSource;
use crate::game::state::GameState;
use crate::game::types::{Resource, Sector};

/// Sub-ticks per economic step. At the driver's 60 frames per second, one
/// step corresponds to roughly one second of play.
pub const TICKS_PER_STEP: u32 = 60;

/// Fraction of the population that must be fed each step.
const FOOD_UPKEEP_RATE: f64 = 0.1;

/// Population growth factor when housing has headroom and food sufficed.
const GROWTH_RATE: f64 = 1.1;

/// Population shrink factor when food ran out.
const STARVATION_RATE: f64 = 0.9;

impl GameState {
    /// Advance one sub-tick; every [`TICKS_PER_STEP`]th call runs one
    /// economic step. Never blocks.
    pub fn tick(&mut self, rng: &mut dyn ChanceSource) {
        self.counting += 1;
        if self.counting == TICKS_PER_STEP {
            self.counting = 0;
            self.economic_step(rng);
        }
    }

    /// Labor efficiency for the current population and demand.
    fn labor_efficiency(&self) -> f64 {
        if self.free_population >= 0 || self.population == 0 {
            return 1.0;
        }
        // demand = population - free_population, strictly positive here.
        #[allow(clippy::cast_precision_loss)]
        let efficiency =
            self.population as f64 / (self.population - self.free_population) as f64;
        efficiency
    }

    /// One full economic step. See the module docs for the step order.
    pub(crate) fn economic_step(&mut self, rng: &mut dyn ChanceSource) {
        if self.population < 0 {
            self.population = 0;
        }

        // Labor: every effective unit of output demands one worker.
        #[allow(clippy::cast_possible_wrap)]
        let demand = self.labor_demand() as i64;
        self.free_population = self.population - demand;
        let efficiency = self.labor_efficiency();

        // Production, in sector order.
        for sector in Sector::ALL {
            let amount = production_amount(self.production_get(sector), efficiency, self.ascension);
            match sector {
                Sector::Food => {
                    self.food = self.food.saturating_add(amount);
                }
                Sector::Steel => {
                    if self.resource_get(Resource::Iron) >= amount
                        && self.resource_get(Resource::Fiber) >= amount
                    {
                        self.resource_add(Resource::Steel, amount);
                        self.resource_take(Resource::Iron, amount);
                        self.resource_take(Resource::Fiber, amount);
                    }
                }
                Sector::Fiber => {
                    if self.resource_get(Resource::Wood) >= amount {
                        self.resource_add(Resource::Fiber, amount);
                        self.resource_take(Resource::Wood, amount);
                    }
                }
                Sector::Iron => {
                    if self.resource_get(Resource::Stone) >= amount {
                        self.resource_add(Resource::Iron, amount);
                        self.resource_take(Resource::Stone, amount);
                    }
                }
                Sector::Wood => self.resource_add(Resource::Wood, amount),
                Sector::Stone => self.resource_add(Resource::Stone, amount),
                Sector::Elements => self.resource_add(Resource::Elements, amount),
            }
        }

        // Food upkeep, then growth or starvation.
        #[allow(clippy::cast_precision_loss)]
        let upkeep = self.population as f64 * FOOD_UPKEEP_RATE;
        #[allow(clippy::cast_precision_loss)]
        let food = self.food as f64;
        if food >= upkeep {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                self.food = (food - upkeep).round().max(0.0) as u64;
            }
            #[allow(clippy::cast_possible_wrap)]
            let housing = self.housing as i64;
            if housing > self.population {
                #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
                let grown = (self.population as f64 * GROWTH_RATE).round() as i64;
                self.population = grown.min(housing);
            }
        } else {
            self.food = 0;
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            let shrunk = (self.population as f64 * STARVATION_RATE).round() as i64;
            self.population = shrunk.max(0);
        }

        // Battle countdown.
        if self.battle.timer != -1 {
            self.battle.timer -= 1;
            if self.battle.timer == 0 {
                self.battle.timer = -1;
                self.resolve_battle(rng);
            }
        }
    }
}

/// Scaled output of one production line for one step: effective output times
/// labor efficiency times the ascension multiplier, truncated.
fn production_amount(effective: u64, efficiency: f64, ascension: u64) -> u64 {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let amount = (effective as f64 * efficiency * ascension as f64) as u64;
    amount
}

/// Kani formal verification proofs.
///
/// These prove arithmetic safety properties of the economy math for all
/// possible inputs. Run with: `cargo kani`
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Labor efficiency is always within [0, 1] for reachable states.
    #[kani::proof]
    fn prove_efficiency_in_unit_range() {
        let population: i64 = kani::any();
        let demand: i64 = kani::any();

        // Reachable states: population clamped non-negative, demand
        // non-negative (sum of unsigned outputs).
        if population < 0 || demand < 0 {
            return;
        }

        let free = population - demand;
        let efficiency = if free >= 0 || population == 0 {
            1.0
        } else {
            population as f64 / (population - free) as f64
        };

        assert!(efficiency >= 0.0);
        assert!(efficiency <= 1.0);
        assert!(!efficiency.is_nan());
    }

    /// Production amounts never exceed the unscaled effective output times
    /// the ascension multiplier.
    #[kani::proof]
    fn prove_production_amount_bounded() {
        let effective: u64 = kani::any();
        let ascension: u64 = kani::any();

        // Bound inputs to the f64-exact range for tractability.
        if effective > 1 << 20 || ascension > 1 << 10 {
            return;
        }

        let full = production_amount(effective, 1.0, ascension);
        assert!(full <= effective * ascension);

        let scaled = production_amount(effective, 0.5, ascension);
        assert!(scaled <= full);
    }
}
