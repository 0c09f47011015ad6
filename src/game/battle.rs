//! Battle state machine and resolution.
//!
//! Battles are a timed gamble: starting one fixes the success chance at
//! `battle_power / targets` and arms a 15-step countdown that the economic
//! step decrements. When the countdown reaches zero the battle resolves
//! against one uniform draw: a win banks `targets` kills and doubles the
//! target count, a loss costs ten population per target.
//!
//! Randomness is injected through [`ChanceSource`] so the simulation stays
//! deterministic under test and replay; [`SplitMixChance`] is the default
//! seeded stream.

use crate::game::state::GameState;
use crate::game::types::Resource;

/// Countdown length, in economic steps, of a started battle.
pub const BATTLE_COUNTDOWN: i64 = 15;

/// Starting number of battle targets.
pub const DEFAULT_BATTLE_TARGETS: u64 = 10;

/// Population lost per target when a battle is lost.
pub const LOSS_PER_TARGET: u64 = 10;

/// Outcome of the most recent battle, consumed once by the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// No unreported outcome.
    None,
    /// The last battle was lost.
    Loss,
    /// The last battle was won.
    Win,
}

impl BattleOutcome {
    /// Encode for the positional save format (-1 / 0 / 1).
    #[must_use]
    pub(crate) const fn to_wire(self) -> i64 {
        match self {
            BattleOutcome::None => -1,
            BattleOutcome::Loss => 0,
            BattleOutcome::Win => 1,
        }
    }

    /// Decode from the positional save format. Unknown values mean "none".
    #[must_use]
    pub(crate) const fn from_wire(value: i64) -> Self {
        match value {
            0 => BattleOutcome::Loss,
            1 => BattleOutcome::Win,
            _ => BattleOutcome::None,
        }
    }
}

/// Battle sub-state of the aggregate.
#[derive(Debug, Clone, Copy)]
pub struct BattleState {
    /// Success chance fixed when the battle was started. Uncapped: values
    /// above 1.0 mean a guaranteed win.
    pub(crate) chance: f64,
    /// Number of targets in the next battle; doubles after every win.
    pub(crate) targets: u64,
    /// Steps until resolution, or -1 when no battle is in progress.
    pub(crate) timer: i64,
    /// Unconsumed outcome of the last resolution.
    pub(crate) last: BattleOutcome,
}

impl Default for BattleState {
    fn default() -> Self {
        Self {
            chance: 0.0,
            targets: DEFAULT_BATTLE_TARGETS,
            timer: -1,
            last: BattleOutcome::None,
        }
    }
}

impl BattleState {
    /// Success chance fixed at battle start.
    #[must_use]
    pub const fn chance(&self) -> f64 {
        self.chance
    }

    /// Targets in the next (or in-progress) battle.
    #[must_use]
    pub const fn targets(&self) -> u64 {
        self.targets
    }

    /// Steps until resolution, or -1 when idle.
    #[must_use]
    pub const fn timer(&self) -> i64 {
        self.timer
    }

    /// Whether a battle is counting down.
    #[must_use]
    pub const fn in_progress(&self) -> bool {
        self.timer != -1
    }
}

/// Source of uniform draws in `[0, 1)` for battle resolution.
///
/// The driver supplies one per session; tests supply fixed sequences.
pub trait ChanceSource {
    /// Next uniform draw in `[0, 1)`.
    fn roll(&mut self) -> f64;
}

/// Deterministic SplitMix64 stream exposed as uniform `[0, 1)` draws.
///
/// SplitMix64 needs no warm-up and visits every 64-bit state exactly once,
/// so two sessions with the same seed replay the same battles.
#[derive(Debug, Clone, Copy)]
pub struct SplitMixChance {
    state: u64,
}

impl SplitMixChance {
    /// Create a stream from a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    const fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl ChanceSource for SplitMixChance {
    fn roll(&mut self) -> f64 {
        // 53 significant bits, the same construction rand uses for f64.
        #[allow(clippy::cast_precision_loss)]
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        unit
    }
}

impl GameState {
    /// Start a battle if none is in progress.
    ///
    /// Fixes the success chance at `battle_power / targets` (uncapped) and
    /// arms the countdown. Returns `false`, changing nothing, if a battle is
    /// already counting down.
    pub fn battle_start(&mut self) -> bool {
        if self.battle.in_progress() {
            return false;
        }
        self.battle.chance = self.battle_success_chance();
        self.battle.timer = BATTLE_COUNTDOWN;
        true
    }

    /// The success chance a battle started now would have.
    #[must_use]
    pub fn battle_success_chance(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let chance = self.battle_power as f64 / self.battle.targets as f64;
        chance
    }

    /// Return the unconsumed outcome of the last battle and clear it.
    ///
    /// Display-and-clear: each resolution is observable exactly once.
    pub const fn take_last_outcome(&mut self) -> BattleOutcome {
        let outcome = self.battle.last;
        self.battle.last = BattleOutcome::None;
        outcome
    }

    /// Resolve the battle whose countdown just expired.
    ///
    /// Called by the economic step with the timer already returned to -1.
    pub(crate) fn resolve_battle(&mut self, rng: &mut dyn ChanceSource) {
        if rng.roll() < self.battle.chance {
            self.resource_add(Resource::Kills, self.battle.targets);
            self.battle.targets = self.battle.targets.saturating_mul(2);
            self.battle.last = BattleOutcome::Win;
        } else {
            #[allow(clippy::cast_possible_wrap)]
            let casualties = self.battle.targets.saturating_mul(LOSS_PER_TARGET) as i64;
            self.population -= casualties;
            self.battle.last = BattleOutcome::Loss;
        }
    }
}
