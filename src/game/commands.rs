//! Player-intent commands.
//!
//! The display layer never mutates state directly: every player action
//! arrives as a [`Command`] and is applied synchronously and atomically by
//! [`GameState::apply`]. Invalid or unaffordable commands are silent no-ops
//! (`apply` reports them with its return value so drivers can surface a
//! rejection, but state is untouched).
//!
//! The build-scene gathers and both work actions credit their `clicked`
//! stats (and food's `gathered` stat) with the *wood* click yield, whatever
//! resource was actually clicked; only the battle-scene elements gather
//! uses its own yield. Existing saves carry stats accumulated under that
//! rule, so it stays. See DESIGN.md.

use crate::game::shop::ShopItem;
use crate::game::state::GameState;
use crate::game::types::{ClickKind, Resource};

/// A discrete player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click-gather a resource (or food). `Fiber` and `Iron` are not
    /// directly gatherable and are rejected; use the work commands.
    Gather(ClickKind),
    /// Convert wood into fiber at the current work cost.
    WorkFiber,
    /// Convert stone into iron at the current work cost.
    WorkIron,
    /// Purchase a shop entry.
    Buy(ShopItem),
    /// Begin a battle countdown.
    StartBattle,
    /// Prestige-reset the run.
    Ascend,
}

impl GameState {
    /// Apply one player command.
    ///
    /// Returns whether the command took effect; a `false` means the state is
    /// exactly as it was (battle already running, purchase unaffordable,
    /// work inputs missing, or a gather of a work-only yield).
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Gather(ClickKind::Wood) => {
                let amount = self.click_yield(ClickKind::Wood);
                self.resource_add(Resource::Wood, amount);
                self.credit_click(ClickKind::Wood);
                true
            }
            Command::Gather(ClickKind::Stone) => {
                let amount = self.click_yield(ClickKind::Stone);
                self.resource_add(Resource::Stone, amount);
                self.credit_click(ClickKind::Stone);
                true
            }
            Command::Gather(ClickKind::Food) => {
                let amount = self.click_yield(ClickKind::Food);
                self.food = self.food.saturating_add(amount);
                self.credit_click(ClickKind::Food);
                // Food is not a stockpiled resource, so its gathered stat
                // is credited here. The wood yield is intentional; see the
                // module docs.
                let wood_yield = self.click_yield(ClickKind::Wood);
                self.stats.food_gathered = self.stats.food_gathered.saturating_add(wood_yield);
                true
            }
            Command::Gather(ClickKind::Elements) => {
                let amount = self.click_yield(ClickKind::Elements);
                self.resource_add(Resource::Elements, amount);
                // The battle scene credits the elements yield, not wood's.
                let i = ClickKind::Elements as usize;
                self.stats.clicked[i] = self.stats.clicked[i].saturating_add(amount);
                true
            }
            Command::Gather(ClickKind::Fiber | ClickKind::Iron) => false,
            Command::WorkFiber => {
                if self.resource_get(Resource::Wood) < self.work_cost_fiber {
                    return false;
                }
                self.resource_take(Resource::Wood, self.work_cost_fiber);
                self.resource_add(Resource::Fiber, self.click_yield(ClickKind::Fiber));
                self.credit_click(ClickKind::Fiber);
                true
            }
            Command::WorkIron => {
                if self.resource_get(Resource::Stone) < self.work_cost_iron {
                    return false;
                }
                self.resource_take(Resource::Stone, self.work_cost_iron);
                self.resource_add(Resource::Iron, self.click_yield(ClickKind::Iron));
                self.credit_click(ClickKind::Iron);
                true
            }
            Command::Buy(item) => self.buy(item),
            Command::StartBattle => self.battle_start(),
            Command::Ascend => {
                self.ascend_now();
                true
            }
        }
    }

    /// Bump a clicked stat by the wood yield; see the module docs.
    const fn credit_click(&mut self, kind: ClickKind) {
        let wood_yield = self.click_yield[ClickKind::Wood as usize];
        let i = kind as usize;
        self.stats.clicked[i] = self.stats.clicked[i].saturating_add(wood_yield);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_wood() {
        let mut state = GameState::new();
        assert!(state.apply(Command::Gather(ClickKind::Wood)));
        assert_eq!(state.resource_get(Resource::Wood), 1);
        assert_eq!(state.stats().gathered(Resource::Wood), 1);
        assert_eq!(state.stats().clicked(ClickKind::Wood), 1);
    }

    #[test]
    fn test_gather_food_adds_to_stock() {
        let mut state = GameState::new();
        assert!(state.apply(Command::Gather(ClickKind::Food)));
        assert_eq!(state.food(), 101);
        assert_eq!(state.stats().clicked(ClickKind::Food), 1);
        assert_eq!(state.stats().food_gathered(), 1);
    }

    #[test]
    fn test_build_scene_click_stats_use_wood_yield() {
        let mut state = GameState::new();
        state.click_yield[ClickKind::Wood as usize] = 8;
        state.click_yield[ClickKind::Stone as usize] = 3;
        state.click_yield[ClickKind::Food as usize] = 5;

        assert!(state.apply(Command::Gather(ClickKind::Stone)));
        assert_eq!(state.resource_get(Resource::Stone), 3);
        // The stat moves by wood's yield, not stone's.
        assert_eq!(state.stats().clicked(ClickKind::Stone), 8);

        assert!(state.apply(Command::Gather(ClickKind::Food)));
        assert_eq!(state.food(), 105);
        assert_eq!(state.stats().clicked(ClickKind::Food), 8);
        assert_eq!(state.stats().food_gathered(), 8);
    }

    #[test]
    fn test_elements_gather_uses_own_yield() {
        let mut state = GameState::new();
        state.click_yield[ClickKind::Wood as usize] = 8;
        state.click_yield[ClickKind::Elements as usize] = 4;
        assert!(state.apply(Command::Gather(ClickKind::Elements)));
        assert_eq!(state.resource_get(Resource::Elements), 4);
        assert_eq!(state.stats().clicked(ClickKind::Elements), 4);
    }

    #[test]
    fn test_direct_gather_of_work_yields_rejected() {
        let mut state = GameState::new();
        assert!(!state.apply(Command::Gather(ClickKind::Fiber)));
        assert!(!state.apply(Command::Gather(ClickKind::Iron)));
        assert_eq!(state.resource_get(Resource::Fiber), 0);
        assert_eq!(state.resource_get(Resource::Iron), 0);
    }

    #[test]
    fn test_work_fiber_consumes_wood() {
        let mut state = GameState::new();
        state.resource_set(Resource::Wood, 7);
        assert!(state.apply(Command::WorkFiber));
        assert_eq!(state.resource_get(Resource::Wood), 2);
        assert_eq!(state.resource_get(Resource::Fiber), 1);
        assert_eq!(state.stats().clicked(ClickKind::Fiber), 1);
    }

    #[test]
    fn test_work_fiber_rejected_without_wood() {
        let mut state = GameState::new();
        state.resource_set(Resource::Wood, 4);
        assert!(!state.apply(Command::WorkFiber));
        assert_eq!(state.resource_get(Resource::Wood), 4);
        assert_eq!(state.resource_get(Resource::Fiber), 0);
        assert_eq!(state.stats().clicked(ClickKind::Fiber), 0);
    }

    #[test]
    fn test_work_iron_consumes_stone() {
        let mut state = GameState::new();
        state.resource_set(Resource::Stone, 5);
        assert!(state.apply(Command::WorkIron));
        assert_eq!(state.resource_get(Resource::Stone), 0);
        assert_eq!(state.resource_get(Resource::Iron), 1);
    }

    #[test]
    fn test_start_battle_only_from_idle() {
        let mut state = GameState::new();
        assert!(state.apply(Command::StartBattle));
        assert!(!state.apply(Command::StartBattle));
    }

    #[test]
    fn test_ascend_command() {
        let mut state = GameState::new();
        state.population = 100_000;
        assert!(state.apply(Command::Ascend));
        assert_eq!(state.ascension(), 2);
        assert_eq!(state.population(), 10);
    }
}
