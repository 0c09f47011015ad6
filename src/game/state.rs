//! Game state aggregate and its accessor API.

use crate::game::battle::BattleState;
use crate::game::shop::Shop;
use crate::game::types::{ClickKind, ProductionLine, Resource, Sector, Stats};

/// Starting housing capacity.
pub const DEFAULT_HOUSING: u64 = 10;
/// Starting population.
pub const DEFAULT_POPULATION: i64 = 10;
/// Starting food stock.
pub const DEFAULT_FOOD: u64 = 100;
/// Starting wood/stone cost of the manual work actions.
pub const DEFAULT_WORK_COST: u64 = 5;
/// Housing gained per housing purchase before upgrades.
pub const DEFAULT_HOUSING_GAIN: u64 = 10;

/// Complete simulation state.
///
/// A single aggregate owned by the simulation; the driver holds exactly one
/// and mutates it through [`tick`](GameState::tick) and
/// [`apply`](GameState::apply). All arithmetic rules live behind this API.
///
/// `population` is signed: a lost battle subtracts ten defenders per target
/// and may push it below zero, which the next economic step clamps away.
/// Everything else is unsigned and non-negative by construction.
#[derive(Debug, Clone, Copy)]
pub struct GameState {
    /// Sub-tick counter, 0..59; wrapping to 0 runs one economic step.
    pub(crate) counting: u32,
    /// Housing capacity; population growth is capped here.
    pub(crate) housing: u64,
    /// Current population. Transiently negative after a lost battle.
    pub(crate) population: i64,
    /// Food stock.
    pub(crate) food: u64,
    /// Population minus total labor demand; negative means overcommitted.
    pub(crate) free_population: i64,
    /// Permanent production multiplier from ascensions. Always at least 1.
    pub(crate) ascension: u64,
    /// Army strength used for battle success chances.
    pub(crate) battle_power: u64,
    /// Stockpiles, indexed by [`Resource`].
    pub(crate) resources: [u64; Resource::COUNT],
    /// Production lines, indexed by [`Sector`].
    pub(crate) production: [ProductionLine; Sector::COUNT],
    /// Per-click yields, indexed by [`ClickKind`].
    pub(crate) click_yield: [u64; ClickKind::COUNT],
    /// Wood consumed per manual fiber work action.
    pub(crate) work_cost_fiber: u64,
    /// Stone consumed per manual iron work action.
    pub(crate) work_cost_iron: u64,
    /// Monotone display counters.
    pub(crate) stats: Stats,
    /// Housing added per housing purchase; doubles with the housing upgrade.
    pub(crate) housing_gain: u64,
    /// Battle sub-state.
    pub(crate) battle: BattleState,
    /// Session-only shop cost table. Not persisted; resets on ascension.
    pub(crate) shop: Shop,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh state with first-run defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counting: 0,
            housing: DEFAULT_HOUSING,
            population: DEFAULT_POPULATION,
            food: DEFAULT_FOOD,
            free_population: 0,
            ascension: 1,
            battle_power: 0,
            resources: [0; Resource::COUNT],
            production: [ProductionLine::default(); Sector::COUNT],
            click_yield: [1; ClickKind::COUNT],
            work_cost_fiber: DEFAULT_WORK_COST,
            work_cost_iron: DEFAULT_WORK_COST,
            stats: Stats::default(),
            housing_gain: DEFAULT_HOUSING_GAIN,
            battle: BattleState::default(),
            shop: Shop::new(),
        }
    }

    /// Current stockpile of `resource`.
    #[must_use]
    pub const fn resource_get(&self, resource: Resource) -> u64 {
        self.resources[resource as usize]
    }

    /// Overwrite the stockpile of `resource`. Does not touch stats.
    pub const fn resource_set(&mut self, resource: Resource, value: u64) {
        self.resources[resource as usize] = value;
    }

    /// Add to a stockpile and credit the matching `gathered` stat.
    pub const fn resource_add(&mut self, resource: Resource, amount: u64) {
        let i = resource as usize;
        self.resources[i] = self.resources[i].saturating_add(amount);
        self.stats.gathered[i] = self.stats.gathered[i].saturating_add(amount);
    }

    /// Remove from a stockpile.
    ///
    /// Deliberately does not decrement any stat: `gathered` counts lifetime
    /// income, not the current balance. Callers check affordability first;
    /// the subtraction saturates at zero as a backstop.
    pub const fn resource_take(&mut self, resource: Resource, amount: u64) {
        let i = resource as usize;
        self.resources[i] = self.resources[i].saturating_sub(amount);
    }

    /// Effective output of a sector: multiplier × building count.
    #[must_use]
    pub const fn production_get(&self, sector: Sector) -> u64 {
        self.production[sector as usize].effective()
    }

    /// The production line record for a sector.
    #[must_use]
    pub const fn production_line(&self, sector: Sector) -> ProductionLine {
        self.production[sector as usize]
    }

    /// Add one building to a sector and bump its `built` stat.
    pub const fn production_build(&mut self, sector: Sector) {
        let i = sector as usize;
        self.production[i].buildings += 1;
        self.stats.built[i] = self.stats.built[i].saturating_add(1);
    }

    /// Double a sector's output multiplier.
    pub const fn production_upgrade(&mut self, sector: Sector) {
        let i = sector as usize;
        self.production[i].multiplier = self.production[i].multiplier.saturating_mul(2);
    }

    /// Per-click yield for a manual action.
    #[must_use]
    pub const fn click_yield(&self, kind: ClickKind) -> u64 {
        self.click_yield[kind as usize]
    }

    /// Wood consumed per manual fiber work action.
    #[must_use]
    pub const fn work_cost_fiber(&self) -> u64 {
        self.work_cost_fiber
    }

    /// Stone consumed per manual iron work action.
    #[must_use]
    pub const fn work_cost_iron(&self) -> u64 {
        self.work_cost_iron
    }

    /// Monotone display counters.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Sub-tick counter, 0..59.
    #[must_use]
    pub const fn counting(&self) -> u32 {
        self.counting
    }

    /// Housing capacity.
    #[must_use]
    pub const fn housing(&self) -> u64 {
        self.housing
    }

    /// Current population (signed; see type docs).
    #[must_use]
    pub const fn population(&self) -> i64 {
        self.population
    }

    /// Food stock.
    #[must_use]
    pub const fn food(&self) -> u64 {
        self.food
    }

    /// Population minus labor demand as of the last economic step.
    #[must_use]
    pub const fn free_population(&self) -> i64 {
        self.free_population
    }

    /// Permanent ascension multiplier.
    #[must_use]
    pub const fn ascension(&self) -> u64 {
        self.ascension
    }

    /// Army strength.
    #[must_use]
    pub const fn battle_power(&self) -> u64 {
        self.battle_power
    }

    /// Housing added per housing purchase.
    #[must_use]
    pub const fn housing_gain(&self) -> u64 {
        self.housing_gain
    }

    /// Battle sub-state.
    #[must_use]
    pub const fn battle(&self) -> &BattleState {
        &self.battle
    }

    /// Session shop cost table.
    #[must_use]
    pub const fn shop(&self) -> &Shop {
        &self.shop
    }

    /// Overwrite the population. For drivers and fixtures; normal play
    /// changes population only through the economy and battles.
    pub const fn population_set(&mut self, value: i64) {
        self.population = value;
    }

    /// Overwrite the food stock. For drivers and fixtures.
    pub const fn food_set(&mut self, value: u64) {
        self.food = value;
    }

    /// Total labor demand across all production lines.
    #[must_use]
    pub fn labor_demand(&self) -> u64 {
        Sector::ALL
            .iter()
            .map(|&s| self.production_get(s))
            .fold(0u64, u64::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = GameState::new();
        assert_eq!(state.housing(), 10);
        assert_eq!(state.population(), 10);
        assert_eq!(state.food(), 100);
        assert_eq!(state.ascension(), 1);
        assert_eq!(state.battle_power(), 0);
        assert_eq!(state.counting(), 0);
        for resource in Resource::ALL {
            assert_eq!(state.resource_get(resource), 0);
        }
        for sector in Sector::ALL {
            assert_eq!(state.production_get(sector), 0);
            assert_eq!(state.production_line(sector).multiplier, 1);
        }
        for kind in ClickKind::ALL {
            assert_eq!(state.click_yield(kind), 1);
        }
        assert_eq!(state.work_cost_fiber(), 5);
        assert_eq!(state.work_cost_iron(), 5);
        assert_eq!(state.housing_gain(), 10);
    }

    #[test]
    fn test_resource_add_credits_gathered() {
        let mut state = GameState::new();
        state.resource_add(Resource::Wood, 7);
        assert_eq!(state.resource_get(Resource::Wood), 7);
        assert_eq!(state.stats().gathered(Resource::Wood), 7);
    }

    #[test]
    fn test_resource_take_keeps_gathered() {
        let mut state = GameState::new();
        state.resource_add(Resource::Stone, 12);
        state.resource_take(Resource::Stone, 12);
        assert_eq!(state.resource_get(Resource::Stone), 0);
        assert_eq!(state.stats().gathered(Resource::Stone), 12);
    }

    #[test]
    fn test_resource_take_saturates() {
        let mut state = GameState::new();
        state.resource_take(Resource::Iron, 5);
        assert_eq!(state.resource_get(Resource::Iron), 0);
    }

    #[test]
    fn test_production_build_and_upgrade() {
        let mut state = GameState::new();
        state.production_build(Sector::Wood);
        state.production_build(Sector::Wood);
        assert_eq!(state.production_get(Sector::Wood), 2);
        assert_eq!(state.stats().built(Sector::Wood), 2);

        state.production_upgrade(Sector::Wood);
        assert_eq!(state.production_line(Sector::Wood).multiplier, 2);
        assert_eq!(state.production_get(Sector::Wood), 4);

        state.production_upgrade(Sector::Wood);
        assert_eq!(state.production_line(Sector::Wood).multiplier, 4);
    }

    #[test]
    fn test_labor_demand_sums_all_sectors() {
        let mut state = GameState::new();
        state.production_build(Sector::Food);
        state.production_build(Sector::Wood);
        state.production_upgrade(Sector::Wood);
        assert_eq!(state.labor_demand(), 1 + 2);
    }
}
