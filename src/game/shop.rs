//! The shop: dual-cost purchases with escalating prices.
//!
//! Every entry costs two resources (each starting at 10), applies one named
//! effect, and multiplies both of its cost fields by a per-item factor on
//! success. Costs are session state: they are not part of the save format,
//! so they return to catalog defaults on restart and on ascension.

use crate::game::state::GameState;
use crate::game::types::{ClickKind, Resource, Sector};

/// Factor applied to both work costs by [`ShopItem::WorkTools`].
const WORK_COST_GROWTH: f64 = 1.9;

/// Every purchasable shop entry.
///
/// `GatherTools`, `WorkTools`, and `BattleTools` are the scene-local click
/// upgrades of the build, work, and battle scenes; they share a cost spec
/// but escalate independently. `Unit1`-`Unit6` add 1, 2, 4, 8, 16, and 32
/// battle power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShopItem {
    /// Raise housing by the current housing gain.
    Housing,
    /// Double the housing gain, then double housing.
    HousingUpgrade,
    /// Build one food production line.
    FoodFarm,
    /// Double the food multiplier.
    FoodUpgrade,
    /// Build one wood production line.
    WoodCamp,
    /// Double the wood multiplier.
    WoodUpgrade,
    /// Build one stone production line.
    StoneQuarry,
    /// Double the stone multiplier.
    StoneUpgrade,
    /// Double the wood, stone, and food click yields.
    GatherTools,
    /// Build one fiber refinery.
    FiberWorks,
    /// Double the fiber multiplier.
    FiberUpgrade,
    /// Build one iron refinery.
    IronWorks,
    /// Double the iron multiplier.
    IronUpgrade,
    /// Build one steel refinery.
    SteelWorks,
    /// Double the steel multiplier.
    SteelUpgrade,
    /// Double the fiber and iron work yields; raises both work costs ×1.9.
    WorkTools,
    /// Build one elements production line.
    ElementsAltar,
    /// Double the elements multiplier.
    ElementsUpgrade,
    /// Double the elements click yield.
    BattleTools,
    /// +1 battle power.
    Unit1,
    /// +2 battle power.
    Unit2,
    /// +4 battle power.
    Unit3,
    /// +8 battle power.
    Unit4,
    /// +16 battle power.
    Unit5,
    /// +32 battle power.
    Unit6,
}

/// Catalog entry: the two cost resources, their base prices, and the cost
/// escalation factor applied on purchase.
#[derive(Debug, Clone, Copy)]
pub struct ItemSpec {
    /// The two resources a purchase deducts.
    pub resources: [Resource; 2],
    /// Starting prices for both cost fields.
    pub base: [u64; 2],
    /// Multiplier applied to both cost fields after a purchase.
    pub factor: f64,
}

impl ShopItem {
    /// Number of shop entries.
    pub const COUNT: usize = 25;

    /// All entries in catalog (scene) order.
    pub const ALL: [ShopItem; ShopItem::COUNT] = [
        ShopItem::Housing,
        ShopItem::HousingUpgrade,
        ShopItem::FoodFarm,
        ShopItem::FoodUpgrade,
        ShopItem::WoodCamp,
        ShopItem::WoodUpgrade,
        ShopItem::StoneQuarry,
        ShopItem::StoneUpgrade,
        ShopItem::GatherTools,
        ShopItem::FiberWorks,
        ShopItem::FiberUpgrade,
        ShopItem::IronWorks,
        ShopItem::IronUpgrade,
        ShopItem::SteelWorks,
        ShopItem::SteelUpgrade,
        ShopItem::WorkTools,
        ShopItem::ElementsAltar,
        ShopItem::ElementsUpgrade,
        ShopItem::BattleTools,
        ShopItem::Unit1,
        ShopItem::Unit2,
        ShopItem::Unit3,
        ShopItem::Unit4,
        ShopItem::Unit5,
        ShopItem::Unit6,
    ];

    /// Catalog data for this entry.
    #[must_use]
    pub const fn spec(self) -> ItemSpec {
        let (resources, factor) = match self {
            ShopItem::Housing => ([Resource::Wood, Resource::Stone], 1.5),
            ShopItem::HousingUpgrade => ([Resource::Fiber, Resource::Iron], 3.0),
            ShopItem::FoodFarm => ([Resource::Wood, Resource::Fiber], 1.5),
            ShopItem::FoodUpgrade => ([Resource::Fiber, Resource::Iron], 3.0),
            ShopItem::WoodCamp => ([Resource::Fiber, Resource::Iron], 1.5),
            ShopItem::WoodUpgrade => ([Resource::Fiber, Resource::Steel], 3.0),
            ShopItem::StoneQuarry => ([Resource::Fiber, Resource::Iron], 1.5),
            ShopItem::StoneUpgrade => ([Resource::Iron, Resource::Steel], 3.0),
            ShopItem::GatherTools => ([Resource::Steel, Resource::Kills], 2.0),
            ShopItem::FiberWorks => ([Resource::Wood, Resource::Stone], 1.5),
            ShopItem::FiberUpgrade => ([Resource::Fiber, Resource::Iron], 3.0),
            ShopItem::IronWorks => ([Resource::Wood, Resource::Fiber], 1.5),
            ShopItem::IronUpgrade => ([Resource::Fiber, Resource::Iron], 3.0),
            ShopItem::SteelWorks => ([Resource::Fiber, Resource::Iron], 1.5),
            ShopItem::SteelUpgrade => ([Resource::Fiber, Resource::Steel], 3.0),
            ShopItem::WorkTools => ([Resource::Steel, Resource::Kills], 2.0),
            ShopItem::ElementsAltar => ([Resource::Wood, Resource::Stone], 1.5),
            ShopItem::ElementsUpgrade => ([Resource::Fiber, Resource::Steel], 2.0),
            ShopItem::BattleTools => ([Resource::Steel, Resource::Kills], 2.0),
            ShopItem::Unit1 => ([Resource::Elements, Resource::Wood], 1.2),
            ShopItem::Unit2 => ([Resource::Elements, Resource::Stone], 1.2),
            ShopItem::Unit3 => ([Resource::Elements, Resource::Fiber], 1.2),
            ShopItem::Unit4 => ([Resource::Elements, Resource::Iron], 1.2),
            ShopItem::Unit5 => ([Resource::Elements, Resource::Steel], 1.2),
            ShopItem::Unit6 => ([Resource::Elements, Resource::Kills], 1.2),
        };
        ItemSpec {
            resources,
            base: [10, 10],
            factor,
        }
    }

    /// Stable kebab-case name, used by drivers for parsing and display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ShopItem::Housing => "housing",
            ShopItem::HousingUpgrade => "housing-upgrade",
            ShopItem::FoodFarm => "food-farm",
            ShopItem::FoodUpgrade => "food-upgrade",
            ShopItem::WoodCamp => "wood-camp",
            ShopItem::WoodUpgrade => "wood-upgrade",
            ShopItem::StoneQuarry => "stone-quarry",
            ShopItem::StoneUpgrade => "stone-upgrade",
            ShopItem::GatherTools => "gather-tools",
            ShopItem::FiberWorks => "fiber-works",
            ShopItem::FiberUpgrade => "fiber-upgrade",
            ShopItem::IronWorks => "iron-works",
            ShopItem::IronUpgrade => "iron-upgrade",
            ShopItem::SteelWorks => "steel-works",
            ShopItem::SteelUpgrade => "steel-upgrade",
            ShopItem::WorkTools => "work-tools",
            ShopItem::ElementsAltar => "elements-altar",
            ShopItem::ElementsUpgrade => "elements-upgrade",
            ShopItem::BattleTools => "battle-tools",
            ShopItem::Unit1 => "unit-1",
            ShopItem::Unit2 => "unit-2",
            ShopItem::Unit3 => "unit-3",
            ShopItem::Unit4 => "unit-4",
            ShopItem::Unit5 => "unit-5",
            ShopItem::Unit6 => "unit-6",
        }
    }

    /// Look an entry up by its [`name`](ShopItem::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<ShopItem> {
        ShopItem::ALL.iter().copied().find(|item| item.name() == name)
    }
}

/// Session cost table: the current price of every shop entry.
#[derive(Debug, Clone, Copy)]
pub struct Shop {
    costs: [[u64; 2]; ShopItem::COUNT],
}

impl Default for Shop {
    fn default() -> Self {
        Self::new()
    }
}

impl Shop {
    /// Fresh cost table at catalog base prices.
    #[must_use]
    pub fn new() -> Self {
        let mut costs = [[0u64; 2]; ShopItem::COUNT];
        for (slot, item) in ShopItem::ALL.iter().enumerate() {
            costs[slot] = item.spec().base;
        }
        Self { costs }
    }

    /// Current price of both cost fields for an entry.
    #[must_use]
    pub const fn price(&self, item: ShopItem) -> [u64; 2] {
        self.costs[item as usize]
    }

    /// Multiply both cost fields by the item's factor, rounding to nearest.
    fn escalate(&mut self, item: ShopItem, factor: f64) {
        let price = &mut self.costs[item as usize];
        price[0] = escalate_cost(price[0], factor);
        price[1] = escalate_cost(price[1], factor);
    }
}

/// One escalated cost field, rounded to the nearest integer.
fn escalate_cost(cost: u64, factor: f64) -> u64 {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let escalated = (cost as f64 * factor).round() as u64;
    escalated
}

impl GameState {
    /// Attempt a shop purchase.
    ///
    /// Checks both cost fields, deducts both, applies the effect, then
    /// escalates both costs. An unaffordable purchase returns `false` and
    /// changes nothing.
    pub fn buy(&mut self, item: ShopItem) -> bool {
        let spec = item.spec();
        let price = self.shop.price(item);
        if self.resource_get(spec.resources[0]) < price[0]
            || self.resource_get(spec.resources[1]) < price[1]
        {
            return false;
        }
        self.resource_take(spec.resources[0], price[0]);
        self.resource_take(spec.resources[1], price[1]);
        self.apply_purchase(item);
        self.shop.escalate(item, spec.factor);
        true
    }

    /// The effect side of a successful purchase.
    fn apply_purchase(&mut self, item: ShopItem) {
        match item {
            ShopItem::Housing => {
                self.housing = self.housing.saturating_add(self.housing_gain);
            }
            ShopItem::HousingUpgrade => {
                self.housing_gain = self.housing_gain.saturating_mul(2);
                self.housing = self.housing.saturating_mul(2);
            }
            ShopItem::FoodFarm => self.production_build(Sector::Food),
            ShopItem::FoodUpgrade => self.production_upgrade(Sector::Food),
            ShopItem::WoodCamp => self.production_build(Sector::Wood),
            ShopItem::WoodUpgrade => self.production_upgrade(Sector::Wood),
            ShopItem::StoneQuarry => self.production_build(Sector::Stone),
            ShopItem::StoneUpgrade => self.production_upgrade(Sector::Stone),
            ShopItem::GatherTools => {
                self.double_click_yield(ClickKind::Food);
                self.double_click_yield(ClickKind::Wood);
                self.double_click_yield(ClickKind::Stone);
            }
            ShopItem::FiberWorks => self.production_build(Sector::Fiber),
            ShopItem::FiberUpgrade => self.production_upgrade(Sector::Fiber),
            ShopItem::IronWorks => self.production_build(Sector::Iron),
            ShopItem::IronUpgrade => self.production_upgrade(Sector::Iron),
            ShopItem::SteelWorks => self.production_build(Sector::Steel),
            ShopItem::SteelUpgrade => self.production_upgrade(Sector::Steel),
            ShopItem::WorkTools => {
                self.double_click_yield(ClickKind::Fiber);
                self.work_cost_fiber = escalate_cost(self.work_cost_fiber, WORK_COST_GROWTH);
                self.double_click_yield(ClickKind::Iron);
                self.work_cost_iron = escalate_cost(self.work_cost_iron, WORK_COST_GROWTH);
            }
            ShopItem::ElementsAltar => self.production_build(Sector::Elements),
            ShopItem::ElementsUpgrade => self.production_upgrade(Sector::Elements),
            ShopItem::BattleTools => self.double_click_yield(ClickKind::Elements),
            ShopItem::Unit1 => self.add_battle_power(1),
            ShopItem::Unit2 => self.add_battle_power(2),
            ShopItem::Unit3 => self.add_battle_power(4),
            ShopItem::Unit4 => self.add_battle_power(8),
            ShopItem::Unit5 => self.add_battle_power(16),
            ShopItem::Unit6 => self.add_battle_power(32),
        }
    }

    const fn double_click_yield(&mut self, kind: ClickKind) {
        let i = kind as usize;
        self.click_yield[i] = self.click_yield[i].saturating_mul(2);
    }

    const fn add_battle_power(&mut self, amount: u64) {
        self.battle_power = self.battle_power.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rich_state() -> GameState {
        let mut state = GameState::new();
        for resource in Resource::ALL {
            state.resource_set(resource, 1_000_000);
        }
        state
    }

    #[test]
    fn test_catalog_base_prices() {
        let shop = Shop::new();
        for item in ShopItem::ALL {
            assert_eq!(shop.price(item), [10, 10], "{}", item.name());
        }
    }

    #[test]
    fn test_purchase_deducts_both_costs() {
        let mut state = rich_state();
        assert!(state.buy(ShopItem::Housing));
        assert_eq!(state.resource_get(Resource::Wood), 999_990);
        assert_eq!(state.resource_get(Resource::Stone), 999_990);
        assert_eq!(state.housing(), 20);
    }

    #[test]
    fn test_purchase_escalates_both_costs() {
        let mut state = rich_state();
        assert!(state.buy(ShopItem::Housing));
        assert_eq!(state.shop().price(ShopItem::Housing), [15, 15]);
        assert!(state.buy(ShopItem::Housing));
        assert_eq!(state.shop().price(ShopItem::Housing), [23, 23]);
    }

    #[test]
    fn test_unaffordable_purchase_is_a_no_op() {
        let mut state = GameState::new();
        state.resource_set(Resource::Wood, 100);
        // Stone missing entirely.
        assert!(!state.buy(ShopItem::Housing));
        assert_eq!(state.resource_get(Resource::Wood), 100);
        assert_eq!(state.housing(), 10);
        assert_eq!(state.shop().price(ShopItem::Housing), [10, 10]);
    }

    #[test]
    fn test_one_sided_affordability_rejected() {
        let mut state = GameState::new();
        state.resource_set(Resource::Fiber, 100);
        state.resource_set(Resource::Iron, 9);
        assert!(!state.buy(ShopItem::HousingUpgrade));
        assert_eq!(state.resource_get(Resource::Fiber), 100);
        assert_eq!(state.resource_get(Resource::Iron), 9);
    }

    #[test]
    fn test_housing_upgrade_doubles_gain_and_housing() {
        let mut state = rich_state();
        assert!(state.buy(ShopItem::HousingUpgrade));
        assert_eq!(state.housing_gain(), 20);
        assert_eq!(state.housing(), 20);
        assert!(state.buy(ShopItem::Housing));
        assert_eq!(state.housing(), 40);
    }

    #[test]
    fn test_gather_tools_double_build_scene_yields() {
        let mut state = rich_state();
        assert!(state.buy(ShopItem::GatherTools));
        assert_eq!(state.click_yield(ClickKind::Wood), 2);
        assert_eq!(state.click_yield(ClickKind::Stone), 2);
        assert_eq!(state.click_yield(ClickKind::Food), 2);
        assert_eq!(state.click_yield(ClickKind::Fiber), 1);
        assert_eq!(state.click_yield(ClickKind::Elements), 1);
    }

    #[test]
    fn test_work_tools_double_yields_and_raise_costs() {
        let mut state = rich_state();
        assert!(state.buy(ShopItem::WorkTools));
        assert_eq!(state.click_yield(ClickKind::Fiber), 2);
        assert_eq!(state.click_yield(ClickKind::Iron), 2);
        // 5 × 1.9 = 9.5, rounded to 10.
        assert_eq!(state.work_cost_fiber(), 10);
        assert_eq!(state.work_cost_iron(), 10);
    }

    #[test]
    fn test_units_add_tiered_battle_power() {
        let mut state = rich_state();
        let tiers = [
            (ShopItem::Unit1, 1),
            (ShopItem::Unit2, 2),
            (ShopItem::Unit3, 4),
            (ShopItem::Unit4, 8),
            (ShopItem::Unit5, 16),
            (ShopItem::Unit6, 32),
        ];
        let mut expected = 0;
        for (item, power) in tiers {
            assert!(state.buy(item));
            expected += power;
            assert_eq!(state.battle_power(), expected);
        }
    }

    #[test]
    fn test_unit_cost_escalation_rounds_nearest() {
        let mut state = rich_state();
        assert!(state.buy(ShopItem::Unit1));
        // 10 × 1.2 = 12.
        assert_eq!(state.shop().price(ShopItem::Unit1), [12, 12]);
        assert!(state.buy(ShopItem::Unit1));
        // 12 × 1.2 = 14.4, rounded to 14.
        assert_eq!(state.shop().price(ShopItem::Unit1), [14, 14]);
    }

    #[test]
    fn test_scene_tools_escalate_independently() {
        let mut state = rich_state();
        assert!(state.buy(ShopItem::GatherTools));
        assert_eq!(state.shop().price(ShopItem::GatherTools), [20, 20]);
        assert_eq!(state.shop().price(ShopItem::WorkTools), [10, 10]);
        assert_eq!(state.shop().price(ShopItem::BattleTools), [10, 10]);
    }

    #[test]
    fn test_from_name_round_trips() {
        for item in ShopItem::ALL {
            assert_eq!(ShopItem::from_name(item.name()), Some(item));
        }
        assert_eq!(ShopItem::from_name("nonsense"), None);
    }
}
