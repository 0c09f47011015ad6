//! Act command implementation: apply one player command to the save slot.

use clap::ValueEnum;
use std::path::Path;

use super::CliError;
use stead::game::{ClickKind, Command, ShopItem};
use stead::save::files;

/// Every player action reachable from the command line.
///
/// One name per [`Command`] variant the display layer could emit: the four
/// gathers, the two work actions, every shop entry, battle start, and
/// ascension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PlayerAction {
    /// Gather wood.
    GatherWood,
    /// Gather stone.
    GatherStone,
    /// Gather food.
    GatherFood,
    /// Gather elements (battle scene).
    GatherElements,
    /// Convert wood into fiber.
    WorkFiber,
    /// Convert stone into iron.
    WorkIron,
    /// Buy housing.
    BuyHousing,
    /// Buy the housing upgrade.
    BuyHousingUpgrade,
    /// Build a food farm.
    BuyFoodFarm,
    /// Buy the food upgrade.
    BuyFoodUpgrade,
    /// Build a wood camp.
    BuyWoodCamp,
    /// Buy the wood upgrade.
    BuyWoodUpgrade,
    /// Build a stone quarry.
    BuyStoneQuarry,
    /// Buy the stone upgrade.
    BuyStoneUpgrade,
    /// Buy the gather tools (doubles build-scene yields).
    BuyGatherTools,
    /// Build a fiber works.
    BuyFiberWorks,
    /// Buy the fiber upgrade.
    BuyFiberUpgrade,
    /// Build an iron works.
    BuyIronWorks,
    /// Buy the iron upgrade.
    BuyIronUpgrade,
    /// Build a steel works.
    BuySteelWorks,
    /// Buy the steel upgrade.
    BuySteelUpgrade,
    /// Buy the work tools (doubles work yields, raises work costs).
    BuyWorkTools,
    /// Build an elements altar.
    BuyElementsAltar,
    /// Buy the elements upgrade.
    BuyElementsUpgrade,
    /// Buy the battle tools (doubles the elements yield).
    BuyBattleTools,
    /// Recruit a tier-1 unit (+1 power).
    BuyUnit1,
    /// Recruit a tier-2 unit (+2 power).
    BuyUnit2,
    /// Recruit a tier-3 unit (+4 power).
    BuyUnit3,
    /// Recruit a tier-4 unit (+8 power).
    BuyUnit4,
    /// Recruit a tier-5 unit (+16 power).
    BuyUnit5,
    /// Recruit a tier-6 unit (+32 power).
    BuyUnit6,
    /// Start a battle countdown.
    StartBattle,
    /// Ascend, resetting the run for a permanent multiplier.
    Ascend,
}

impl PlayerAction {
    /// The core command this action maps to.
    pub(crate) const fn command(self) -> Command {
        match self {
            PlayerAction::GatherWood => Command::Gather(ClickKind::Wood),
            PlayerAction::GatherStone => Command::Gather(ClickKind::Stone),
            PlayerAction::GatherFood => Command::Gather(ClickKind::Food),
            PlayerAction::GatherElements => Command::Gather(ClickKind::Elements),
            PlayerAction::WorkFiber => Command::WorkFiber,
            PlayerAction::WorkIron => Command::WorkIron,
            PlayerAction::BuyHousing => Command::Buy(ShopItem::Housing),
            PlayerAction::BuyHousingUpgrade => Command::Buy(ShopItem::HousingUpgrade),
            PlayerAction::BuyFoodFarm => Command::Buy(ShopItem::FoodFarm),
            PlayerAction::BuyFoodUpgrade => Command::Buy(ShopItem::FoodUpgrade),
            PlayerAction::BuyWoodCamp => Command::Buy(ShopItem::WoodCamp),
            PlayerAction::BuyWoodUpgrade => Command::Buy(ShopItem::WoodUpgrade),
            PlayerAction::BuyStoneQuarry => Command::Buy(ShopItem::StoneQuarry),
            PlayerAction::BuyStoneUpgrade => Command::Buy(ShopItem::StoneUpgrade),
            PlayerAction::BuyGatherTools => Command::Buy(ShopItem::GatherTools),
            PlayerAction::BuyFiberWorks => Command::Buy(ShopItem::FiberWorks),
            PlayerAction::BuyFiberUpgrade => Command::Buy(ShopItem::FiberUpgrade),
            PlayerAction::BuyIronWorks => Command::Buy(ShopItem::IronWorks),
            PlayerAction::BuyIronUpgrade => Command::Buy(ShopItem::IronUpgrade),
            PlayerAction::BuySteelWorks => Command::Buy(ShopItem::SteelWorks),
            PlayerAction::BuySteelUpgrade => Command::Buy(ShopItem::SteelUpgrade),
            PlayerAction::BuyWorkTools => Command::Buy(ShopItem::WorkTools),
            PlayerAction::BuyElementsAltar => Command::Buy(ShopItem::ElementsAltar),
            PlayerAction::BuyElementsUpgrade => Command::Buy(ShopItem::ElementsUpgrade),
            PlayerAction::BuyBattleTools => Command::Buy(ShopItem::BattleTools),
            PlayerAction::BuyUnit1 => Command::Buy(ShopItem::Unit1),
            PlayerAction::BuyUnit2 => Command::Buy(ShopItem::Unit2),
            PlayerAction::BuyUnit3 => Command::Buy(ShopItem::Unit3),
            PlayerAction::BuyUnit4 => Command::Buy(ShopItem::Unit4),
            PlayerAction::BuyUnit5 => Command::Buy(ShopItem::Unit5),
            PlayerAction::BuyUnit6 => Command::Buy(ShopItem::Unit6),
            PlayerAction::StartBattle => Command::StartBattle,
            PlayerAction::Ascend => Command::Ascend,
        }
    }
}

/// Execute the act command.
///
/// Loads the slot, applies the action, saves, and reports whether the
/// action took effect. A rejected action (unaffordable purchase, battle
/// already running) is a normal outcome, not an error.
///
/// # Errors
///
/// Returns an error if the slot cannot be written back.
pub(crate) fn execute(save_dir: &Path, action: PlayerAction) -> Result<(), CliError> {
    let mut state = files::load_state_or_default(save_dir);

    let command = action.command();
    let applied = state.apply(command);

    files::save_state(save_dir, &state)
        .map_err(|e| CliError::new(format!("failed to save progress: {e}")))?;

    if applied {
        println!("applied {command:?}");
    } else {
        println!("rejected {command:?} (no effect)");
    }

    Ok(())
}
