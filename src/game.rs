//! The village simulation core.
//!
//! Implements the economy rules on top of a single [`GameState`] aggregate:
//! - Resources, production lines, and click yields
//! - The fixed-step economy (labor, refining chains, food, population)
//! - Battle countdowns and resolution
//! - The shop and its escalating costs
//! - Ascension (prestige reset)
//!
//! The display layer calls the accessor API for rendering and submits
//! [`Command`]s for every player action; the driver calls
//! [`GameState::tick`] once per frame.

mod ascension;
mod battle;
mod commands;
mod economy;
mod invariants;
mod shop;
mod state;
mod types;

pub use ascension::AscensionSource;
pub use battle::{
    BATTLE_COUNTDOWN, BattleOutcome, BattleState, ChanceSource, DEFAULT_BATTLE_TARGETS,
    LOSS_PER_TARGET, SplitMixChance,
};
pub use commands::Command;
pub use economy::TICKS_PER_STEP;
pub use invariants::{InvariantViolation, check_invariants};
pub use shop::{ItemSpec, Shop, ShopItem};
pub use state::{
    DEFAULT_FOOD, DEFAULT_HOUSING, DEFAULT_HOUSING_GAIN, DEFAULT_POPULATION, DEFAULT_WORK_COST,
    GameState,
};
pub use types::{ClickKind, ProductionLine, Resource, Sector, Stats};
