//! Output formatting utilities for CLI.

use serde::Serialize;
use stead::game::{ClickKind, Resource, Sector};
use stead::GameState;

/// JSON-serializable snapshot of the game state.
///
/// A mirror struct rather than a serde derive on the core types: the save
/// slot has its own positional codec, and this view is free to stay
/// readable (named fields, effective outputs) without touching it.
#[derive(Debug, Serialize)]
pub(super) struct JsonState {
    /// Sub-tick counter.
    pub(super) counting: u32,
    /// Housing capacity.
    pub(super) housing: u64,
    /// Current population.
    pub(super) population: i64,
    /// Food stock.
    pub(super) food: u64,
    /// Population minus labor demand.
    pub(super) free_population: i64,
    /// Permanent ascension multiplier.
    pub(super) ascension: u64,
    /// Army strength.
    pub(super) battle_power: u64,
    /// Stockpiles by resource name.
    pub(super) resources: Vec<JsonNamed>,
    /// Production lines.
    pub(super) production: Vec<JsonProduction>,
    /// Click yields by kind.
    pub(super) click_yields: Vec<JsonNamed>,
    /// Manual work costs.
    pub(super) work_costs: JsonWorkCosts,
    /// Battle sub-state.
    pub(super) battle: JsonBattle,
}

/// A named counter.
#[derive(Debug, Serialize)]
pub(super) struct JsonNamed {
    /// Stable lowercase name.
    pub(super) name: &'static str,
    /// Current value.
    pub(super) amount: u64,
}

/// One production line.
#[derive(Debug, Serialize)]
pub(super) struct JsonProduction {
    /// Sector name.
    pub(super) sector: &'static str,
    /// Upgrade multiplier.
    pub(super) multiplier: u64,
    /// Building count.
    pub(super) buildings: u64,
    /// Effective output per economic step before scaling.
    pub(super) effective: u64,
}

/// Manual work costs.
#[derive(Debug, Serialize)]
pub(super) struct JsonWorkCosts {
    /// Wood per fiber work action.
    pub(super) fiber: u64,
    /// Stone per iron work action.
    pub(super) iron: u64,
}

/// Battle sub-state.
#[derive(Debug, Serialize)]
pub(super) struct JsonBattle {
    /// Success chance a battle started now would have.
    pub(super) chance: f64,
    /// Target count of the next battle.
    pub(super) targets: u64,
    /// Steps until resolution, -1 when idle.
    pub(super) timer: i64,
    /// Whether a countdown is running.
    pub(super) in_progress: bool,
}

impl JsonState {
    /// Create from a game state.
    pub(super) fn from_state(state: &GameState) -> Self {
        Self {
            counting: state.counting(),
            housing: state.housing(),
            population: state.population(),
            food: state.food(),
            free_population: state.free_population(),
            ascension: state.ascension(),
            battle_power: state.battle_power(),
            resources: Resource::ALL
                .iter()
                .map(|&r| JsonNamed {
                    name: r.name(),
                    amount: state.resource_get(r),
                })
                .collect(),
            production: Sector::ALL
                .iter()
                .map(|&s| {
                    let line = state.production_line(s);
                    JsonProduction {
                        sector: s.name(),
                        multiplier: line.multiplier,
                        buildings: line.buildings,
                        effective: line.effective(),
                    }
                })
                .collect(),
            click_yields: ClickKind::ALL
                .iter()
                .map(|&k| JsonNamed {
                    name: k.name(),
                    amount: state.click_yield(k),
                })
                .collect(),
            work_costs: JsonWorkCosts {
                fiber: state.work_cost_fiber(),
                iron: state.work_cost_iron(),
            },
            battle: JsonBattle {
                chance: state.battle_success_chance(),
                targets: state.battle().targets(),
                timer: state.battle().timer(),
                in_progress: state.battle().in_progress(),
            },
        }
    }
}

/// Render the state as a human-readable status block.
pub(super) fn format_text(state: &GameState) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Population {}/{} housing | food {} | free labor {} | ascension x{}\n",
        state.population(),
        state.housing(),
        state.food(),
        state.free_population(),
        state.ascension()
    ));

    out.push_str("Resources:");
    for resource in Resource::ALL {
        out.push_str(&format!(" {} {}", resource.name(), state.resource_get(resource)));
    }
    out.push('\n');

    out.push_str("Production:");
    for sector in Sector::ALL {
        let line = state.production_line(sector);
        if line.buildings > 0 {
            out.push_str(&format!(
                " {} {}x{}",
                sector.name(),
                line.multiplier,
                line.buildings
            ));
        }
    }
    out.push('\n');

    if state.battle().in_progress() {
        out.push_str(&format!(
            "Battle: {} targets, resolving in {} steps\n",
            state.battle().targets(),
            state.battle().timer()
        ));
    } else {
        out.push_str(&format!(
            "Battle: idle, {} targets, power {}, success chance {:.0}%\n",
            state.battle().targets(),
            state.battle_power(),
            state.battle_success_chance() * 100.0
        ));
    }

    out
}
