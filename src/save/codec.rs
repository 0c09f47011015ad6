//! The positional game-state codec.
//!
//! The save slot is plain text: 62 newline-terminated numeric fields in a
//! fixed order, no keys. The format is inherited and kept byte-compatible;
//! this module maps it onto named fields with explicit validation instead of
//! indexing blindly, so a short or corrupt buffer surfaces a [`SaveError`]
//! rather than a panic.
//!
//! Field order: counting, housing, population, food, free population,
//! ascension, battle power; the seven resources; seven production pairs
//! (multiplier then building count); the six click yields; the two work
//! costs; the 21 stats (gathered, clicked, built blocks); housing gain; and
//! the four battle fields. The battle chance is truncated to an integer on
//! the way out, so a round-trip preserves the serialized form rather than
//! the fractional chance.

use crate::error::{SaveError, SaveResult};
use crate::game::{BattleOutcome, ClickKind, GameState, Resource, Sector};

/// Number of fields in the save format.
pub const FIELD_COUNT: usize = 62;

/// Gathered-stats block order. Differs from both the resource block order
/// and the enum order; fixed by the inherited format.
const GATHERED_ORDER: [Resource; 7] = [
    Resource::Wood,
    Resource::Stone,
    Resource::Fiber,
    Resource::Iron,
    Resource::Elements,
    Resource::Steel,
    Resource::Kills,
];

/// Serialize a state into the 62-field save buffer.
#[must_use]
pub fn serialize(state: &GameState) -> String {
    let mut out = String::with_capacity(256);

    push_field(&mut out, state.counting());
    push_field(&mut out, state.housing());
    push_field(&mut out, state.population());
    push_field(&mut out, state.food());
    push_field(&mut out, state.free_population());
    push_field(&mut out, state.ascension());
    push_field(&mut out, state.battle_power());

    for resource in Resource::ALL {
        push_field(&mut out, state.resource_get(resource));
    }

    for sector in Sector::ALL {
        let line = state.production_line(sector);
        push_field(&mut out, line.multiplier);
        push_field(&mut out, line.buildings);
    }

    for kind in ClickKind::ALL {
        push_field(&mut out, state.click_yield(kind));
    }

    push_field(&mut out, state.work_cost_fiber());
    push_field(&mut out, state.work_cost_iron());

    for resource in GATHERED_ORDER {
        // Food's gathered counter sits between elements and steel.
        if resource == Resource::Steel {
            push_field(&mut out, state.stats().food_gathered());
        }
        push_field(&mut out, state.stats().gathered(resource));
    }
    for kind in ClickKind::ALL {
        push_field(&mut out, state.stats().clicked(kind));
    }
    for sector in Sector::ALL {
        push_field(&mut out, state.stats().built(sector));
    }

    push_field(&mut out, state.housing_gain());

    // Truncated toward zero, as the format has always stored it.
    #[allow(clippy::cast_possible_truncation)]
    push_field(&mut out, state.battle().chance() as i64);
    push_field(&mut out, state.battle().targets());
    push_field(&mut out, state.battle().timer());
    push_field(&mut out, state.battle().last.to_wire());

    out
}

/// Deserialize a save buffer.
///
/// An empty buffer is the missing-file case and yields the default state.
///
/// # Errors
///
/// [`SaveError::Truncated`] if fewer than 62 fields are present;
/// [`SaveError::BadField`] if a field is not a number of the expected sign.
pub fn deserialize(text: &str) -> SaveResult<GameState> {
    if text.is_empty() {
        return Ok(GameState::new());
    }

    let fields: Vec<&str> = text.split('\n').collect();
    if fields.len() < FIELD_COUNT {
        return Err(SaveError::Truncated {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let mut reader = FieldReader { fields, index: 0 };
    let mut state = GameState::new();

    let counting = reader.next_u64("counting")?;
    state.counting = u32::try_from(counting).unwrap_or(u32::MAX);
    state.housing = reader.next_u64("housing")?;
    state.population = reader.next_i64("population")?;
    state.food = reader.next_u64("food")?;
    state.free_population = reader.next_i64("free_population")?;
    state.ascension = reader.next_u64("ascension")?;
    state.battle_power = reader.next_u64("battle_power")?;

    for resource in Resource::ALL {
        let value = reader.next_u64(resource.name())?;
        state.resource_set(resource, value);
    }

    for sector in Sector::ALL {
        let line = &mut state.production[sector as usize];
        line.multiplier = reader.next_u64(sector.name())?;
        line.buildings = reader.next_u64(sector.name())?;
    }

    for kind in ClickKind::ALL {
        state.click_yield[kind as usize] = reader.next_u64(kind.name())?;
    }

    state.work_cost_fiber = reader.next_u64("cost_fiber")?;
    state.work_cost_iron = reader.next_u64("cost_iron")?;

    for resource in GATHERED_ORDER {
        if resource == Resource::Steel {
            state.stats.food_gathered = reader.next_u64("food_gathered")?;
        }
        state.stats.gathered[resource as usize] = reader.next_u64(resource.name())?;
    }
    for kind in ClickKind::ALL {
        state.stats.clicked[kind as usize] = reader.next_u64(kind.name())?;
    }
    for sector in Sector::ALL {
        state.stats.built[sector as usize] = reader.next_u64(sector.name())?;
    }

    state.housing_gain = reader.next_u64("build_housing_gain")?;

    #[allow(clippy::cast_precision_loss)]
    {
        state.battle.chance = reader.next_i64("battle_current_chance")? as f64;
    }
    state.battle.targets = reader.next_u64("battle_targets")?;
    state.battle.timer = reader.next_i64("battle_timer")?;
    state.battle.last = BattleOutcome::from_wire(reader.next_i64("battle_last")?);

    Ok(state)
}

/// Append one field and its terminating newline.
fn push_field(out: &mut String, value: impl std::fmt::Display) {
    out.push_str(&value.to_string());
    out.push('\n');
}

/// Sequential reader over the split save buffer.
struct FieldReader<'a> {
    fields: Vec<&'a str>,
    index: usize,
}

impl FieldReader<'_> {
    fn next_raw(&mut self) -> (usize, &str) {
        let index = self.index;
        self.index += 1;
        (index, self.fields[index].trim())
    }

    fn next_u64(&mut self, name: &'static str) -> SaveResult<u64> {
        let (index, raw) = self.next_raw();
        raw.parse().map_err(|_| SaveError::BadField {
            index,
            name,
            value: raw.to_string(),
        })
    }

    fn next_i64(&mut self, name: &'static str) -> SaveResult<i64> {
        let (index, raw) = self.next_raw();
        raw.parse().map_err(|_| SaveError::BadField {
            index,
            name,
            value: raw.to_string(),
        })
    }
}
