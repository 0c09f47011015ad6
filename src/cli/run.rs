//! Run command implementation: advance the simulation headlessly.

use std::path::Path;

use super::output::{JsonState, format_text};
use super::{CliError, OutputFormat};
use stead::game::{BattleOutcome, Resource, TICKS_PER_STEP, check_invariants};
use stead::save::files;
use stead::{GameState, SplitMixChance};

/// Economic steps between autosaves: every 30 simulated seconds at one
/// step per second.
const AUTOSAVE_INTERVAL: u64 = 30;

/// Dev-mode fixture: huge stockpiles for exercising the late game.
fn apply_dev_fixture(state: &mut GameState) {
    state.population_set(10_000);
    state.food_set(1_000_000_000);
    for resource in Resource::ALL {
        state.resource_set(resource, 1_000_000_000);
    }
}

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if progress cannot be written back to the slot.
pub(crate) fn execute(
    save_dir: &Path,
    steps: u64,
    seed: Option<u64>,
    dev: bool,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let mut state = files::load_state_or_default(save_dir);

    for violation in check_invariants(&state) {
        log::warn!("loaded save: {violation}");
    }

    if dev {
        apply_dev_fixture(&mut state);
    }

    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| {
                #[allow(clippy::cast_possible_truncation)]
                let nanos = d.as_nanos() as u64;
                nanos
            })
            .unwrap_or(42)
    });
    let mut rng = SplitMixChance::new(seed);

    if !quiet {
        println!("Running {steps} steps with seed {seed}...");
    }

    for step in 1..=steps {
        for _ in 0..TICKS_PER_STEP {
            state.tick(&mut rng);
        }

        // Textify each resolution exactly once, like the battle scene does.
        match state.take_last_outcome() {
            BattleOutcome::Win => {
                if !quiet {
                    println!("step {step}: battle won");
                }
            }
            BattleOutcome::Loss => {
                if !quiet {
                    println!("step {step}: battle lost");
                }
            }
            BattleOutcome::None => {}
        }

        if step % AUTOSAVE_INTERVAL == 0 {
            files::save_state(save_dir, &state)
                .map_err(|e| CliError::new(format!("autosave failed: {e}")))?;
        }
    }

    files::save_state(save_dir, &state)
        .map_err(|e| CliError::new(format!("failed to save progress: {e}")))?;

    match format {
        OutputFormat::Text => {
            if !quiet {
                println!();
            }
            print!("{}", format_text(&state));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonState::from_state(&state))?;
            println!("{json}");
        }
    }

    Ok(())
}
