//! Reset command implementation: write first-run defaults to the slot.

use std::path::Path;

use super::CliError;
use stead::GameState;
use stead::save::files;
use stead::save::settings::Settings;

/// Execute the reset command.
///
/// # Errors
///
/// Returns an error if the defaults cannot be written.
pub(crate) fn execute(save_dir: &Path) -> Result<(), CliError> {
    files::save_state(save_dir, &GameState::new())
        .map_err(|e| CliError::new(format!("failed to reset save: {e}")))?;
    files::save_settings(save_dir, &Settings::default())
        .map_err(|e| CliError::new(format!("failed to reset settings: {e}")))?;

    println!("reset {} to first-run defaults", save_dir.display());
    Ok(())
}
