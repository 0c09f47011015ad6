//! Status command implementation: display the save slot without mutating it.

use std::path::Path;

use super::output::{JsonState, format_text};
use super::{CliError, OutputFormat};
use stead::save::files;

/// Execute the status command.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub(crate) fn execute(save_dir: &Path, format: OutputFormat) -> Result<(), CliError> {
    let state = files::load_state_or_default(save_dir);

    match format {
        OutputFormat::Text => print!("{}", format_text(&state)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonState::from_state(&state))?;
            println!("{json}");
        }
    }

    Ok(())
}
