//! The persistence provider: save-slot files on disk.
//!
//! A save slot is a directory holding `save.txt` (the 62-field state buffer)
//! and `settings.txt`. Loads are forgiving: a missing file means a fresh
//! start and a malformed one is logged and replaced by defaults, because a
//! clicker that refuses to boot over a corrupt save is worse than one that
//! restarts. Saves are strict: a failed write propagates so the driver can
//! tell the player their progress is not reaching disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::SaveResult;
use crate::game::GameState;
use crate::save::codec;
use crate::save::settings::Settings;

/// File name of the game-state buffer inside a slot directory.
pub const SAVE_FILE_NAME: &str = "save.txt";

/// File name of the settings line inside a slot directory.
pub const SETTINGS_FILE_NAME: &str = "settings.txt";

/// Path of the state buffer inside `dir`.
#[must_use]
pub fn save_path(dir: &Path) -> PathBuf {
    dir.join(SAVE_FILE_NAME)
}

/// Path of the settings file inside `dir`.
#[must_use]
pub fn settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE_NAME)
}

/// Load the state buffer from a slot.
///
/// A missing file is a fresh start and yields the default state.
///
/// # Errors
///
/// Propagates unreadable files and malformed buffers; callers that want the
/// fallback policy use [`load_state_or_default`].
pub fn load_state(dir: &Path) -> SaveResult<GameState> {
    match fs::read_to_string(save_path(dir)) {
        Ok(text) => codec::deserialize(&text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(GameState::new()),
        Err(e) => Err(e.into()),
    }
}

/// Load the state buffer, falling back to defaults on any failure.
///
/// The failure is logged rather than surfaced: losing a corrupt save to a
/// fresh start is the recovery policy, not an error the player can act on.
#[must_use]
pub fn load_state_or_default(dir: &Path) -> GameState {
    load_state(dir).unwrap_or_else(|e| {
        log::warn!("discarding unusable save in {}: {e}", dir.display());
        GameState::new()
    })
}

/// Write the state buffer to a slot, creating the directory if needed.
///
/// # Errors
///
/// Propagates write failures; the driver surfaces them to the player.
pub fn save_state(dir: &Path, state: &GameState) -> SaveResult<()> {
    fs::create_dir_all(dir)?;
    fs::write(save_path(dir), codec::serialize(state))?;
    Ok(())
}

/// Load settings from a slot.
///
/// A missing file yields the defaults.
///
/// # Errors
///
/// Propagates unreadable files and malformed lines.
pub fn load_settings(dir: &Path) -> SaveResult<Settings> {
    match fs::read_to_string(settings_path(dir)) {
        Ok(text) => {
            let line = text.lines().next().unwrap_or("");
            Settings::deserialize(line)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(e) => Err(e.into()),
    }
}

/// Load settings, falling back to defaults on any failure (logged).
#[must_use]
pub fn load_settings_or_default(dir: &Path) -> Settings {
    load_settings(dir).unwrap_or_else(|e| {
        log::warn!("discarding unusable settings in {}: {e}", dir.display());
        Settings::default()
    })
}

/// Write the settings file, creating the directory if needed.
///
/// # Errors
///
/// Propagates write failures.
pub fn save_settings(dir: &Path, settings: &Settings) -> SaveResult<()> {
    fs::create_dir_all(dir)?;
    fs::write(settings_path(dir), settings.serialize())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Command, Resource, ShopItem};

    #[test]
    fn test_missing_slot_is_a_fresh_start() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = load_state(dir.path()).expect("missing file");
        assert_eq!(state.population(), 10);
        let settings = load_settings(dir.path()).expect("missing file");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = GameState::new();
        state.resource_set(Resource::Wood, 100);
        state.resource_set(Resource::Stone, 100);
        assert!(state.apply(Command::Buy(ShopItem::Housing)));

        save_state(dir.path(), &state).expect("save");
        let restored = load_state(dir.path()).expect("load");
        assert_eq!(codec::serialize(&restored), codec::serialize(&state));
    }

    #[test]
    fn test_corrupt_save_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(save_path(dir.path()), "not\na\nsave\n").expect("write");
        assert!(load_state(dir.path()).is_err());
        let state = load_state_or_default(dir.path());
        assert_eq!(state.population(), 10);
        assert_eq!(state.food(), 100);
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = Settings {
            win_size: [0.8, 0.3],
            win_bottom_offset: 0.2,
        };
        save_settings(dir.path(), &settings).expect("save");
        assert_eq!(load_settings(dir.path()).expect("load"), settings);
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(settings_path(dir.path()), "???").expect("write");
        assert_eq!(load_settings_or_default(dir.path()), Settings::default());
    }
}
