//! User settings and their single-line codec.
//!
//! Settings travel as one `~`-separated line: window width fraction, window
//! height fraction, bottom offset fraction. The window itself is the display
//! layer's business; the values are carried here only because their file is
//! part of the persistence surface.

use crate::error::{SaveError, SaveResult};

/// Separator between settings fields.
const SEPARATOR: char = '~';

/// Persisted user settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Window size as fractions of the screen size (width, height).
    pub win_size: [f64; 2],
    /// Window offset from the bottom of the screen, as a screen fraction.
    pub win_bottom_offset: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            win_size: [1.0, 0.25],
            win_bottom_offset: 0.335,
        }
    }
}

impl Settings {
    /// Serialize to the `~`-separated line, trailing separator included.
    #[must_use]
    pub fn serialize(&self) -> String {
        format!(
            "{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}",
            self.win_size[0], self.win_size[1], self.win_bottom_offset
        )
    }

    /// Parse a `~`-separated settings line.
    ///
    /// # Errors
    ///
    /// [`SaveError::BadSettings`] if fewer than three fields are present or
    /// a field is not a number.
    pub fn deserialize(text: &str) -> SaveResult<Self> {
        let mut fields = text.split(SEPARATOR);
        let mut next = |name: &str| -> SaveResult<f64> {
            let raw = fields.next().ok_or_else(|| SaveError::BadSettings {
                reason: format!("missing field {name}"),
            })?;
            raw.trim().parse().map_err(|_| SaveError::BadSettings {
                reason: format!("field {name} is not a number: {raw:?}"),
            })
        };

        Ok(Self {
            win_size: [next("win_width")?, next("win_height")?],
            win_bottom_offset: next("win_bottom_offset")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_line() {
        assert_eq!(Settings::default().serialize(), "1~0.25~0.335~");
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            win_size: [0.5, 0.75],
            win_bottom_offset: 0.1,
        };
        let restored = Settings::deserialize(&settings.serialize()).expect("round trip");
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_missing_field_rejected() {
        let err = Settings::deserialize("1~0.25").expect_err("two fields");
        assert!(err.to_string().contains("win_bottom_offset"));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(Settings::deserialize("wide~tall~low~").is_err());
    }
}
