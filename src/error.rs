//! Error types for save-data and settings parsing.

use std::fmt;

/// Failures while loading or decoding persisted data.
///
/// The on-disk formats are positional (see `save::codec` and
/// `save::settings`), so the decode variants carry enough context to point
/// at the offending field.
#[derive(Debug)]
pub enum SaveError {
    /// The buffer ended before all expected fields were read.
    Truncated {
        /// Number of fields the format requires.
        expected: usize,
        /// Number of fields actually present.
        found: usize,
    },
    /// A field could not be parsed as a number.
    BadField {
        /// Zero-based index of the field in the buffer.
        index: usize,
        /// Name of the field at that position.
        name: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },
    /// The settings line did not contain the expected separated values.
    BadSettings {
        /// What was wrong with the line.
        reason: String,
    },
    /// An underlying file operation failed.
    Io(std::io::Error),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Truncated { expected, found } => {
                write!(
                    f,
                    "save buffer truncated: expected {expected} fields, found {found}"
                )
            }
            SaveError::BadField { index, name, value } => {
                write!(f, "save field {index} ({name}) is not a number: {value:?}")
            }
            SaveError::BadSettings { reason } => {
                write!(f, "malformed settings: {reason}")
            }
            SaveError::Io(e) => write!(f, "save file i/o: {e}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

/// Result type for save/load operations.
pub type SaveResult<T> = Result<T, SaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_truncated() {
        let e = SaveError::Truncated {
            expected: 62,
            found: 10,
        };
        let text = e.to_string();
        assert!(text.contains("62"));
        assert!(text.contains("10"));
    }

    #[test]
    fn test_display_bad_field() {
        let e = SaveError::BadField {
            index: 3,
            name: "food",
            value: "abc".to_string(),
        };
        let text = e.to_string();
        assert!(text.contains("food"));
        assert!(text.contains("abc"));
    }

    #[test]
    fn test_io_source_preserved() {
        let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = SaveError::from(inner);
        assert!(std::error::Error::source(&e).is_some());
    }
}
