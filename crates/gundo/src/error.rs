#![forbid(unsafe_code)]

//! Error types for history operations and configuration loading.

use std::fmt;

/// A violated precondition on a [`Sequence`](crate::Sequence) operation.
///
/// These are programming errors in the caller. The panicking entry points
/// (`undo`, `redo`, `clear`, `end_group`, `abort_group`) raise them as
/// panics; the `try_*` variants return them so a caller can reject the
/// request without touching the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// `undo` with no done actions.
    NothingToUndo,
    /// `redo` with no undone actions.
    NothingToRedo,
    /// `undo`, `redo` or `clear` while a group is being composed.
    GroupOpen,
    /// `end_group` or `abort_group` with no group open.
    NoOpenGroup,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToUndo => write!(f, "nothing to undo"),
            Self::NothingToRedo => write!(f, "nothing to redo"),
            Self::GroupOpen => write!(f, "operation not allowed while a group is open"),
            Self::NoOpenGroup => write!(f, "no group is open"),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Result of a precondition-checked history operation.
pub type HistoryResult = Result<(), HistoryError>;

/// Errors that can occur when loading a [`SequenceConfig`](crate::SequenceConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
