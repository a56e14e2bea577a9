#![forbid(unsafe_code)]

//! Undo/redo enablement for buttons and menu items.

use super::{HistoryView, ViewInterest};

/// Tracks whether undo and redo controls should be enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSensitivity {
    interest: ViewInterest,
    undo_enabled: bool,
    redo_enabled: bool,
    updates: u32,
}

impl Default for ActionSensitivity {
    fn default() -> Self {
        Self::new(ViewInterest::CAN_UNDO | ViewInterest::CAN_REDO)
    }
}

impl ActionSensitivity {
    /// Track the capabilities selected by `interest`.
    ///
    /// Only `CAN_UNDO` and `CAN_REDO` are meaningful here; other bits are
    /// ignored.
    #[must_use]
    pub fn new(interest: ViewInterest) -> Self {
        Self {
            interest: interest & (ViewInterest::CAN_UNDO | ViewInterest::CAN_REDO),
            undo_enabled: false,
            redo_enabled: false,
            updates: 0,
        }
    }

    /// Sensitivity for an undo button.
    #[must_use]
    pub fn undo_button() -> Self {
        Self::new(ViewInterest::CAN_UNDO)
    }

    /// Sensitivity for a redo button.
    #[must_use]
    pub fn redo_button() -> Self {
        Self::new(ViewInterest::CAN_REDO)
    }

    /// Whether the undo control should be enabled.
    #[must_use]
    pub fn undo_enabled(&self) -> bool {
        self.undo_enabled
    }

    /// Whether the redo control should be enabled.
    #[must_use]
    pub fn redo_enabled(&self) -> bool {
        self.redo_enabled
    }

    /// Number of notifications received, including the synthetic ones.
    #[must_use]
    pub fn updates(&self) -> u32 {
        self.updates
    }
}

impl HistoryView for ActionSensitivity {
    fn interest(&self) -> ViewInterest {
        self.interest
    }

    fn notify_can_undo(&mut self, can_undo: bool) {
        self.undo_enabled = can_undo;
        self.updates += 1;
    }

    fn notify_can_redo(&mut self, can_redo: bool) {
        self.redo_enabled = can_redo;
        self.updates += 1;
    }
}
