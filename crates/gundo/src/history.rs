#![forbid(unsafe_code)]

//! The abstract history capability set.
//!
//! [`History`] is the only surface UI collaborators depend on: query whether
//! a step is possible, perform it, and subscribe to transitions. A
//! [`Sequence`](crate::Sequence) is the concrete implementer.
//!
//! # Notification protocol
//!
//! Subscribers receive a [`HistoryEvent`] together with a [`HistoryState`]
//! snapshot taken *after* the mutation completed. Within one mutating call the
//! events arrive in a fixed order:
//!
//! 1. [`HistoryEvent::CanUndo`], only if `can_undo` flipped
//! 2. [`HistoryEvent::CanRedo`], only if `can_redo` flipped
//! 3. [`HistoryEvent::Undone`] / [`HistoryEvent::Redone`] for a single step
//! 4. [`HistoryEvent::Changed`] after a successful `add_action`

use std::fmt;
use std::rc::Rc;

use crate::signal::Connection;

/// Snapshot of a history's reversible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryState {
    /// Whether at least one action can be undone.
    pub can_undo: bool,
    /// Whether at least one action can be redone.
    pub can_redo: bool,
    /// Number of done (undoable) actions.
    pub undos: usize,
    /// Number of undone (redoable) actions.
    pub redos: usize,
}

impl HistoryState {
    /// Build a snapshot from undo/redo counts.
    #[must_use]
    pub const fn from_counts(undos: usize, redos: usize) -> Self {
        Self {
            can_undo: undos > 0,
            can_redo: redos > 0,
            undos,
            redos,
        }
    }

    /// Total number of reachable actions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.undos + self.redos
    }

    /// Whether the history holds no reachable actions.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Boolean transitions from `self` to `next`, can-undo first.
    pub(crate) fn transitions(&self, next: &Self) -> impl Iterator<Item = HistoryEvent> {
        let undo = (self.can_undo != next.can_undo).then_some(HistoryEvent::CanUndo(next.can_undo));
        let redo = (self.can_redo != next.can_redo).then_some(HistoryEvent::CanRedo(next.can_redo));
        undo.into_iter().chain(redo)
    }
}

/// A change reported to history subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    /// `can_undo` changed to the carried value.
    CanUndo(bool),
    /// `can_redo` changed to the carried value.
    CanRedo(bool),
    /// One action was undone.
    Undone,
    /// One action was redone.
    Redone,
    /// A new action entered the log.
    Changed,
}

impl fmt::Display for HistoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanUndo(v) => write!(f, "can-undo={v}"),
            Self::CanRedo(v) => write!(f, "can-redo={v}"),
            Self::Undone => write!(f, "undone"),
            Self::Redone => write!(f, "redone"),
            Self::Changed => write!(f, "changed"),
        }
    }
}

/// A subscriber callback.
pub type Listener = Rc<dyn Fn(&HistoryEvent, &HistoryState)>;

/// Capability set of an undo/redo history.
///
/// The trait is object safe so views can hold `dyn History`.
pub trait History {
    /// Whether there is an action to undo.
    fn can_undo(&self) -> bool;

    /// Whether there is an action to redo.
    fn can_redo(&self) -> bool;

    /// Number of actions that can be undone.
    fn count_undos(&self) -> usize;

    /// Number of actions that can be redone.
    fn count_redos(&self) -> usize;

    /// Undo one action.
    ///
    /// # Panics
    ///
    /// Panics if nothing can be undone or a group is open.
    fn undo(&mut self);

    /// Redo one action.
    ///
    /// # Panics
    ///
    /// Panics if nothing can be redone or a group is open.
    fn redo(&mut self);

    /// Subscribe to change notifications.
    ///
    /// Delivery stops once the returned [`Connection`] is dropped. The
    /// listener runs while the history is still mutably borrowed by the
    /// operation that triggered it, so it must read the [`HistoryState`] it is
    /// passed rather than query the history.
    ///
    /// # Panics
    ///
    /// With the history behind `Rc<RefCell<_>>`, a listener that borrows it
    /// (even immutably) panics on the already-held mutable borrow.
    fn connect(&mut self, listener: Listener) -> Connection;

    /// Snapshot of the current state.
    fn state(&self) -> HistoryState {
        HistoryState::from_counts(self.count_undos(), self.count_redos())
    }

    /// Undo up to `n` actions, stopping early when nothing is left.
    ///
    /// Returns the number of actions undone.
    fn undo_many(&mut self, n: usize) -> usize {
        let mut done = 0;
        while done < n && self.can_undo() {
            self.undo();
            done += 1;
        }
        done
    }

    /// Redo up to `n` actions, stopping early when nothing is left.
    ///
    /// Returns the number of actions redone.
    fn redo_many(&mut self, n: usize) -> usize {
        let mut done = 0;
        while done < n && self.can_redo() {
            self.redo();
            done += 1;
        }
        done
    }
}
