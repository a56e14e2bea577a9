#![forbid(unsafe_code)]

//! Reversible actions recorded by a [`Sequence`](crate::Sequence).
//!
//! An action is a unit of work that has *already been performed* by the
//! caller when it is handed to the history. The history only ever asks it to
//! revert ([`Action::undo`]) or re-apply ([`Action::redo`]) itself, and
//! releases it exactly once through [`Action::dispose`] when the record can no
//! longer be reached by either operation.
//!
//! Two ways to describe an action:
//!
//! - Implement [`Action`] on your own type (closures, enums, whatever state
//!   the operation needs).
//! - Pair a static [`ActionType<T>`] table of `fn` pointers with a payload
//!   `T`, the same shape a C-style action registry uses:
//!
//! ```
//! use gundo::{ActionType, Sequence};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! fn dec(c: &mut Rc<Cell<i32>>) { c.set(c.get() - 1) }
//! fn inc(c: &mut Rc<Cell<i32>>) { c.set(c.get() + 1) }
//!
//! static INCREMENT: ActionType<Rc<Cell<i32>>> = ActionType::new(dec, inc);
//!
//! let count = Rc::new(Cell::new(0));
//! let mut seq = Sequence::new();
//!
//! count.set(1);
//! seq.add(&INCREMENT, Rc::clone(&count));
//! seq.undo();
//! assert_eq!(count.get(), 0);
//! ```
//!
//! # Invariants
//!
//! - `undo()` restores the observable state from before the action.
//! - `redo()` restores the observable state from after the action.
//! - `dispose()` runs once, and never for a record still reachable by undo or
//!   redo.

use std::fmt;

/// Fallback description for actions that do not name themselves.
pub const DEFAULT_DESCRIPTION: &str = "Action";

/// A reversible unit of work.
///
/// Implementations must not fail under normal operation. A panic raised from
/// `undo` or `redo` propagates to the caller of the history; the history does
/// not attempt a partial rollback.
pub trait Action {
    /// Revert the effect of this action.
    fn undo(&mut self);

    /// Re-apply the effect of this action after it was undone.
    fn redo(&mut self);

    /// Release the payload.
    ///
    /// Called exactly once when the record is permanently discarded. The
    /// default simply drops `self`.
    fn dispose(self: Box<Self>) {}

    /// Human-readable description for list views.
    fn description(&self) -> &str {
        DEFAULT_DESCRIPTION
    }
}

impl fmt::Debug for dyn Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("description", &self.description())
            .finish()
    }
}

/// Callback signature shared by the undo and redo slots of an [`ActionType`].
pub type ActionFn<T> = fn(&mut T);

/// Callback signature for the optional dispose slot of an [`ActionType`].
pub type DisposeFn<T> = fn(T);

/// Capability descriptor: the operations that apply to payloads of type `T`.
///
/// Usually declared once as a `static` and shared by every action of that
/// kind. Because the payload type is part of the descriptor's type, a
/// mismatched payload is a compile error rather than a runtime contract.
pub struct ActionType<T> {
    /// Reverses the action's effect.
    pub undo: ActionFn<T>,
    /// Re-applies the action's effect.
    pub redo: ActionFn<T>,
    /// Releases the payload. `None` means ordinary drop is enough.
    pub dispose: Option<DisposeFn<T>>,
    /// Description reported to list views.
    pub description: &'static str,
}

// Manual impls: fn pointers are Copy regardless of `T`.
impl<T> Clone for ActionType<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ActionType<T> {}

impl<T> fmt::Debug for ActionType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionType")
            .field("description", &self.description)
            .field("has_dispose", &self.dispose.is_some())
            .finish()
    }
}

impl<T> ActionType<T> {
    /// Create a descriptor with undo and redo operations and no dispose hook.
    #[must_use]
    pub const fn new(undo: ActionFn<T>, redo: ActionFn<T>) -> Self {
        Self {
            undo,
            redo,
            dispose: None,
            description: DEFAULT_DESCRIPTION,
        }
    }

    /// Set the dispose operation.
    #[must_use]
    pub const fn with_dispose(mut self, dispose: DisposeFn<T>) -> Self {
        self.dispose = Some(dispose);
        self
    }

    /// Set the description reported to list views.
    #[must_use]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Bind a payload to this descriptor.
    #[must_use]
    pub fn bind(&self, payload: T) -> TypedAction<T> {
        TypedAction {
            kind: *self,
            payload,
        }
    }
}

/// An [`ActionType`] paired with the payload it operates on.
pub struct TypedAction<T> {
    kind: ActionType<T>,
    payload: T,
}

impl<T> TypedAction<T> {
    /// Borrow the payload.
    #[must_use]
    pub fn payload(&self) -> &T {
        &self.payload
    }
}

impl<T: fmt::Debug> fmt::Debug for TypedAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedAction")
            .field("kind", &self.kind)
            .field("payload", &self.payload)
            .finish()
    }
}

impl<T> Action for TypedAction<T> {
    fn undo(&mut self) {
        (self.kind.undo)(&mut self.payload);
    }

    fn redo(&mut self) {
        (self.kind.redo)(&mut self.payload);
    }

    fn dispose(self: Box<Self>) {
        let TypedAction { kind, payload } = *self;
        if let Some(dispose) = kind.dispose {
            dispose(payload);
        }
    }

    fn description(&self) -> &str {
        self.kind.description
    }
}

/// One entry in a sequence's log.
///
/// Owns its action from the moment it is added until it is disposed. Dropping
/// a record disposes the action, so every path that discards a record
/// (truncating the redo tail, `clear`, eviction, dropping the sequence) runs
/// the dispose hook exactly once.
pub struct ActionRecord {
    action: Option<Box<dyn Action>>,
}

impl fmt::Debug for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRecord")
            .field("description", &self.description())
            .finish()
    }
}

impl ActionRecord {
    pub(crate) fn new(action: Box<dyn Action>) -> Self {
        Self {
            action: Some(action),
        }
    }

    pub(crate) fn undo(&mut self) {
        if let Some(action) = self.action.as_mut() {
            action.undo();
        }
    }

    pub(crate) fn redo(&mut self) {
        if let Some(action) = self.action.as_mut() {
            action.redo();
        }
    }

    /// Description of the wrapped action.
    #[must_use]
    pub fn description(&self) -> &str {
        self.action
            .as_deref()
            .map_or(DEFAULT_DESCRIPTION, |a| a.description())
    }
}

impl Drop for ActionRecord {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action.dispose();
        }
    }
}
