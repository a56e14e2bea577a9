#![forbid(unsafe_code)]

//! Observer protocol for history views.
//!
//! A [`HistoryView`] is anything that mirrors part of a history's state: a
//! toolbar button's sensitivity, a popup list of undoable actions, a status
//! line. Instead of wiring callbacks by hand, a view declares which
//! notifications it cares about via [`HistoryView::interest`] and is attached
//! with [`register`].
//!
//! # Lifecycle
//!
//! ```text
//!  register(view, history)
//!     │  history.connect(listener)          history keeps a Weak listener
//!     │  view.attached(state)
//!     │  view.notify_can_undo(state.can_undo)   (synthetic, if interested)
//!     │  view.notify_can_redo(state.can_redo)   (synthetic, if interested)
//!     ▼
//!  ViewRegistration ── holds Rc<history> + strong listener
//!     │
//!     ▼  unregister() / drop
//!  no further calls reach the view
//! ```
//!
//! The registration owns the only strong reference to the listener and the
//! listener only holds a `Weak` to the view, so neither side keeps the other
//! alive through the subscription.
//!
//! # Failure Modes
//!
//! - **Re-entrant borrow**: notifications borrow the view mutably. A view
//!   that drives its history while it is itself borrowed panics.
//! - **View dropped while registered**: the registration must end before the
//!   view is dropped. The next notification the history emits finds the view
//!   gone and panics with "view dropped while registered".
//! - **Reading the history from a callback**: the history is still mutably
//!   borrowed; borrowing it again panics. Read the passed `HistoryState`.

pub mod list;
pub mod sensitivity;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use bitflags::bitflags;
use tracing::debug;

use crate::history::{History, HistoryEvent, HistoryState, Listener};
use crate::signal::Connection;

bitflags! {
    /// Notifications a view wants to receive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ViewInterest: u8 {
        /// `can_undo` transitions, plus one synthetic call on registration.
        const CAN_UNDO = 0b0001;
        /// `can_redo` transitions, plus one synthetic call on registration.
        const CAN_REDO = 0b0010;
        /// Individual undo and redo steps.
        const STEPS    = 0b0100;
        /// A new action entered the log.
        const CHANGED  = 0b1000;
    }
}

/// An observer of a [`History`].
///
/// Every notification method has an empty default; a view overrides the ones
/// matching its [`interest`](HistoryView::interest).
///
/// Callbacks run inside the mutating history call. The state arguments are
/// post-mutation snapshots; use them instead of querying the history.
///
/// # Panics
///
/// Borrowing the observed history from inside a callback panics, because the
/// history is still mutably borrowed by the operation being reported.
pub trait HistoryView {
    /// Notifications this view wants.
    fn interest(&self) -> ViewInterest;

    /// Called once on registration with the history's current state.
    fn attached(&mut self, _state: &HistoryState) {}

    /// `can_undo` is now `can_undo`.
    fn notify_can_undo(&mut self, _can_undo: bool) {}

    /// `can_redo` is now `can_redo`.
    fn notify_can_redo(&mut self, _can_redo: bool) {}

    /// One action was undone or redone; `step` is
    /// [`HistoryEvent::Undone`] or [`HistoryEvent::Redone`].
    fn notify_step(&mut self, _step: HistoryEvent, _state: &HistoryState) {}

    /// A new action entered the log.
    fn notify_changed(&mut self, _state: &HistoryState) {}
}

fn dispatch<V: HistoryView + ?Sized>(
    view: &mut V,
    interest: ViewInterest,
    event: &HistoryEvent,
    state: &HistoryState,
) {
    match *event {
        HistoryEvent::CanUndo(v) if interest.contains(ViewInterest::CAN_UNDO) => {
            view.notify_can_undo(v);
        }
        HistoryEvent::CanRedo(v) if interest.contains(ViewInterest::CAN_REDO) => {
            view.notify_can_redo(v);
        }
        HistoryEvent::Undone | HistoryEvent::Redone if interest.contains(ViewInterest::STEPS) => {
            view.notify_step(*event, state);
        }
        HistoryEvent::Changed if interest.contains(ViewInterest::CHANGED) => {
            view.notify_changed(state);
        }
        _ => {}
    }
}

/// Attach `view` to `history`.
///
/// The view immediately receives [`HistoryView::attached`] and, for each of
/// `CAN_UNDO` / `CAN_REDO` it is interested in, a synthetic notification
/// carrying the current value. The returned guard keeps `history` alive and
/// ends the subscription when dropped.
///
/// # Panics
///
/// Panics if `history` or `view` is already mutably borrowed.
pub fn register<V, H>(view: &Rc<RefCell<V>>, history: &Rc<RefCell<H>>) -> ViewRegistration<H>
where
    V: HistoryView + 'static,
    H: History + ?Sized,
{
    let interest = view.borrow().interest();
    let active = Rc::new(Cell::new(true));

    let target = Rc::downgrade(view);
    let gate = Rc::clone(&active);
    let listener: Listener = Rc::new(move |event: &HistoryEvent, state: &HistoryState| {
        if !gate.get() {
            return;
        }
        let Some(view) = target.upgrade() else {
            panic!("view dropped while registered: unregister before dropping the view");
        };
        dispatch(&mut *view.borrow_mut(), interest, event, state);
    });

    let connection = history.borrow_mut().connect(listener);
    let state = history.borrow().state();

    {
        let mut view = view.borrow_mut();
        view.attached(&state);
        if interest.contains(ViewInterest::CAN_UNDO) {
            view.notify_can_undo(state.can_undo);
        }
        if interest.contains(ViewInterest::CAN_REDO) {
            view.notify_can_redo(state.can_redo);
        }
    }

    debug!(
        interest = interest.bits(),
        undos = state.undos as u64,
        redos = state.redos as u64,
        "view registered"
    );

    ViewRegistration {
        history: Rc::clone(history),
        connection,
        active,
    }
}

/// A live subscription of a view to a history.
///
/// Unregisters on drop. After [`unregister`](ViewRegistration::unregister)
/// returns (or the guard is dropped), the history never calls into the view
/// again, even from an emission already in progress.
pub struct ViewRegistration<H: History + ?Sized> {
    history: Rc<RefCell<H>>,
    connection: Connection,
    active: Rc<Cell<bool>>,
}

impl<H: History + ?Sized> fmt::Debug for ViewRegistration<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRegistration")
            .field("active", &self.active.get())
            .field("connection", &self.connection)
            .finish()
    }
}

impl<H: History + ?Sized> ViewRegistration<H> {
    /// The history this registration retains.
    #[must_use]
    pub fn history(&self) -> &Rc<RefCell<H>> {
        &self.history
    }

    /// End the subscription.
    pub fn unregister(self) {
        drop(self);
    }
}

impl<H: History + ?Sized> Drop for ViewRegistration<H> {
    fn drop(&mut self) {
        self.active.set(false);
        self.connection.disconnect();
        debug!("view unregistered");
    }
}

/// Holder for the zero-or-one history a view is attached to.
///
/// Attaching a new history unregisters from the previous one first, so a
/// view never observes two histories through the same slot.
pub struct HistorySlot<H: History + ?Sized> {
    registration: Option<ViewRegistration<H>>,
}

impl<H: History + ?Sized> Default for HistorySlot<H> {
    fn default() -> Self {
        Self { registration: None }
    }
}

impl<H: History + ?Sized> fmt::Debug for HistorySlot<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistorySlot")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl<H: History + ?Sized> HistorySlot<H> {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `view` to `history`, or detach it when `history` is `None`.
    pub fn set<V>(&mut self, view: &Rc<RefCell<V>>, history: Option<&Rc<RefCell<H>>>)
    where
        V: HistoryView + 'static,
    {
        // Unregister before registering so the old history is released first.
        self.registration = None;
        self.registration = history.map(|h| register(view, h));
    }

    /// Detach from the current history, if any.
    pub fn clear(&mut self) {
        self.registration = None;
    }

    /// The attached history.
    #[must_use]
    pub fn history(&self) -> Option<&Rc<RefCell<H>>> {
        self.registration.as_ref().map(ViewRegistration::history)
    }

    /// Whether a history is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.registration.is_some()
    }
}
