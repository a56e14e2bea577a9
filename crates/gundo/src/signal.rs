#![forbid(unsafe_code)]

//! Subscriber list for history notifications.
//!
//! # Design
//!
//! [`HistorySignals`] stores listeners as `Weak` references; the matching
//! strong `Rc` lives in the [`Connection`] guard handed back to the
//! subscriber. The history therefore never keeps a subscriber alive, and
//! dropping the guard is enough to stop delivery: the weak reference fails to
//! upgrade on the next emission and is pruned then or on the next `connect`.
//!
//! # Failure Modes
//!
//! - **Re-entrant mutation**: a listener that mutates the emitting history
//!   would need a second mutable borrow of it. With `Rc<RefCell<_>>` this
//!   panics, which is intended: it indicates a cycle in the subscriber graph.

use std::rc::{Rc, Weak};
use tracing::{info_span, trace};
use web_time::Instant;

use crate::history::{HistoryEvent, HistoryState, Listener};

type ListenerWeak = Weak<dyn Fn(&HistoryEvent, &HistoryState)>;

/// Listener registry owned by a history.
#[derive(Default)]
pub struct HistorySignals {
    listeners: Vec<ListenerWeak>,
    emitted: u64,
}

impl std::fmt::Debug for HistorySignals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistorySignals")
            .field("listener_count", &self.listeners.len())
            .field("emitted", &self.emitted)
            .finish()
    }
}

impl HistorySignals {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Delivery lasts as long as the returned guard.
    pub fn connect(&mut self, listener: Listener) -> Connection {
        self.prune();
        self.listeners.push(Rc::downgrade(&listener));
        Connection {
            listener: Some(listener),
        }
    }

    /// Number of registered listeners, including dead ones not yet pruned.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Total number of events emitted so far.
    #[must_use]
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    fn prune(&mut self) {
        self.listeners.retain(|w| w.strong_count() > 0);
    }

    /// Deliver `events` in order to every live listener and prune dead ones.
    pub fn emit(&mut self, events: &[HistoryEvent], state: &HistoryState) {
        if events.is_empty() {
            return;
        }
        self.emitted += events.len() as u64;

        self.prune();
        let live: Vec<Listener> = self.listeners.iter().filter_map(Weak::upgrade).collect();
        if live.is_empty() {
            return;
        }

        let start = Instant::now();
        let span = info_span!(
            "gundo.notify",
            events = events.len() as u64,
            listeners = live.len() as u64,
            duration_us = tracing::field::Empty
        );
        let _entered = span.enter();

        for event in events {
            trace!(
                %event,
                undos = state.undos as u64,
                redos = state.redos as u64,
                "deliver"
            );
            for listener in &live {
                listener(event, state);
            }
        }

        span.record("duration_us", start.elapsed().as_micros() as u64);
    }
}

/// RAII guard for a listener.
///
/// Dropping the guard (or calling [`Connection::disconnect`]) releases the
/// strong reference, after which the history can no longer reach the
/// listener.
pub struct Connection {
    listener: Option<Listener>,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl Connection {
    /// Whether the listener is still held.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.listener.is_some()
    }

    /// Stop delivery immediately.
    pub fn disconnect(&mut self) {
        self.listener = None;
    }
}
