#![forbid(unsafe_code)]

//! The undo/redo log.
//!
//! A [`Sequence`] keeps its actions in chronological order together with a
//! cursor that separates done actions from undone ones:
//!
//! ```text
//!   log:    [ a1 ][ a2 ][ a3 ][ a4 ][ a5 ]
//!                              ^
//!                            cursor = 3
//!   undo() reverts a3, redo() re-applies a4.
//!
//! add(a6) at cursor 3
//!   log:    [ a1 ][ a2 ][ a3 ][ a6 ]       a4, a5 disposed
//!                                  ^
//!                                cursor = 4
//! ```
//!
//! # Groups
//!
//! `start_group` opens a child sequence; while it is open every `add_action`
//! is delegated down the chain to the innermost open group. `end_group`
//! folds the innermost group into a single record of its parent whose undo
//! reverts every member newest-first and whose redo re-applies them
//! oldest-first. Empty groups vanish. `abort_group` disposes the innermost
//! group and everything in it.
//!
//! # Invariants
//!
//! 1. `0 <= cursor <= log.len()`
//! 2. `can_undo() == (cursor > 0)`, `can_redo() == (cursor < log.len())`
//! 3. Adding an action disposes every record at or after the cursor first.
//! 4. While a group is open, `undo`, `redo` and `clear` are rejected.
//! 5. Each record is disposed exactly once, and never while reachable.

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::action::{Action, ActionRecord, ActionType};
use crate::config::SequenceConfig;
use crate::error::{HistoryError, HistoryResult};
use crate::history::{History, HistoryEvent, HistoryState, Listener};
use crate::signal::{Connection, HistorySignals};

/// Description reported by unlabeled groups.
pub const GROUP_DESCRIPTION: &str = "Group";

/// An undo/redo log with nested grouping.
pub struct Sequence {
    /// Records in chronological order.
    log: VecDeque<ActionRecord>,
    /// Index of the next record to redo.
    cursor: usize,
    /// Innermost-first chain of open groups.
    group: Option<Box<Sequence>>,
    /// Description used when this sequence is folded into its parent.
    label: Option<String>,
    config: SequenceConfig,
    signals: HistorySignals,
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("undos", &self.count_undos())
            .field("redos", &self.count_redos())
            .field("group_depth", &self.group_depth())
            .field("signals", &self.signals)
            .field("config", &self.config)
            .finish()
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequence {
    /// Create an empty sequence with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SequenceConfig::default())
    }

    /// Create an empty sequence with the given configuration.
    #[must_use]
    pub fn with_config(config: SequenceConfig) -> Self {
        Self {
            log: VecDeque::new(),
            cursor: 0,
            group: None,
            label: None,
            config,
            signals: HistorySignals::new(),
        }
    }

    fn group_child(label: Option<String>) -> Self {
        Self {
            label,
            ..Self::with_config(SequenceConfig::default().with_notify(false))
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Whether there is an action to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether there is an action to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.log.len()
    }

    /// Number of actions that can be undone.
    #[must_use]
    pub fn count_undos(&self) -> usize {
        self.cursor
    }

    /// Number of actions that can be redone.
    #[must_use]
    pub fn count_redos(&self) -> usize {
        self.log.len() - self.cursor
    }

    /// Total number of records in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> HistoryState {
        HistoryState::from_counts(self.count_undos(), self.count_redos())
    }

    /// Whether a group is being composed.
    #[must_use]
    pub fn is_grouping(&self) -> bool {
        self.group.is_some()
    }

    /// Number of nested groups currently open.
    #[must_use]
    pub fn group_depth(&self) -> usize {
        let mut depth = 0;
        let mut level = self.group.as_deref();
        while let Some(group) = level {
            depth += 1;
            level = group.group.as_deref();
        }
        depth
    }

    /// Get the current configuration.
    #[must_use]
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Descriptions of undoable actions, most recent first.
    pub fn undo_descriptions(&self, limit: usize) -> Vec<&str> {
        self.log
            .range(..self.cursor)
            .rev()
            .take(limit)
            .map(ActionRecord::description)
            .collect()
    }

    /// Descriptions of redoable actions, next to redo first.
    pub fn redo_descriptions(&self, limit: usize) -> Vec<&str> {
        self.log
            .range(self.cursor..)
            .take(limit)
            .map(ActionRecord::description)
            .collect()
    }

    /// Description of the action the next `undo` reverts.
    #[must_use]
    pub fn next_undo_description(&self) -> Option<&str> {
        let index = self.cursor.checked_sub(1)?;
        self.log.get(index).map(ActionRecord::description)
    }

    /// Description of the action the next `redo` re-applies.
    #[must_use]
    pub fn next_redo_description(&self) -> Option<&str> {
        self.log.get(self.cursor).map(ActionRecord::description)
    }

    // ========================================================================
    // Subscription
    // ========================================================================

    /// Subscribe a callback to change notifications.
    ///
    /// The callback runs synchronously inside the mutating call, after the
    /// log reached its new state, and receives a snapshot of that state.
    pub fn subscribe(
        &mut self,
        callback: impl Fn(&HistoryEvent, &HistoryState) + 'static,
    ) -> Connection {
        self.signals.connect(Rc::new(callback))
    }

    /// Number of registered listeners, including dead ones not yet pruned.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.signals.listener_count()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Record an action that has already been performed.
    ///
    /// If a group is open the action joins the innermost group. Otherwise
    /// every undone action is disposed and the new one becomes the most
    /// recent undoable action.
    pub fn add_action(&mut self, action: Box<dyn Action>) {
        if let Some(group) = self.group.as_deref_mut() {
            trace!(description = action.description(), "add delegated to group");
            group.add_action(action);
            return;
        }

        let before = self.state();
        let discarded = self.log.len() - self.cursor;
        // Dropping a record disposes its action.
        self.log.truncate(self.cursor);
        self.log.push_back(ActionRecord::new(action));
        self.cursor = self.log.len();
        let evicted = self.enforce_depth();

        debug!(
            undos = self.cursor as u64,
            discarded = discarded as u64,
            evicted = evicted as u64,
            "action added"
        );
        self.notify(before, Some(HistoryEvent::Changed));
    }

    /// Record a payload paired with a static capability descriptor.
    pub fn add<T: 'static>(&mut self, kind: &ActionType<T>, payload: T) {
        self.add_action(Box::new(kind.bind(payload)));
    }

    /// Undo the most recent action.
    ///
    /// # Panics
    ///
    /// Panics if nothing can be undone or a group is open.
    #[track_caller]
    pub fn undo(&mut self) {
        if let Err(err) = self.try_undo() {
            panic!("Sequence::undo: {err}");
        }
    }

    /// Undo the most recent action, rejecting the call if it is not allowed.
    pub fn try_undo(&mut self) -> HistoryResult {
        if self.group.is_some() {
            return Err(HistoryError::GroupOpen);
        }
        if !self.can_undo() {
            return Err(HistoryError::NothingToUndo);
        }

        let before = self.state();
        self.cursor -= 1;
        self.log[self.cursor].undo();

        debug!(
            undos = self.count_undos() as u64,
            redos = self.count_redos() as u64,
            "undo"
        );
        self.notify(before, Some(HistoryEvent::Undone));
        Ok(())
    }

    /// Redo the most recently undone action.
    ///
    /// # Panics
    ///
    /// Panics if nothing can be redone or a group is open.
    #[track_caller]
    pub fn redo(&mut self) {
        if let Err(err) = self.try_redo() {
            panic!("Sequence::redo: {err}");
        }
    }

    /// Redo the most recently undone action, rejecting the call if it is not
    /// allowed.
    pub fn try_redo(&mut self) -> HistoryResult {
        if self.group.is_some() {
            return Err(HistoryError::GroupOpen);
        }
        if !self.can_redo() {
            return Err(HistoryError::NothingToRedo);
        }

        let before = self.state();
        self.log[self.cursor].redo();
        self.cursor += 1;

        debug!(
            undos = self.count_undos() as u64,
            redos = self.count_redos() as u64,
            "redo"
        );
        self.notify(before, Some(HistoryEvent::Redone));
        Ok(())
    }

    /// Dispose every action and reset the cursor.
    ///
    /// # Panics
    ///
    /// Panics if a group is open.
    #[track_caller]
    pub fn clear(&mut self) {
        if let Err(err) = self.try_clear() {
            panic!("Sequence::clear: {err}");
        }
    }

    /// Dispose every action and reset the cursor, rejecting the call while a
    /// group is open.
    pub fn try_clear(&mut self) -> HistoryResult {
        if self.group.is_some() {
            return Err(HistoryError::GroupOpen);
        }

        let before = self.state();
        let disposed = self.log.len();
        self.log.clear();
        self.cursor = 0;

        debug!(disposed = disposed as u64, "history cleared");
        self.notify(before, None);
        Ok(())
    }

    /// Open a group. Nested calls open a group inside the innermost one.
    pub fn start_group(&mut self) {
        self.open_group(None, 1);
    }

    /// Open a group that describes itself as `label` once folded.
    pub fn start_group_labeled(&mut self, label: impl Into<String>) {
        self.open_group(Some(label.into()), 1);
    }

    fn open_group(&mut self, label: Option<String>, depth: usize) {
        match self.group.as_deref_mut() {
            Some(group) => group.open_group(label, depth + 1),
            None => {
                trace!(depth = depth as u64, "group opened");
                self.group = Some(Box::new(Self::group_child(label)));
            }
        }
    }

    /// Close the innermost open group.
    ///
    /// A non-empty group becomes one action of its parent; an empty group is
    /// discarded.
    ///
    /// # Panics
    ///
    /// Panics if no group is open.
    #[track_caller]
    pub fn end_group(&mut self) {
        if let Err(err) = self.try_end_group() {
            panic!("Sequence::end_group: {err}");
        }
    }

    /// Close the innermost open group, rejecting the call if none is open.
    pub fn try_end_group(&mut self) -> HistoryResult {
        let Some(mut group) = self.group.take() else {
            return Err(HistoryError::NoOpenGroup);
        };

        if group.group.is_some() {
            let result = group.try_end_group();
            self.group = Some(group);
            return result;
        }

        if group.is_empty() {
            trace!("empty group discarded");
        } else {
            trace!(members = group.len() as u64, "group closed");
            self.add_action(Box::new(GroupAction { members: *group }));
        }
        Ok(())
    }

    /// Discard the innermost open group and dispose its actions.
    ///
    /// # Panics
    ///
    /// Panics if no group is open.
    #[track_caller]
    pub fn abort_group(&mut self) {
        if let Err(err) = self.try_abort_group() {
            panic!("Sequence::abort_group: {err}");
        }
    }

    /// Discard the innermost open group, rejecting the call if none is open.
    pub fn try_abort_group(&mut self) -> HistoryResult {
        let Some(mut group) = self.group.take() else {
            return Err(HistoryError::NoOpenGroup);
        };

        if group.group.is_some() {
            let result = group.try_abort_group();
            self.group = Some(group);
            return result;
        }

        trace!(disposed = group.len() as u64, "group aborted");
        drop(group);
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Dispose the oldest records beyond the configured depth.
    fn enforce_depth(&mut self) -> usize {
        let mut evicted = 0;
        while self.cursor > self.config.max_depth {
            if self.log.pop_front().is_none() {
                break;
            }
            self.cursor -= 1;
            evicted += 1;
        }
        if evicted > 0 {
            warn!(
                evicted = evicted as u64,
                max_depth = self.config.max_depth as u64,
                "depth limit evicted oldest actions"
            );
        }
        evicted
    }

    /// Emit the boolean transitions since `before`, then `step`.
    fn notify(&mut self, before: HistoryState, step: Option<HistoryEvent>) {
        if !self.config.notify {
            return;
        }
        let after = self.state();
        let events: Vec<HistoryEvent> = before.transitions(&after).chain(step).collect();
        self.signals.emit(&events, &after);
    }
}

impl History for Sequence {
    fn can_undo(&self) -> bool {
        Sequence::can_undo(self)
    }

    fn can_redo(&self) -> bool {
        Sequence::can_redo(self)
    }

    fn count_undos(&self) -> usize {
        Sequence::count_undos(self)
    }

    fn count_redos(&self) -> usize {
        Sequence::count_redos(self)
    }

    fn undo(&mut self) {
        Sequence::undo(self);
    }

    fn redo(&mut self) {
        Sequence::redo(self);
    }

    fn connect(&mut self, listener: Listener) -> Connection {
        self.signals.connect(listener)
    }

    fn state(&self) -> HistoryState {
        Sequence::state(self)
    }
}

/// A closed group folded into a single record of its parent.
struct GroupAction {
    members: Sequence,
}

impl Action for GroupAction {
    fn undo(&mut self) {
        while self.members.can_undo() {
            self.members.undo();
        }
    }

    fn redo(&mut self) {
        while self.members.can_redo() {
            self.members.redo();
        }
    }

    fn description(&self) -> &str {
        self.members.label.as_deref().unwrap_or(GROUP_DESCRIPTION)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct Counter {
        count: Rc<Cell<i32>>,
        disposed: Rc<Cell<u32>>,
    }

    fn dec(c: &mut Counter) {
        c.count.set(c.count.get() - 1);
    }

    fn inc(c: &mut Counter) {
        c.count.set(c.count.get() + 1);
    }

    fn release(c: Counter) {
        c.disposed.set(c.disposed.get() + 1);
    }

    static INCREMENT: ActionType<Counter> = ActionType::new(dec, inc)
        .with_dispose(release)
        .with_description("Increment");

    struct Fixture {
        seq: Sequence,
        count: Rc<Cell<i32>>,
        disposed: Rc<Cell<u32>>,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_config(SequenceConfig::default())
        }

        fn with_config(config: SequenceConfig) -> Self {
            Self {
                seq: Sequence::with_config(config),
                count: Rc::new(Cell::new(0)),
                disposed: Rc::new(Cell::new(0)),
            }
        }

        /// Perform an increment and record it.
        fn inc(&mut self) {
            self.count.set(self.count.get() + 1);
            self.seq.add(
                &INCREMENT,
                Counter {
                    count: Rc::clone(&self.count),
                    disposed: Rc::clone(&self.disposed),
                },
            );
        }
    }

    #[test]
    fn new_sequence_is_empty() {
        let seq = Sequence::new();
        assert!(!seq.can_undo());
        assert!(!seq.can_redo());
        assert_eq!(seq.count_undos(), 0);
        assert_eq!(seq.count_redos(), 0);
        assert!(seq.is_empty());
        assert!(!seq.is_grouping());
    }

    #[test]
    fn undo_redo_counter_scenario() {
        let mut f = Fixture::new();

        f.inc();
        assert_eq!(f.count.get(), 1);
        f.seq.undo();
        assert_eq!(f.count.get(), 0);
        assert!(f.seq.can_redo());
        f.seq.redo();
        assert_eq!(f.count.get(), 1);
        assert!(!f.seq.can_redo());
        f.seq.undo();
        assert_eq!(f.count.get(), 0);
        f.seq.redo();
        assert_eq!(f.count.get(), 1);

        assert_eq!(f.seq.count_undos(), 1);
        assert_eq!(f.seq.count_redos(), 0);

        drop(f.seq);
        assert_eq!(f.count.get(), 1, "dropping the history does not undo");
        assert_eq!(f.disposed.get(), 1);
    }

    #[test]
    fn nested_group_scenario() {
        let mut f = Fixture::new();

        f.inc();
        f.seq.start_group();
        for _ in 0..4 {
            f.inc();
        }
        f.seq.end_group();
        assert_eq!(f.count.get(), 5);
        assert_eq!(f.seq.count_undos(), 2);

        f.seq.undo();
        assert_eq!(f.count.get(), 1);
        f.seq.undo();
        assert_eq!(f.count.get(), 0);
        f.seq.redo();
        assert_eq!(f.count.get(), 1);
        f.seq.redo();
        assert_eq!(f.count.get(), 5);

        drop(f.seq);
        assert_eq!(f.disposed.get(), 5);
    }

    #[test]
    fn add_after_undo_discards_redo_tail() {
        let mut f = Fixture::new();
        f.inc();
        f.inc();
        f.inc();
        f.seq.undo();
        f.seq.undo();
        assert_eq!(f.seq.count_redos(), 2);
        assert_eq!(f.disposed.get(), 0);

        f.inc();
        assert_eq!(f.seq.count_redos(), 0);
        assert_eq!(f.seq.count_undos(), 2);
        assert_eq!(f.disposed.get(), 2);
    }

    #[test]
    fn clear_disposes_everything() {
        let mut f = Fixture::new();
        f.inc();
        f.inc();
        f.seq.undo();
        f.seq.clear();

        assert!(f.seq.is_empty());
        assert!(!f.seq.can_undo());
        assert!(!f.seq.can_redo());
        assert_eq!(f.disposed.get(), 2);
    }

    #[test]
    fn empty_group_is_a_noop() {
        let mut f = Fixture::new();
        f.inc();
        f.seq.start_group();
        f.seq.end_group();
        assert_eq!(f.seq.count_undos(), 1);
        assert_eq!(f.seq.count_redos(), 0);
        assert!(!f.seq.is_grouping());
    }

    #[test]
    fn abort_group_disposes_members() {
        let mut f = Fixture::new();
        f.inc();
        f.seq.start_group();
        f.inc();
        f.inc();
        f.seq.abort_group();

        assert_eq!(f.seq.count_undos(), 1);
        assert_eq!(f.disposed.get(), 2);
        assert!(!f.seq.is_grouping());
    }

    #[test]
    fn nested_groups_fold_innermost_first() {
        let mut f = Fixture::new();
        f.seq.start_group_labeled("outer");
        f.inc();
        f.seq.start_group_labeled("inner");
        f.inc();
        f.inc();
        assert_eq!(f.seq.group_depth(), 2);
        f.seq.end_group();
        assert_eq!(f.seq.group_depth(), 1);
        assert_eq!(f.seq.count_undos(), 0, "outer group still open");
        f.seq.end_group();

        assert_eq!(f.seq.count_undos(), 1);
        assert_eq!(f.seq.next_undo_description(), Some("outer"));
        f.seq.undo();
        assert_eq!(f.count.get(), 0);
        f.seq.redo();
        assert_eq!(f.count.get(), 3);
    }

    #[test]
    fn abort_nested_group_keeps_outer() {
        let mut f = Fixture::new();
        f.seq.start_group();
        f.inc();
        f.seq.start_group();
        f.inc();
        f.seq.abort_group();
        assert_eq!(f.seq.group_depth(), 1);
        assert_eq!(f.disposed.get(), 1);
        f.seq.end_group();
        assert_eq!(f.seq.count_undos(), 1);
    }

    #[test]
    fn group_undo_order_is_newest_first() {
        struct Tagged(&'static str, Rc<RefCell<Vec<String>>>);
        impl Action for Tagged {
            fn undo(&mut self) {
                self.1.borrow_mut().push(format!("undo {}", self.0));
            }
            fn redo(&mut self) {
                self.1.borrow_mut().push(format!("redo {}", self.0));
            }
        }

        let log = Rc::new(RefCell::new(Vec::new()));
        let mut seq = Sequence::new();
        seq.start_group();
        seq.add_action(Box::new(Tagged("A", Rc::clone(&log))));
        seq.add_action(Box::new(Tagged("B", Rc::clone(&log))));
        seq.end_group();

        seq.undo();
        seq.redo();
        assert_eq!(
            *log.borrow(),
            vec!["undo B", "undo A", "redo A", "redo B"]
        );
    }

    #[test]
    fn preconditions_are_rejected() {
        let mut f = Fixture::new();
        assert_eq!(f.seq.try_undo(), Err(HistoryError::NothingToUndo));
        assert_eq!(f.seq.try_redo(), Err(HistoryError::NothingToRedo));
        assert_eq!(f.seq.try_end_group(), Err(HistoryError::NoOpenGroup));
        assert_eq!(f.seq.try_abort_group(), Err(HistoryError::NoOpenGroup));

        f.inc();
        f.seq.start_group();
        assert_eq!(f.seq.try_undo(), Err(HistoryError::GroupOpen));
        assert_eq!(f.seq.try_redo(), Err(HistoryError::GroupOpen));
        assert_eq!(f.seq.try_clear(), Err(HistoryError::GroupOpen));
        assert_eq!(f.seq.count_undos(), 1, "rejected calls leave the log alone");
    }

    #[test]
    #[should_panic(expected = "nothing to undo")]
    fn undo_on_empty_panics() {
        Sequence::new().undo();
    }

    #[test]
    #[should_panic(expected = "nothing to redo")]
    fn redo_at_head_panics() {
        Sequence::new().redo();
    }

    #[test]
    #[should_panic(expected = "group is open")]
    fn clear_with_open_group_panics() {
        let mut seq = Sequence::new();
        seq.start_group();
        seq.clear();
    }

    #[test]
    #[should_panic(expected = "no group is open")]
    fn end_group_without_group_panics() {
        Sequence::new().end_group();
    }

    #[test]
    fn notifications_follow_transitions() {
        let mut f = Fixture::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let _conn = f
            .seq
            .subscribe(move |e, _| sink.borrow_mut().push(*e));

        f.inc();
        f.inc();
        f.seq.undo();
        f.seq.undo();
        f.seq.redo();
        f.inc();
        f.seq.clear();

        use HistoryEvent::*;
        assert_eq!(
            *events.borrow(),
            vec![
                CanUndo(true),
                Changed,
                Changed,
                CanRedo(true),
                Undone,
                CanUndo(false),
                Undone,
                CanUndo(true),
                Redone,
                CanRedo(false),
                Changed,
                CanUndo(false),
            ]
        );
    }

    #[test]
    fn adds_inside_group_are_silent_until_close() {
        let mut f = Fixture::new();
        let hits = Rc::new(Cell::new(0u32));
        let hits_clone = Rc::clone(&hits);
        let _conn = f.seq.subscribe(move |_, _| hits_clone.set(hits_clone.get() + 1));

        f.seq.start_group();
        f.inc();
        f.inc();
        assert_eq!(hits.get(), 0);
        f.seq.end_group();
        assert_eq!(hits.get(), 2, "can-undo flip plus changed");
    }

    #[test]
    fn notify_disabled_emits_nothing() {
        let mut f = Fixture::with_config(SequenceConfig::default().with_notify(false));
        let hits = Rc::new(Cell::new(0u32));
        let hits_clone = Rc::clone(&hits);
        let _conn = f.seq.subscribe(move |_, _| hits_clone.set(hits_clone.get() + 1));

        f.inc();
        f.seq.undo();
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn depth_limit_evicts_oldest() {
        let mut f = Fixture::with_config(SequenceConfig::bounded(3));
        for _ in 0..5 {
            f.inc();
        }
        assert_eq!(f.seq.count_undos(), 3);
        assert_eq!(f.disposed.get(), 2);

        f.seq.undo_many(10);
        assert_eq!(f.count.get(), 2, "evicted actions cannot be undone");
    }

    #[test]
    fn descriptions() {
        let mut f = Fixture::new();
        f.inc();
        f.seq.start_group();
        f.inc();
        f.seq.end_group();
        f.inc();
        f.seq.undo();

        assert_eq!(f.seq.undo_descriptions(5), vec!["Group", "Increment"]);
        assert_eq!(f.seq.undo_descriptions(1), vec!["Group"]);
        assert_eq!(f.seq.redo_descriptions(5), vec!["Increment"]);
        assert_eq!(f.seq.next_undo_description(), Some("Group"));
        assert_eq!(f.seq.next_redo_description(), Some("Increment"));
    }

    #[test]
    fn undo_many_and_redo_many_stop_at_ends() {
        let mut f = Fixture::new();
        for _ in 0..3 {
            f.inc();
        }
        assert_eq!(f.seq.undo_many(2), 2);
        assert_eq!(f.seq.undo_many(5), 1);
        assert_eq!(f.count.get(), 0);
        assert_eq!(f.seq.redo_many(5), 3);
        assert_eq!(f.count.get(), 3);
    }

    #[test]
    fn dropping_with_open_group_disposes_all() {
        let mut f = Fixture::new();
        f.inc();
        f.seq.start_group();
        f.inc();
        f.seq.start_group();
        f.inc();
        drop(f.seq);
        assert_eq!(f.disposed.get(), 3);
    }

    #[test]
    fn debug_impl() {
        let seq = Sequence::new();
        let dbg = format!("{seq:?}");
        assert!(dbg.contains("Sequence"));
        assert!(dbg.contains("undos"));
        assert!(dbg.contains("group_depth"));
    }
}
