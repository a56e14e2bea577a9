#![forbid(unsafe_code)]

//! Row model for undo/redo popup lists.
//!
//! Row 0 is always the action the next step acts on: the most recent done
//! action for an undo list, the next action to redo for a redo list. Undoing
//! therefore deletes row 0 of the undo list and inserts row 0 into the redo
//! list, and redoing does the reverse.
//!
//! The model queues [`RowChange`]s so a widget can patch its rows instead of
//! rebuilding them after every step.

use crate::history::{HistoryEvent, HistoryState};

use super::{HistoryView, ViewInterest};

/// Which side of the history a list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSide {
    /// Done actions, most recent first.
    Undo,
    /// Undone actions, next to redo first.
    Redo,
}

impl ListSide {
    fn count(self, state: &HistoryState) -> usize {
        match self {
            Self::Undo => state.undos,
            Self::Redo => state.redos,
        }
    }
}

/// A structural change to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowChange {
    /// A row was inserted at the index.
    Inserted(usize),
    /// The row at the index was removed.
    Deleted(usize),
    /// Rows changed in a way that is not a single insert or delete.
    Reset,
}

/// Toolkit-agnostic model behind an undo or redo popup list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionListModel {
    side: ListSide,
    rows: usize,
    changes: Vec<RowChange>,
}

impl ActionListModel {
    /// Create an empty model for `side`.
    #[must_use]
    pub fn new(side: ListSide) -> Self {
        Self {
            side,
            rows: 0,
            changes: Vec::new(),
        }
    }

    /// Model for the undo popup.
    #[must_use]
    pub fn undo_list() -> Self {
        Self::new(ListSide::Undo)
    }

    /// Model for the redo popup.
    #[must_use]
    pub fn redo_list() -> Self {
        Self::new(ListSide::Redo)
    }

    /// Side of the history shown.
    #[must_use]
    pub fn side(&self) -> ListSide {
        self.side
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Label of the row at `index`, 1-based ("1. Action", "2. Action", ...).
    #[must_use]
    pub fn row_label(&self, index: usize) -> Option<String> {
        (index < self.rows).then(|| format!("{}. Action", index + 1))
    }

    /// Labels of every row, top to bottom.
    pub fn labels(&self) -> Vec<String> {
        (0..self.rows).filter_map(|i| self.row_label(i)).collect()
    }

    /// Steps needed to reach the row at `index` (selecting row `k` undoes or
    /// redoes `k + 1` actions).
    #[must_use]
    pub fn steps_to(&self, index: usize) -> Option<usize> {
        (index < self.rows).then_some(index + 1)
    }

    /// Drain queued row changes.
    pub fn take_changes(&mut self) -> Vec<RowChange> {
        std::mem::take(&mut self.changes)
    }

    /// Move to `target` rows, queueing the matching change.
    fn reconcile(&mut self, target: usize) {
        if target == self.rows {
            return;
        }
        let change = if target == self.rows + 1 {
            RowChange::Inserted(0)
        } else if target + 1 == self.rows {
            RowChange::Deleted(0)
        } else {
            RowChange::Reset
        };
        self.changes.push(change);
        self.rows = target;
    }

    /// Losing the capability empties the list. Gaining it is left to the step
    /// or change event that follows.
    fn flag(&mut self, side: ListSide, enabled: bool) {
        if side == self.side && !enabled {
            self.reconcile(0);
        }
    }
}

impl HistoryView for ActionListModel {
    fn interest(&self) -> ViewInterest {
        ViewInterest::all()
    }

    fn attached(&mut self, state: &HistoryState) {
        self.rows = self.side.count(state);
        self.changes.clear();
        self.changes.push(RowChange::Reset);
    }

    fn notify_can_undo(&mut self, can_undo: bool) {
        self.flag(ListSide::Undo, can_undo);
    }

    fn notify_can_redo(&mut self, can_redo: bool) {
        self.flag(ListSide::Redo, can_redo);
    }

    fn notify_step(&mut self, _step: HistoryEvent, state: &HistoryState) {
        self.reconcile(self.side.count(state));
    }

    fn notify_changed(&mut self, state: &HistoryState) {
        let target = self.side.count(state);
        if self.side == ListSide::Undo && target == self.rows && target > 0 {
            // Depth limit: newest row in at the top, oldest out at the bottom.
            self.changes.push(RowChange::Inserted(0));
            self.changes.push(RowChange::Deleted(target));
            return;
        }
        self.reconcile(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionType;
    use crate::config::SequenceConfig;
    use crate::history::History;
    use crate::sequence::Sequence;
    use crate::view::register;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn noop(_: &mut ()) {}
    static NOOP: ActionType<()> = ActionType::new(noop, noop);

    fn attach(
        seq: Sequence,
    ) -> (
        Rc<RefCell<Sequence>>,
        Rc<RefCell<ActionListModel>>,
        Rc<RefCell<ActionListModel>>,
        Vec<crate::view::ViewRegistration<Sequence>>,
    ) {
        let history = Rc::new(RefCell::new(seq));
        let undo = Rc::new(RefCell::new(ActionListModel::undo_list()));
        let redo = Rc::new(RefCell::new(ActionListModel::redo_list()));
        let regs = vec![register(&undo, &history), register(&redo, &history)];
        undo.borrow_mut().take_changes();
        redo.borrow_mut().take_changes();
        (history, undo, redo, regs)
    }

    #[test]
    fn attach_reflects_existing_rows() {
        let mut seq = Sequence::new();
        seq.add(&NOOP, ());
        seq.add(&NOOP, ());
        seq.undo();

        let history = Rc::new(RefCell::new(seq));
        let undo = Rc::new(RefCell::new(ActionListModel::undo_list()));
        let _reg = register(&undo, &history);

        assert_eq!(undo.borrow().row_count(), 1);
        assert_eq!(undo.borrow_mut().take_changes(), vec![RowChange::Reset]);
        assert_eq!(undo.borrow().labels(), vec!["1. Action"]);
    }

    #[test]
    fn steps_move_rows_between_lists() {
        let (history, undo, redo, _regs) = attach(Sequence::new());

        history.borrow_mut().add(&NOOP, ());
        history.borrow_mut().add(&NOOP, ());
        assert_eq!(undo.borrow().row_count(), 2);
        assert_eq!(
            undo.borrow_mut().take_changes(),
            vec![RowChange::Inserted(0), RowChange::Inserted(0)]
        );

        history.borrow_mut().undo();
        assert_eq!(undo.borrow_mut().take_changes(), vec![RowChange::Deleted(0)]);
        assert_eq!(redo.borrow_mut().take_changes(), vec![RowChange::Inserted(0)]);

        history.borrow_mut().undo();
        assert_eq!(undo.borrow_mut().take_changes(), vec![RowChange::Deleted(0)]);
        assert_eq!(redo.borrow_mut().take_changes(), vec![RowChange::Inserted(0)]);
        assert_eq!(undo.borrow().row_count(), 0);
        assert_eq!(redo.borrow().row_count(), 2);

        history.borrow_mut().redo();
        assert_eq!(undo.borrow_mut().take_changes(), vec![RowChange::Inserted(0)]);
        assert_eq!(redo.borrow_mut().take_changes(), vec![RowChange::Deleted(0)]);
    }

    #[test]
    fn add_discarding_redo_tail_resets_redo_list() {
        let (history, _undo, redo, _regs) = attach(Sequence::new());
        for _ in 0..3 {
            history.borrow_mut().add(&NOOP, ());
        }
        history.borrow_mut().undo_many(3);
        redo.borrow_mut().take_changes();

        history.borrow_mut().add(&NOOP, ());
        assert_eq!(redo.borrow().row_count(), 0);
        assert_eq!(redo.borrow_mut().take_changes(), vec![RowChange::Reset]);
    }

    #[test]
    fn clear_empties_both_lists() {
        let (history, undo, redo, _regs) = attach(Sequence::new());
        for _ in 0..3 {
            history.borrow_mut().add(&NOOP, ());
        }
        history.borrow_mut().undo();
        history.borrow_mut().clear();

        assert_eq!(undo.borrow().row_count(), 0);
        assert_eq!(redo.borrow().row_count(), 0);
        assert_eq!(undo.borrow_mut().take_changes().last(), Some(&RowChange::Reset));
        assert_eq!(redo.borrow_mut().take_changes().last(), Some(&RowChange::Deleted(0)));
    }

    #[test]
    fn depth_limited_add_rotates_rows() {
        let (history, undo, _redo, _regs) = attach(Sequence::with_config(SequenceConfig::bounded(2)));
        history.borrow_mut().add(&NOOP, ());
        history.borrow_mut().add(&NOOP, ());
        undo.borrow_mut().take_changes();

        history.borrow_mut().add(&NOOP, ());
        assert_eq!(undo.borrow().row_count(), 2);
        assert_eq!(
            undo.borrow_mut().take_changes(),
            vec![RowChange::Inserted(0), RowChange::Deleted(2)]
        );
    }

    #[test]
    fn steps_to_selected_row() {
        let (history, undo, _redo, _regs) = attach(Sequence::new());
        for _ in 0..4 {
            history.borrow_mut().add(&NOOP, ());
        }
        let steps = undo.borrow().steps_to(2).unwrap();
        assert_eq!(steps, 3);
        history.borrow_mut().undo_many(steps);
        assert_eq!(undo.borrow().row_count(), 1);
        assert_eq!(undo.borrow().steps_to(1), None);
        assert_eq!(undo.borrow().row_label(1), None);
    }
}
