#![no_main]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gundo::{
    Action, ActionListModel, ActionSensitivity, HistoryError, Sequence, SequenceConfig, register,
};
use libfuzzer_sys::fuzz_target;

struct Shift {
    delta: i64,
    value: Rc<Cell<i64>>,
    live: Rc<Cell<i64>>,
}

impl Action for Shift {
    fn undo(&mut self) {
        self.value.set(self.value.get() - self.delta);
    }

    fn redo(&mut self) {
        self.value.set(self.value.get() + self.delta);
    }

    fn dispose(self: Box<Self>) {
        self.live.set(self.live.get() - 1);
    }
}

fuzz_target!(|data: &[u8]| {
    // First byte picks the depth limit (0 = unlimited).
    let Some((&depth, ops)) = data.split_first() else {
        return;
    };
    if ops.len() > 4096 {
        return;
    }
    let config = match depth % 16 {
        0 => SequenceConfig::default(),
        n => SequenceConfig::bounded(usize::from(n)),
    };

    let value = Rc::new(Cell::new(0i64));
    let live = Rc::new(Cell::new(0i64));
    let history = Rc::new(RefCell::new(Sequence::with_config(config.clone())));

    let buttons = Rc::new(RefCell::new(ActionSensitivity::default()));
    let undo_list = Rc::new(RefCell::new(ActionListModel::undo_list()));
    let redo_list = Rc::new(RefCell::new(ActionListModel::redo_list()));
    let regs = (
        register(&buttons, &history),
        register(&undo_list, &history),
        register(&redo_list, &history),
    );

    for &byte in ops {
        let mut seq = history.borrow_mut();
        let grouping = seq.is_grouping();
        match byte % 8 {
            0..=2 => {
                let delta = i64::from(byte as i8);
                value.set(value.get() + delta);
                live.set(live.get() + 1);
                seq.add_action(Box::new(Shift {
                    delta,
                    value: Rc::clone(&value),
                    live: Rc::clone(&live),
                }));
            }
            3 => match seq.try_undo() {
                Ok(()) => {}
                Err(HistoryError::GroupOpen) => assert!(grouping),
                Err(err) => assert_eq!(err, HistoryError::NothingToUndo),
            },
            4 => match seq.try_redo() {
                Ok(()) => {}
                Err(HistoryError::GroupOpen) => assert!(grouping),
                Err(err) => assert_eq!(err, HistoryError::NothingToRedo),
            },
            5 => seq.start_group(),
            6 => {
                let _ = if byte & 0x80 == 0 {
                    seq.try_end_group()
                } else {
                    seq.try_abort_group()
                };
            }
            _ => {
                let _ = seq.try_clear();
            }
        }

        // Invariants that must hold after every operation.
        assert_eq!(seq.count_undos() + seq.count_redos(), seq.len());
        assert_eq!(seq.can_undo(), seq.count_undos() > 0);
        assert_eq!(seq.can_redo(), seq.count_redos() > 0);
        if config.is_bounded() {
            assert!(seq.count_undos() <= config.max_depth);
        }
        if !seq.is_grouping() {
            assert_eq!(buttons.borrow().undo_enabled(), seq.can_undo());
            assert_eq!(buttons.borrow().redo_enabled(), seq.can_redo());
            assert_eq!(undo_list.borrow().row_count(), seq.count_undos());
            assert_eq!(redo_list.borrow().row_count(), seq.count_redos());
        }
    }

    drop(regs);
    assert_eq!(Rc::strong_count(&history), 1);
    drop(history);
    assert_eq!(live.get(), 0, "every action disposed exactly once");
});
