#![forbid(unsafe_code)]

//! gundo: undo/redo history engine.
//!
//! This crate records user actions as reversible units, lets callers step
//! backward and forward through them, and tells interested views when the
//! ability to undo or redo changes.
//!
//! # Key Components
//!
//! - [`Action`] - A reversible unit with optional disposal
//! - [`ActionType`] - Static undo/redo/dispose table paired with a payload
//! - [`Sequence`] - Chronological log with a cursor and nested groups
//! - [`History`] - Object-safe query/step/subscribe interface
//! - [`HistoryView`] - Observer protocol attached with [`register`]
//! - [`ActionSensitivity`], [`ActionListModel`] - Ready-made views
//! - [`SequenceConfig`] - Depth limit and notification settings
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use gundo::{Action, Sequence};
//!
//! struct Push(Rc<RefCell<Vec<char>>>, char);
//!
//! impl Action for Push {
//!     fn undo(&mut self) { self.0.borrow_mut().pop(); }
//!     fn redo(&mut self) { self.0.borrow_mut().push(self.1); }
//! }
//!
//! let text = Rc::new(RefCell::new(Vec::new()));
//! let mut history = Sequence::new();
//!
//! history.start_group_labeled("Type word");
//! for c in "hi".chars() {
//!     text.borrow_mut().push(c);
//!     history.add_action(Box::new(Push(Rc::clone(&text), c)));
//! }
//! history.end_group();
//!
//! assert_eq!(history.next_undo_description(), Some("Type word"));
//! history.undo();
//! assert!(text.borrow().is_empty());
//! history.redo();
//! assert_eq!(*text.borrow(), vec!['h', 'i']);
//! ```
//!
//! # Threading
//!
//! Histories are single-threaded (`Rc`, `RefCell`); every notification is
//! delivered synchronously inside the mutating call.

pub mod action;
pub mod config;
pub mod error;
pub mod history;
pub mod sequence;
pub mod signal;
pub mod view;

pub use action::{Action, ActionRecord, ActionType, TypedAction};
pub use config::SequenceConfig;
pub use error::{ConfigError, HistoryError, HistoryResult};
pub use history::{History, HistoryEvent, HistoryState, Listener};
pub use sequence::Sequence;
pub use signal::{Connection, HistorySignals};
pub use view::list::{ActionListModel, ListSide, RowChange};
pub use view::sensitivity::ActionSensitivity;
pub use view::{HistorySlot, HistoryView, ViewInterest, ViewRegistration, register};
