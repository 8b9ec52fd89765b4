use std::cell::Cell;
use std::rc::Rc;
use vecdraw_core::CommandError;
use vecdraw_designer::{Command, CommandHistory, CreateShapeCommand, LiveHandle};

use crate::support::{blue_rect, ids, session};

/// Adds `delta` to a shared counter; fails on demand.
struct Step {
    counter: Rc<Cell<i32>>,
    delta: i32,
    fail_undo: bool,
}

impl Step {
    fn boxed(counter: &Rc<Cell<i32>>, delta: i32) -> Box<dyn Command> {
        Box::new(Step {
            counter: counter.clone(),
            delta,
            fail_undo: false,
        })
    }
}

impl Command for Step {
    fn execute(&mut self) -> Result<(), CommandError> {
        self.counter.set(self.counter.get() + self.delta);
        Ok(())
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        if self.fail_undo {
            return Err(CommandError::ViewUnavailable);
        }
        self.counter.set(self.counter.get() - self.delta);
        Ok(())
    }

    fn description(&self) -> &str {
        "Step"
    }
}

struct Refused;

impl Command for Refused {
    fn execute(&mut self) -> Result<(), CommandError> {
        Err(CommandError::DocumentUnavailable)
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        Ok(())
    }

    fn description(&self) -> &str {
        "Refused"
    }
}

#[test]
fn test_empty_history() {
    let mut history = CommandHistory::new();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(!history.undo());
    assert!(!history.redo());
    assert_eq!(history.undo_text(), None);
}

#[test]
fn test_undo_redo_symmetry() {
    let s = session();
    let mut history = CommandHistory::new();
    for _ in 0..5 {
        history.execute_command(Box::new(CreateShapeCommand::new(
            s.context.clone(),
            LiveHandle::new(),
            blue_rect(),
        )));
    }
    let full = s.document.borrow().generate_markup();
    let full_ids = ids(&s.document);

    for _ in 0..5 {
        assert!(history.undo());
    }
    assert!(s.document.borrow().is_empty());
    assert!(!history.undo());

    for _ in 0..5 {
        assert!(history.redo());
    }
    assert_eq!(s.document.borrow().generate_markup(), full);
    assert_eq!(ids(&s.document), full_ids);
    assert!(!history.can_redo());
}

#[test]
fn test_execute_clears_redo() {
    let counter = Rc::new(Cell::new(0));
    let mut history = CommandHistory::new();
    history.execute_command(Step::boxed(&counter, 1));
    history.execute_command(Step::boxed(&counter, 2));
    history.undo();
    assert_eq!(history.redo_depth(), 1);
    assert_eq!(history.redo_text(), Some("Step"));

    history.execute_command(Step::boxed(&counter, 10));
    assert!(!history.can_redo());
    assert_eq!(counter.get(), 11);
    assert_eq!(history.undo_depth(), 2);
}

#[test]
fn test_failed_execute_is_not_recorded() {
    let counter = Rc::new(Cell::new(0));
    let mut history = CommandHistory::new();
    history.execute_command(Step::boxed(&counter, 1));
    history.undo();

    assert!(!history.execute_command(Box::new(Refused)));
    assert_eq!(history.undo_depth(), 0);
    // a failed command leaves the redo stack alone
    assert_eq!(history.redo_depth(), 1);
}

#[test]
fn test_failed_undo_drops_command() {
    let counter = Rc::new(Cell::new(0));
    let mut history = CommandHistory::new();
    history.execute_command(Step::boxed(&counter, 1));
    history.execute_command(Box::new(Step {
        counter: counter.clone(),
        delta: 5,
        fail_undo: true,
    }));

    assert!(!history.undo());
    assert_eq!(history.undo_depth(), 1);
    assert!(!history.can_redo());
    assert_eq!(counter.get(), 6);

    assert!(history.undo());
    assert_eq!(counter.get(), 5);
}

#[test]
fn test_max_depth_drops_oldest() {
    let counter = Rc::new(Cell::new(0));
    let mut history = CommandHistory::with_max_depth(3);
    for delta in [1, 10, 100, 1000] {
        history.execute_command(Step::boxed(&counter, delta));
    }
    assert_eq!(history.undo_depth(), 3);
    while history.undo() {}
    // the first step was evicted and cannot be undone
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_listeners_fire_on_change() {
    let counter = Rc::new(Cell::new(0));
    let calls = Rc::new(Cell::new(0));
    let mut history = CommandHistory::new();
    let seen = calls.clone();
    let id = history.subscribe(move || seen.set(seen.get() + 1));

    history.execute_command(Step::boxed(&counter, 1));
    history.undo();
    history.redo();
    assert_eq!(calls.get(), 3);

    history.execute_command(Box::new(Refused));
    assert!(!history.redo());
    assert_eq!(calls.get(), 3);

    history.clear();
    assert_eq!(calls.get(), 4);

    assert!(history.unsubscribe(id));
    assert!(!history.unsubscribe(id));
    history.execute_command(Step::boxed(&counter, 1));
    assert_eq!(calls.get(), 4);
}
