//! Undo/redo history.
//!
//! The history owns every command it holds. A command moves from the undo
//! stack to the redo stack and back, and is dropped when it fails to undo or
//! redo, when it is evicted past the depth limit, or when the history is
//! cleared. Executing a new command always empties the redo stack.

use tracing::{debug, warn};
use vecdraw_core::SubscriptionId;

use crate::commands::Command;

type ChangeListener = Box<dyn FnMut()>;

#[derive(Default)]
pub struct CommandHistory {
    undo_stack: Vec<Box<dyn Command>>,
    redo_stack: Vec<Box<dyn Command>>,
    /// 0 means unlimited.
    max_depth: usize,
    listeners: Vec<(SubscriptionId, ChangeListener)>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `max_depth` undo entries, dropping the oldest first.
    /// 0 means unlimited.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Runs `command` and records it on success.
    ///
    /// A command that fails is dropped and the stacks stay as they were.
    pub fn execute_command(&mut self, mut command: Box<dyn Command>) -> bool {
        if let Err(e) = command.execute() {
            warn!("'{}' failed: {}", command.description(), e);
            return false;
        }

        debug!("Executed '{}'", command.description());
        self.redo_stack.clear();
        self.undo_stack.push(command);
        self.enforce_depth();
        self.notify();
        true
    }

    /// Undoes the most recent command.
    ///
    /// A command that fails to undo is dropped and cannot be redone.
    pub fn undo(&mut self) -> bool {
        let Some(mut command) = self.undo_stack.pop() else {
            return false;
        };

        let undone = match command.undo() {
            Ok(()) => {
                debug!("Undid '{}'", command.description());
                self.redo_stack.push(command);
                true
            }
            Err(e) => {
                warn!("Undo of '{}' failed, dropping it: {}", command.description(), e);
                false
            }
        };
        self.notify();
        undone
    }

    /// Re-executes the most recently undone command.
    ///
    /// A command that fails to redo is dropped.
    pub fn redo(&mut self) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };

        let redone = match command.execute() {
            Ok(()) => {
                debug!("Redid '{}'", command.description());
                self.undo_stack.push(command);
                self.enforce_depth();
                true
            }
            Err(e) => {
                warn!("Redo of '{}' failed, dropping it: {}", command.description(), e);
                false
            }
        };
        self.notify();
        redone
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Description of the command [`CommandHistory::undo`] would revert.
    pub fn undo_text(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.description())
    }

    /// Description of the command [`CommandHistory::redo`] would reapply.
    pub fn redo_text(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.description())
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drops every command on both stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.notify();
    }

    /// Registers `listener` to run after every change to the stacks.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut() + 'static,
    {
        let id = SubscriptionId::new();
        self.listeners.push((id, Box::new(listener)));
        debug!("Subscription {} added", id);
        id
    }

    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!("Subscription {} removed", id);
        }
        removed
    }

    fn enforce_depth(&mut self) {
        if self.max_depth == 0 {
            return;
        }
        while self.undo_stack.len() > self.max_depth {
            let evicted = self.undo_stack.remove(0);
            debug!("Evicted '{}' from history", evicted.description());
        }
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }
}

impl std::fmt::Debug for CommandHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandHistory")
            .field("undo_depth", &self.undo_stack.len())
            .field("redo_depth", &self.redo_stack.len())
            .field("max_depth", &self.max_depth)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
