//! Bounded undo/redo stacks of [`Command`]s.
//!
//! The manager only tracks commands; applying their patches to a document is
//! the caller's job (see `DesignerState`).

use std::collections::VecDeque;

use crate::commands::Command;

/// Default number of commands kept on the undo stack.
pub const DEFAULT_MAX_DEPTH: usize = 50;

#[derive(Debug, Clone)]
pub struct UndoRedoManager {
    undo_stack: VecDeque<Command>,
    redo_stack: Vec<Command>,
    max_depth: usize,
}

impl UndoRedoManager {
    /// Creates a manager keeping at most `max_depth` undoable commands.
    /// A depth of zero is raised to one.
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Records a command that has already been applied. Clears the redo
    /// stack and drops the oldest command past the depth limit.
    pub fn record(&mut self, cmd: Command) {
        self.undo_stack.push_back(cmd);
        self.redo_stack.clear();
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }

    /// Moves the newest command to the redo stack and returns it so the
    /// caller can apply its `before` patch.
    pub fn undo(&mut self) -> Option<&Command> {
        let cmd = self.undo_stack.pop_back()?;
        self.redo_stack.push(cmd);
        self.redo_stack.last()
    }

    /// Moves the newest undone command back and returns it so the caller can
    /// apply its `after` patch.
    pub fn redo(&mut self) -> Option<&Command> {
        let cmd = self.redo_stack.pop()?;
        self.undo_stack.push_back(cmd);
        self.undo_stack.back()
    }

    /// Command the next `undo` would return, left in place.
    pub fn peek_undo(&self) -> Option<&Command> {
        self.undo_stack.back()
    }

    /// Command the next `redo` would return, left in place.
    pub fn peek_redo(&self) -> Option<&Command> {
        self.redo_stack.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Name of the command the next undo would revert.
    pub fn undo_name(&self) -> Option<&str> {
        self.undo_stack.back().map(|c| c.name.as_str())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
