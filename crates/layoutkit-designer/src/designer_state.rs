//! Designer state manager for UI integration.
//! Owns the document, the command history and the layout settings, and
//! turns user actions into recorded commands.

use layoutkit_core::{Axis, Result};
use layoutkit_settings::{Config, DistributeSettings};

use crate::commands::{distribute_shapes, Command};
use crate::document::Document;
use crate::history::UndoRedoManager;

#[derive(Debug, Clone)]
pub struct DesignerState {
    pub document: Document,
    pub settings: DistributeSettings,
    pub is_modified: bool,
    history: UndoRedoManager,
}

impl DesignerState {
    /// Creates a new designer state with an empty single-page document.
    pub fn new() -> Self {
        Self::with_document(Document::default(), &Config::default())
    }

    pub fn with_document(document: Document, config: &Config) -> Self {
        Self {
            document,
            settings: config.distribute.clone(),
            is_modified: false,
            history: UndoRedoManager::new(config.history.max_depth),
        }
    }

    /// Replaces the selection on the current page.
    pub fn select<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document
            .set_selected_ids(ids.into_iter().map(Into::into).collect());
    }

    /// Distributes the current selection along `axis`.
    pub fn distribute_selected(&mut self, axis: Axis) -> Result<Command> {
        let ids = self.document.selected_ids().to_vec();
        self.distribute(&ids, axis)
    }

    /// Distributes `ids` along `axis` and records the command unless it
    /// moved nothing.
    pub fn distribute(&mut self, ids: &[String], axis: Axis) -> Result<Command> {
        let cmd = distribute_shapes(&mut self.document, ids, axis, &self.settings)?;
        if !cmd.is_empty() {
            self.history.record(cmd.clone());
            self.is_modified = true;
        }
        Ok(cmd)
    }

    /// Undo last change. Returns `false` when there was nothing to undo.
    ///
    /// The history only advances once the patch applied, so a failed undo
    /// leaves both stacks as they were.
    pub fn undo(&mut self) -> Result<bool> {
        let Some(cmd) = self.history.peek_undo() else {
            return Ok(false);
        };
        tracing::info!(command = %cmd.name, "Undo");
        self.document.apply_patch(&cmd.before)?;
        self.history.undo();
        self.is_modified = true;
        Ok(true)
    }

    /// Redo last undo. Returns `false` when there was nothing to redo.
    pub fn redo(&mut self) -> Result<bool> {
        let Some(cmd) = self.history.peek_redo() else {
            return Ok(false);
        };
        tracing::info!(command = %cmd.name, "Redo");
        self.document.apply_patch(&cmd.after)?;
        self.history.redo();
        self.is_modified = true;
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &UndoRedoManager {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
