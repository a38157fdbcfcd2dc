//! Undoable commands expressed as before/after document patches.

mod distribute;

pub use distribute::distribute_shapes;

use serde::{Deserialize, Serialize};

use crate::patch::DocumentPatch;

/// Identifier carried by commands produced by [`distribute_shapes`].
pub const DISTRIBUTE_COMMAND_ID: &str = "distribute";

/// A reversible edit. Applying `after` performs it, `before` reverts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub id: String,
    /// Human-readable label for history menus.
    pub name: String,
    pub before: DocumentPatch,
    pub after: DocumentPatch,
}

impl Command {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        before: DocumentPatch,
        after: DocumentPatch,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            before,
            after,
        }
    }

    /// True when the command touches no shapes.
    pub fn is_empty(&self) -> bool {
        self.after.shape_count() == 0
    }

    /// Ids of the shapes the command writes, in id order.
    pub fn moved_ids(&self) -> Vec<&str> {
        self.after
            .pages
            .values()
            .flat_map(|p| p.shapes.keys().map(String::as_str))
            .collect()
    }
}
