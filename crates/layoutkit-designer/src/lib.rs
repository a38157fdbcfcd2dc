//! # LayoutKit Designer
//!
//! Shape model, document store and the layout commands that operate on it.
//!
//! ## Architecture
//!
//! ```text
//! Document (pages, shapes, selection)
//!   └── Model (rectangles, ellipses, lines, groups)
//!
//! Distribute planner (pure: entries -> planned moves)
//!   └── Commands (batch mutation -> before/after patches)
//!
//! History (undo/redo of commands)
//!   └── DesignerState (document + history + settings)
//! ```
//!
//! ## Usage
//!
//! ```
//! use layoutkit_core::{Axis, Point};
//! use layoutkit_designer::{DesignerState, Shape};
//!
//! let mut state = DesignerState::new();
//! for (id, x) in [("a", 0.0), ("b", 5.0), ("c", 50.0)] {
//!     state
//!         .document
//!         .add_shape(Shape::rectangle(id, Point::new(x, 0.0), 10.0, 10.0))
//!         .unwrap();
//! }
//! state.select(["a", "b", "c"]);
//! let cmd = state.distribute_selected(Axis::Horizontal).unwrap();
//! assert_eq!(cmd.after.shapes("page").unwrap()["b"].point, Some(Point::new(25.0, 0.0)));
//! assert!(state.undo().unwrap());
//! ```

pub mod commands;
pub mod designer_state;
pub mod distribute;
pub mod document;
pub mod history;
pub mod model;
pub mod patch;

pub use commands::{distribute_shapes, Command, DISTRIBUTE_COMMAND_ID};
pub use designer_state::DesignerState;
pub use distribute::{entries_for, plan, DistributionEntry, PlannedMove, MIN_DISTRIBUTE_SHAPES};
pub use document::{Document, Page, PageState};
pub use history::UndoRedoManager;
pub use model::{
    DesignEllipse, DesignGroup, DesignLine, DesignRectangle, Shape, ShapeGeometry, ShapeKind,
    ShapeType,
};
pub use patch::{DocumentPatch, PagePatch, PageStatePatch, ShapePatch, ShapePatches};
