//! Partial document updates used as the before/after halves of a command.
//!
//! A [`DocumentPatch`] only names the fields it changes. Applying the
//! `after` patch of a command performs the edit, applying `before` reverts
//! it; both carry exactly the same shape ids.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use layoutkit_core::Point;

use crate::model::Shape;

/// Fields of a shape touched by a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<Point>,
}

impl ShapePatch {
    pub fn point(point: Point) -> Self {
        Self { point: Some(point) }
    }

    pub fn is_empty(&self) -> bool {
        self.point.is_none()
    }

    /// Values currently held by `shape` for the fields this patch sets.
    pub fn capture(&self, shape: &Shape) -> ShapePatch {
        ShapePatch {
            point: self.point.map(|_| shape.point),
        }
    }

    pub fn apply_to(&self, shape: &mut Shape) {
        if let Some(point) = self.point {
            shape.point = point;
        }
    }
}

/// Shape patches keyed by shape id.
pub type ShapePatches = BTreeMap<String, ShapePatch>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagePatch {
    #[serde(default)]
    pub shapes: ShapePatches,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageStatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_ids: Option<Vec<String>>,
}

/// Page-scoped patch over a whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPatch {
    #[serde(default)]
    pub pages: BTreeMap<String, PagePatch>,
    #[serde(default)]
    pub page_states: BTreeMap<String, PageStatePatch>,
}

impl DocumentPatch {
    /// Wraps shape patches for one page together with its selection.
    pub fn for_page(page_id: &str, shapes: ShapePatches, selected_ids: Vec<String>) -> Self {
        let mut patch = DocumentPatch::default();
        patch
            .pages
            .insert(page_id.to_string(), PagePatch { shapes });
        patch.page_states.insert(
            page_id.to_string(),
            PageStatePatch {
                selected_ids: Some(selected_ids),
            },
        );
        patch
    }

    pub fn shapes(&self, page_id: &str) -> Option<&ShapePatches> {
        self.pages.get(page_id).map(|p| &p.shapes)
    }

    pub fn selected_ids(&self, page_id: &str) -> Option<&[String]> {
        self.page_states
            .get(page_id)
            .and_then(|s| s.selected_ids.as_deref())
    }

    /// Total number of shape entries across all pages.
    pub fn shape_count(&self) -> usize {
        self.pages.values().map(|p| p.shapes.len()).sum()
    }
}
