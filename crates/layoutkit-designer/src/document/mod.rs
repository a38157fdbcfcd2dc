//! Document store: pages of shapes plus per-page selection state.
//!
//! The document is the registry the distribution command reads shapes from
//! and writes point updates through. Every write path validates its input
//! before touching a shape, so a failed call leaves the document unchanged.

mod file_io;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use layoutkit_core::{Bounds, DocumentError, Result};

use crate::model::{Shape, ShapeKind};
use crate::patch::{DocumentPatch, ShapePatch, ShapePatches};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub shapes: BTreeMap<String, Shape>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    pub id: String,
    #[serde(default)]
    pub selected_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub current_page_id: String,
    pub pages: BTreeMap<String, Page>,
    #[serde(default)]
    pub page_states: BTreeMap<String, PageState>,
}

impl Document {
    /// Creates a document with a single empty page.
    pub fn new(page_id: impl Into<String>) -> Self {
        let page_id = page_id.into();
        let mut pages = BTreeMap::new();
        pages.insert(
            page_id.clone(),
            Page {
                id: page_id.clone(),
                name: "Page 1".to_string(),
                shapes: BTreeMap::new(),
            },
        );
        let mut page_states = BTreeMap::new();
        page_states.insert(
            page_id.clone(),
            PageState {
                id: page_id.clone(),
                selected_ids: Vec::new(),
            },
        );
        Self {
            id: "doc".to_string(),
            name: "Untitled".to_string(),
            current_page_id: page_id,
            pages,
            page_states,
        }
    }

    pub fn current_page_id(&self) -> &str {
        &self.current_page_id
    }

    pub fn page(&self, page_id: &str) -> Result<&Page> {
        self.pages
            .get(page_id)
            .ok_or_else(|| DocumentError::page_not_found(page_id).into())
    }

    fn page_mut(&mut self, page_id: &str) -> Result<&mut Page> {
        self.pages
            .get_mut(page_id)
            .ok_or_else(|| DocumentError::page_not_found(page_id).into())
    }

    /// Looks up a shape on a page.
    pub fn get_shape(&self, id: &str, page_id: &str) -> Result<&Shape> {
        self.page(page_id)?
            .shapes
            .get(id)
            .ok_or_else(|| DocumentError::shape_not_found(id, page_id).into())
    }

    /// Adds a shape to the current page, replacing any shape with the same id.
    pub fn add_shape(&mut self, shape: Shape) -> Result<()> {
        let page_id = self.current_page_id.clone();
        self.page_mut(&page_id)?
            .shapes
            .insert(shape.id.clone(), shape);
        self.fit_groups(&page_id)
    }

    /// Wraps existing shapes on the current page into a new group.
    pub fn create_group(&mut self, group_id: &str, child_ids: &[&str]) -> Result<()> {
        let page_id = self.current_page_id.clone();
        for id in child_ids {
            self.get_shape(id, &page_id)?;
        }
        let page = self.page_mut(&page_id)?;
        for id in child_ids {
            if let Some(child) = page.shapes.get_mut(*id) {
                child.parent_id = Some(group_id.to_string());
            }
        }
        page.shapes.insert(
            group_id.to_string(),
            Shape::group(group_id, child_ids.iter().copied()),
        );
        self.fit_groups(&page_id)
    }

    /// Selection of the current page.
    pub fn selected_ids(&self) -> &[String] {
        self.page_states
            .get(&self.current_page_id)
            .map(|s| s.selected_ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn set_selected_ids(&mut self, ids: Vec<String>) {
        let page_id = self.current_page_id.clone();
        self.page_states
            .entry(page_id.clone())
            .or_insert_with(|| PageState {
                id: page_id,
                selected_ids: Vec::new(),
            })
            .selected_ids = ids;
    }

    /// Applies `mutator` to each listed shape as one batch.
    ///
    /// Every id is resolved and every patch computed before the first write.
    /// Returns the realized `(before, after)` values of the fields each patch
    /// set, read from the stored shapes around the write. Shapes for which the
    /// mutator returns `None` or an empty patch are left out of both maps, and
    /// a repeated id is only mutated once.
    pub fn mutate_shapes<F>(
        &mut self,
        page_id: &str,
        ids: &[String],
        mut mutator: F,
    ) -> Result<(ShapePatches, ShapePatches)>
    where
        F: FnMut(&Shape) -> Option<ShapePatch>,
    {
        let page = self.page(page_id)?;
        let mut planned: Vec<(&String, ShapePatch)> = Vec::with_capacity(ids.len());
        for id in ids {
            let shape = page
                .shapes
                .get(id)
                .ok_or_else(|| DocumentError::shape_not_found(id, page_id))?;
            if let Some(patch) = mutator(shape).filter(|p| !p.is_empty()) {
                planned.push((id, patch));
            }
        }

        let page = self.page_mut(page_id)?;
        let mut before = ShapePatches::new();
        let mut after = ShapePatches::new();
        for (id, patch) in planned {
            if before.contains_key(id) {
                continue;
            }
            if let Some(shape) = page.shapes.get_mut(id) {
                before.insert(id.clone(), patch.capture(shape));
                patch.apply_to(shape);
                after.insert(id.clone(), patch.capture(shape));
            }
        }

        tracing::debug!(page_id, mutated = after.len(), "Mutated shapes");
        Ok((before, after))
    }

    /// Applies a patch produced by a command (either half).
    ///
    /// Fails without writing anything if the patch names an unknown page or
    /// shape. Groups on the patched pages are refitted to their children
    /// afterwards.
    pub fn apply_patch(&mut self, patch: &DocumentPatch) -> Result<()> {
        for (page_id, page_patch) in &patch.pages {
            let page = self.page(page_id)?;
            if let Some(id) = page_patch
                .shapes
                .keys()
                .find(|id| !page.shapes.contains_key(*id))
            {
                return Err(DocumentError::shape_not_found(id, page_id).into());
            }
        }
        if let Some(page_id) = patch
            .page_states
            .keys()
            .find(|id| !self.pages.contains_key(*id))
        {
            return Err(DocumentError::page_not_found(page_id).into());
        }

        for (page_id, page_patch) in &patch.pages {
            let page = self.page_mut(page_id)?;
            for (id, shape_patch) in &page_patch.shapes {
                if let Some(shape) = page.shapes.get_mut(id) {
                    shape_patch.apply_to(shape);
                }
            }
        }
        for (page_id, state_patch) in &patch.page_states {
            if let Some(ids) = &state_patch.selected_ids {
                self.page_states
                    .entry(page_id.clone())
                    .or_insert_with(|| PageState {
                        id: page_id.clone(),
                        selected_ids: Vec::new(),
                    })
                    .selected_ids = ids.clone();
            }
        }
        for page_id in patch.pages.keys() {
            self.fit_groups(page_id)?;
        }

        tracing::debug!(shapes = patch.shape_count(), "Applied document patch");
        Ok(())
    }

    /// Recomputes the point and size of every group on a page from the
    /// bounds of its children. Groups without resolvable children keep their
    /// stored geometry.
    pub fn fit_groups(&mut self, page_id: &str) -> Result<()> {
        let page = self.page_mut(page_id)?;
        let group_ids: Vec<String> = page
            .shapes
            .values()
            .filter(|s| s.is_group())
            .map(|s| s.id.clone())
            .collect();

        // Inner groups have to settle before the groups containing them.
        for _ in 0..group_ids.len() {
            let mut changed = false;
            for group_id in &group_ids {
                let Some(group) = page.shapes.get(group_id) else {
                    continue;
                };
                let child_bounds: Vec<Bounds> = group
                    .children()
                    .iter()
                    .filter_map(|id| page.shapes.get(id))
                    .map(Shape::bounds)
                    .collect();
                let Some(fitted) = Bounds::common(&child_bounds) else {
                    continue;
                };
                if let Some(group) = page.shapes.get_mut(group_id) {
                    if let ShapeKind::Group(g) = &mut group.kind {
                        let point = fitted.min();
                        if group.point != point
                            || g.width != fitted.width
                            || g.height != fitted.height
                        {
                            group.point = point;
                            g.width = fitted.width;
                            g.height = fitted.height;
                            changed = true;
                        }
                    }
                }
            }
            if !changed {
                break;
            }
        }
        Ok(())
    }

    /// Refits groups on every page, used after loading.
    pub fn fit_all_groups(&mut self) -> Result<()> {
        let page_ids: Vec<String> = self.pages.keys().cloned().collect();
        for page_id in page_ids {
            self.fit_groups(&page_id)?;
        }
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("page")
    }
}
