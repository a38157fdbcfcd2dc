//! Builds the undoable command for distributing shapes.

use std::collections::{HashMap, HashSet};

use layoutkit_core::{Axis, Point, Result};
use layoutkit_settings::DistributeSettings;

use crate::distribute::{entries_for, plan, MIN_DISTRIBUTE_SHAPES};
use crate::document::Document;
use crate::model::Shape;
use crate::patch::{DocumentPatch, PagePatch, ShapePatch, ShapePatches};

use super::{Command, DISTRIBUTE_COMMAND_ID};

/// Children of one input group, captured before anything moves.
struct GroupSnapshot {
    id: String,
    children: Vec<(String, Point)>,
}

/// Distributes the shapes `ids` on the current page along `axis`.
///
/// All ids (and the children of any group among them) are resolved before
/// the document is touched; an unknown id fails with `ShapeNotFound` and
/// leaves the document unchanged. The planned points are then written as a
/// single batch, and the realized before/after values become the command.
///
/// Groups never appear in the returned patches. A moved group contributes
/// one entry per contained shape, shifted by the group's own delta. Nested
/// groups are walked down to the shapes they hold.
///
/// The document is left in the `after` state. Selections smaller than the
/// configured minimum produce a command with no shape entries.
pub fn distribute_shapes(
    doc: &mut Document,
    ids: &[String],
    axis: Axis,
    settings: &DistributeSettings,
) -> Result<Command> {
    let page_id = doc.current_page_id().to_string();

    let mut seen = HashSet::new();
    let unique: Vec<&String> = ids.iter().filter(|id| seen.insert(id.as_str())).collect();
    let shapes: Vec<&Shape> = unique
        .iter()
        .map(|id| doc.get_shape(id, &page_id))
        .collect::<Result<_>>()?;

    let mut groups = Vec::new();
    let mut empty_groups = HashSet::new();
    for shape in shapes.iter().filter(|s| s.is_group()) {
        if shape.children().is_empty() {
            empty_groups.insert(shape.id.clone());
            continue;
        }
        groups.push(GroupSnapshot {
            id: shape.id.clone(),
            children: descendant_points(doc, &page_id, shape)?,
        });
    }

    let entries = entries_for(shapes.iter().copied());
    let min_shapes = settings.min_shapes.max(MIN_DISTRIBUTE_SHAPES);
    let mut moves = if entries.len() < min_shapes {
        tracing::warn!(
            count = entries.len(),
            min_shapes,
            "Not enough shapes selected to distribute"
        );
        Vec::new()
    } else {
        plan(&entries, axis)
    };
    // A group without children has no position of its own to carry.
    moves.retain(|m| !empty_groups.contains(&m.id));
    if settings.skip_unchanged {
        moves.retain(|m| !m.is_identity());
    }

    let targets: HashMap<&str, Point> = moves.iter().map(|m| (m.id.as_str(), m.next)).collect();
    let move_ids: Vec<String> = moves.iter().map(|m| m.id.clone()).collect();
    let (mut before, mut after) = doc.mutate_shapes(&page_id, &move_ids, |shape| {
        targets
            .get(shape.id.as_str())
            .map(|next| ShapePatch::point(*next))
    })?;

    let mut child_moves = ShapePatches::new();
    for group in groups {
        let (Some(prev), Some(next)) = (before.remove(&group.id), after.remove(&group.id)) else {
            continue;
        };
        let (Some(prev), Some(next)) = (prev.point, next.point) else {
            continue;
        };
        let delta = next - prev;
        for (child_id, point) in group.children {
            before.insert(child_id.clone(), ShapePatch::point(point));
            after.insert(child_id.clone(), ShapePatch::point(point + delta));
            child_moves.insert(child_id, ShapePatch::point(point + delta));
        }
    }

    if !child_moves.is_empty() {
        let mut patch = DocumentPatch::default();
        patch
            .pages
            .insert(page_id.clone(), PagePatch { shapes: child_moves });
        doc.apply_patch(&patch)?;
    } else {
        // Moved shapes may belong to groups outside the selection.
        doc.fit_groups(&page_id)?;
    }

    tracing::info!(%axis, selected = ids.len(), moved = after.len(), "Distributed shapes");

    let selected = ids.to_vec();
    Ok(Command::new(
        DISTRIBUTE_COMMAND_ID,
        format!("Distribute {}", axis_label(axis)),
        DocumentPatch::for_page(&page_id, before, selected.clone()),
        DocumentPatch::for_page(&page_id, after, selected),
    ))
}

/// Points of the non-group shapes under `group`. A child that is itself a
/// group contributes its own descendants, since group geometry is refitted
/// from the shapes it contains.
fn descendant_points(
    doc: &Document,
    page_id: &str,
    group: &Shape,
) -> Result<Vec<(String, Point)>> {
    let mut points = Vec::new();
    let mut visited = HashSet::from([group.id.as_str()]);
    let mut pending: Vec<&String> = group.children().iter().rev().collect();
    while let Some(child_id) = pending.pop() {
        if !visited.insert(child_id.as_str()) {
            continue;
        }
        let child = doc.get_shape(child_id, page_id)?;
        if child.is_group() {
            tracing::trace!(group = %group.id, child = %child.id, "Expanding nested group");
            pending.extend(child.children().iter().rev());
        } else {
            points.push((child.id.clone(), child.point));
        }
    }
    Ok(points)
}

fn axis_label(axis: Axis) -> &'static str {
    match axis {
        Axis::Horizontal => "Horizontally",
        Axis::Vertical => "Vertically",
    }
}
