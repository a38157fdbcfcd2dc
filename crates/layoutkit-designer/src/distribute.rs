//! Even distribution of shapes along an axis.
//!
//! The planner is pure: it reads shape geometry and returns the point each
//! shape should move to. Two strategies are used:
//!
//! - **Slack**: the shapes' combined extent fits inside their common bounds.
//!   Shapes are packed edge to edge in center order with equal gaps, starting
//!   at the common minimum.
//! - **Overlap**: the combined extent exceeds the common bounds. The shape
//!   reaching furthest toward each end stays put, and the others get evenly
//!   spaced centers between the two anchors' centers.
//!
//! Ties (equal bounds for an anchor, equal centers for ordering) are broken
//! by input order. Non-finite geometry is not rejected and propagates into
//! the planned points.

use std::cmp::Ordering;

use layoutkit_core::{Axis, Bounds, Point};

use crate::model::Shape;

pub use layoutkit_settings::MIN_DISTRIBUTE_SHAPES;

/// Geometry snapshot of one shape for a single planning pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionEntry {
    pub id: String,
    /// Position in the caller's id list, used for tie-breaks.
    pub index: usize,
    pub point: Point,
    pub bounds: Bounds,
    pub center: Point,
}

impl DistributionEntry {
    pub fn from_shape(index: usize, shape: &Shape) -> Self {
        Self {
            id: shape.id.clone(),
            index,
            point: shape.point,
            bounds: shape.bounds(),
            center: shape.center(),
        }
    }
}

/// Planned relocation of one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedMove {
    pub id: String,
    pub prev: Point,
    pub next: Point,
}

impl PlannedMove {
    pub fn is_identity(&self) -> bool {
        self.prev == self.next
    }

    pub fn delta(&self) -> Point {
        self.next - self.prev
    }
}

/// Builds planner entries for shapes in caller order.
pub fn entries_for<'a, I>(shapes: I) -> Vec<DistributionEntry>
where
    I: IntoIterator<Item = &'a Shape>,
{
    shapes
        .into_iter()
        .enumerate()
        .map(|(index, shape)| DistributionEntry::from_shape(index, shape))
        .collect()
}

/// Computes target points that distribute `entries` evenly along `axis`.
///
/// Entries placed by the strategy are always returned, including those that
/// end up where they started. Overlap-case anchors are never returned.
pub fn plan(entries: &[DistributionEntry], axis: Axis) -> Vec<PlannedMove> {
    let len = entries.len();
    if len < MIN_DISTRIBUTE_SHAPES {
        tracing::debug!(count = len, "Too few shapes to distribute");
        return Vec::new();
    }

    let Some(common) = Bounds::common(entries.iter().map(|e| &e.bounds)) else {
        return Vec::new();
    };
    let span: f64 = entries.iter().map(|e| axis.extent(&e.bounds)).sum();
    let available = axis.extent(&common);

    let moves = if span > available {
        tracing::debug!(%axis, span, available, "Distributing centers between anchors");
        plan_overlap(entries, axis)
    } else {
        tracing::debug!(%axis, span, available, "Packing shapes with equal gaps");
        plan_slack(entries, axis, &common, span)
    };

    for m in &moves {
        tracing::trace!(id = %m.id, prev = %m.prev, next = %m.next, "Planned move");
    }
    moves
}

fn plan_overlap(entries: &[DistributionEntry], axis: Axis) -> Vec<PlannedMove> {
    let len = entries.len();
    let (Some(low), Some(high)) = (low_anchor(entries, axis), high_anchor(entries, axis)) else {
        return Vec::new();
    };

    let mut to_move: Vec<&DistributionEntry> = entries
        .iter()
        .filter(|e| e.index != low.index && e.index != high.index)
        .collect();
    to_move.sort_by(|a, b| by_center(a, b, axis));

    let low_center = axis.pick(low.center);
    let step = (axis.pick(high.center) - low_center) / (len - 1) as f64;

    to_move
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let center = low_center + step * (i + 1) as f64;
            let target_min = center - axis.extent(&entry.bounds) / 2.0;
            relocate(entry, axis, target_min)
        })
        .collect()
}

fn plan_slack(
    entries: &[DistributionEntry],
    axis: Axis,
    common: &Bounds,
    span: f64,
) -> Vec<PlannedMove> {
    let len = entries.len();
    let mut ordered: Vec<&DistributionEntry> = entries.iter().collect();
    ordered.sort_by(|a, b| by_center(a, b, axis));

    let gap = (axis.extent(common) - span) / (len - 1) as f64;
    let mut cursor = axis.min(common);

    ordered
        .into_iter()
        .map(|entry| {
            let planned = relocate(entry, axis, cursor);
            cursor += axis.extent(&entry.bounds) + gap;
            planned
        })
        .collect()
}

/// Entry whose bounds start lowest on the axis; earliest input wins ties.
fn low_anchor(entries: &[DistributionEntry], axis: Axis) -> Option<&DistributionEntry> {
    entries.iter().min_by(|a, b| {
        axis.min(&a.bounds)
            .total_cmp(&axis.min(&b.bounds))
            .then(a.index.cmp(&b.index))
    })
}

/// Entry whose bounds end highest on the axis; earliest input wins ties.
fn high_anchor(entries: &[DistributionEntry], axis: Axis) -> Option<&DistributionEntry> {
    entries.iter().min_by(|a, b| {
        axis.max(&b.bounds)
            .total_cmp(&axis.max(&a.bounds))
            .then(a.index.cmp(&b.index))
    })
}

fn by_center(a: &DistributionEntry, b: &DistributionEntry, axis: Axis) -> Ordering {
    axis.pick(a.center)
        .total_cmp(&axis.pick(b.center))
        .then(a.index.cmp(&b.index))
}

/// Moves `entry` so its bounds start at `target_min` on the axis, keeping
/// the cross-axis coordinate. The offset is applied to the shape point, which
/// need not coincide with its bounds minimum.
fn relocate(entry: &DistributionEntry, axis: Axis, target_min: f64) -> PlannedMove {
    let offset = target_min - axis.min(&entry.bounds);
    let next = axis.with(entry.point, axis.pick(entry.point) + offset);
    PlannedMove {
        id: entry.id.clone(),
        prev: entry.point,
        next,
    }
}
