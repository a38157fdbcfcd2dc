use serde::{Deserialize, Serialize};

use layoutkit_core::{Bounds, Point};

use super::ShapeGeometry;

/// A straight segment whose handles are stored relative to the shape point.
///
/// Handles may sit on either side of the origin, so the bounds of a line do
/// not have to start at its point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignLine {
    pub start: Point,
    pub end: Point,
}

impl DesignLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl ShapeGeometry for DesignLine {
    fn local_bounds(&self) -> Bounds {
        Bounds::from_points([self.start, self.end])
            .unwrap_or_else(|| Bounds::new(0.0, 0.0, 0.0, 0.0))
    }

    // Handles already carry the direction; rotation is not applied on top.
    fn bounds_at(&self, origin: Point, _rotation: f64) -> Bounds {
        self.local_bounds().translate(origin)
    }
}
