use serde::{Deserialize, Serialize};

use layoutkit_core::{Bounds, Point};

use super::ShapeGeometry;

/// A container whose visual position is the union of its children.
///
/// `width` and `height` cache the children's common bounds; the owning
/// document refreshes them together with the group point whenever children
/// move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignGroup {
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    pub children: Vec<String>,
}

impl DesignGroup {
    pub fn new(children: Vec<String>) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            children,
        }
    }
}

impl ShapeGeometry for DesignGroup {
    fn local_bounds(&self) -> Bounds {
        Bounds::from_origin_size(Point::ORIGIN, Point::new(self.width, self.height))
    }
}
