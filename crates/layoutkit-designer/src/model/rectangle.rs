use serde::{Deserialize, Serialize};

use layoutkit_core::{Bounds, Point};

use super::ShapeGeometry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRectangle {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub corner_radius: f64,
}

impl DesignRectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            corner_radius: 0.0,
        }
    }
}

impl ShapeGeometry for DesignRectangle {
    fn local_bounds(&self) -> Bounds {
        Bounds::from_origin_size(Point::ORIGIN, Point::new(self.width, self.height))
    }
}
