use serde::{Deserialize, Serialize};

use layoutkit_core::{Bounds, Point};

use super::ShapeGeometry;

/// Ellipse inscribed in the box `point .. point + 2 * radius`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignEllipse {
    pub rx: f64,
    pub ry: f64,
}

impl DesignEllipse {
    pub fn new(rx: f64, ry: f64) -> Self {
        Self { rx, ry }
    }
}

impl ShapeGeometry for DesignEllipse {
    fn local_bounds(&self) -> Bounds {
        Bounds::from_origin_size(Point::ORIGIN, Point::new(self.rx * 2.0, self.ry * 2.0))
    }

    // Tight box of the rotated curve, narrower than the rotated corners.
    fn bounds_at(&self, origin: Point, rotation: f64) -> Bounds {
        let center = self.center_at(origin);
        let (sin, cos) = rotation.sin_cos();
        let half_w = ((self.rx * cos).powi(2) + (self.ry * sin).powi(2)).sqrt();
        let half_h = ((self.rx * sin).powi(2) + (self.ry * cos).powi(2)).sqrt();
        Bounds::new(
            center.x - half_w,
            center.y - half_h,
            center.x + half_w,
            center.y + half_h,
        )
    }
}
