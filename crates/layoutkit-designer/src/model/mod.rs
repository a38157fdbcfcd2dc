use serde::{Deserialize, Serialize};
use std::fmt;

use layoutkit_core::{Bounds, Point};

mod ellipse;
mod group;
mod line;
mod rectangle;

pub use ellipse::DesignEllipse;
pub use group::DesignGroup;
pub use line::DesignLine;
pub use rectangle::DesignRectangle;

/// Per-type geometry of a shape.
///
/// Implementations describe the shape in its own frame: `local_bounds` is the
/// unrotated box relative to the shape's `point`. The provided methods place
/// that box in page space.
pub trait ShapeGeometry {
    /// Unrotated bounding box relative to the shape origin.
    fn local_bounds(&self) -> Bounds;

    /// Page-space bounding box for a shape at `origin` rotated by `rotation`
    /// radians around its center.
    fn bounds_at(&self, origin: Point, rotation: f64) -> Bounds {
        let unrotated = self.local_bounds().translate(origin);
        if rotation == 0.0 {
            return unrotated;
        }
        let center = unrotated.center();
        let corners = [
            Point::new(unrotated.min_x, unrotated.min_y),
            Point::new(unrotated.max_x, unrotated.min_y),
            Point::new(unrotated.max_x, unrotated.max_y),
            Point::new(unrotated.min_x, unrotated.max_y),
        ];
        Bounds::from_points(corners.map(|c| c.rotate_around(center, rotation)))
            .unwrap_or(unrotated)
    }

    /// Page-space center for a shape at `origin`. Rotation happens around
    /// this point, so it does not depend on the angle.
    fn center_at(&self, origin: Point) -> Point {
        self.local_bounds().translate(origin).center()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Ellipse,
    Line,
    Group,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeType::Rectangle => write!(f, "Rectangle"),
            ShapeType::Ellipse => write!(f, "Ellipse"),
            ShapeType::Line => write!(f, "Line"),
            ShapeType::Group => write!(f, "Group"),
        }
    }
}

/// Type-specific payload of a shape, tagged by `type` in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle(DesignRectangle),
    Ellipse(DesignEllipse),
    Line(DesignLine),
    Group(DesignGroup),
}

impl ShapeGeometry for ShapeKind {
    fn local_bounds(&self) -> Bounds {
        match self {
            ShapeKind::Rectangle(s) => s.local_bounds(),
            ShapeKind::Ellipse(s) => s.local_bounds(),
            ShapeKind::Line(s) => s.local_bounds(),
            ShapeKind::Group(s) => s.local_bounds(),
        }
    }

    fn bounds_at(&self, origin: Point, rotation: f64) -> Bounds {
        match self {
            ShapeKind::Rectangle(s) => s.bounds_at(origin, rotation),
            ShapeKind::Ellipse(s) => s.bounds_at(origin, rotation),
            ShapeKind::Line(s) => s.bounds_at(origin, rotation),
            ShapeKind::Group(s) => s.bounds_at(origin, rotation),
        }
    }

    fn center_at(&self, origin: Point) -> Point {
        match self {
            ShapeKind::Rectangle(s) => s.center_at(origin),
            ShapeKind::Ellipse(s) => s.center_at(origin),
            ShapeKind::Line(s) => s.center_at(origin),
            ShapeKind::Group(s) => s.center_at(origin),
        }
    }
}

/// A shape record as stored on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Origin of the shape in page coordinates.
    pub point: Point,
    /// Rotation in radians around the shape center.
    #[serde(default)]
    pub rotation: f64,
    #[serde(flatten)]
    pub kind: ShapeKind,
}

impl Shape {
    fn with_kind(id: impl Into<String>, point: Point, kind: ShapeKind) -> Self {
        let mut shape = Self {
            id: id.into(),
            name: String::new(),
            parent_id: None,
            point,
            rotation: 0.0,
            kind,
        };
        shape.name = shape.shape_type().to_string();
        shape
    }

    pub fn rectangle(id: impl Into<String>, point: Point, width: f64, height: f64) -> Self {
        Self::with_kind(
            id,
            point,
            ShapeKind::Rectangle(DesignRectangle::new(width, height)),
        )
    }

    pub fn ellipse(id: impl Into<String>, point: Point, rx: f64, ry: f64) -> Self {
        Self::with_kind(id, point, ShapeKind::Ellipse(DesignEllipse::new(rx, ry)))
    }

    pub fn line(id: impl Into<String>, point: Point, start: Point, end: Point) -> Self {
        Self::with_kind(id, point, ShapeKind::Line(DesignLine::new(start, end)))
    }

    /// Creates a group. Its point and size are placeholders until the
    /// document fits it to its children.
    pub fn group<I, S>(id: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_kind(
            id,
            Point::ORIGIN,
            ShapeKind::Group(DesignGroup::new(children.into_iter().map(Into::into).collect())),
        )
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn shape_type(&self) -> ShapeType {
        match self.kind {
            ShapeKind::Rectangle(_) => ShapeType::Rectangle,
            ShapeKind::Ellipse(_) => ShapeType::Ellipse,
            ShapeKind::Line(_) => ShapeType::Line,
            ShapeKind::Group(_) => ShapeType::Group,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, ShapeKind::Group(_))
    }

    /// Child ids for a group, empty for every other shape.
    pub fn children(&self) -> &[String] {
        match &self.kind {
            ShapeKind::Group(g) => &g.children,
            _ => &[],
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.kind.bounds_at(self.point, self.rotation)
    }

    pub fn center(&self) -> Point {
        self.kind.center_at(self.point)
    }
}
