//! Geometry primitives shared by the designer and its collaborators
//!
//! This module provides:
//! - `Point`, a 2D coordinate with vector arithmetic
//! - `Bounds`, an axis-aligned bounding box with common-bounds merging

mod bounds;
mod point;

pub use bounds::Bounds;
pub use point::Point;
