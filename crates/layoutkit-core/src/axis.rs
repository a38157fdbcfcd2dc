//! Distribution axis selection
//!
//! Handles picking and replacing the coordinate that lies along an axis,
//! so that horizontal and vertical layout share one code path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::geometry::{Bounds, Point};

/// Axis along which shapes are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Left to right (X)
    Horizontal,
    /// Top to bottom (Y)
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Component of `point` along this axis.
    pub fn pick(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Copy of `point` with the component along this axis replaced.
    pub fn with(self, point: Point, value: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(value, point.y),
            Self::Vertical => Point::new(point.x, value),
        }
    }

    /// Lower edge of `bounds` on this axis.
    pub fn min(self, bounds: &Bounds) -> f64 {
        match self {
            Self::Horizontal => bounds.min_x,
            Self::Vertical => bounds.min_y,
        }
    }

    /// Upper edge of `bounds` on this axis.
    pub fn max(self, bounds: &Bounds) -> f64 {
        match self {
            Self::Horizontal => bounds.max_x,
            Self::Vertical => bounds.max_y,
        }
    }

    /// Width or height of `bounds`, whichever lies on this axis.
    pub fn extent(self, bounds: &Bounds) -> f64 {
        match self {
            Self::Horizontal => bounds.width,
            Self::Vertical => bounds.height,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "horizontal" | "h" | "x" => Ok(Self::Horizontal),
            "vertical" | "v" | "y" => Ok(Self::Vertical),
            _ => Err(format!("Unknown axis: {}", s)),
        }
    }
}
