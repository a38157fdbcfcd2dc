//! # LayoutKit Core
//!
//! Core types and utilities for LayoutKit.
//! Provides the geometry primitives (points, bounds, axes) and the error
//! types used by the designer and settings crates.

pub mod axis;
pub mod error;
pub mod geometry;

pub use axis::Axis;
pub use error::{DocumentError, Error, Result};
pub use geometry::{Bounds, Point};
