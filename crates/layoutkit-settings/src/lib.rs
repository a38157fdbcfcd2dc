//! LayoutKit Settings Crate
//!
//! Handles configuration of layout commands and their history.

pub mod config;

pub use config::{Config, DistributeSettings, HistorySettings, MIN_DISTRIBUTE_SHAPES};
