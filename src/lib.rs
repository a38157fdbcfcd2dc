//! # LayoutKit
//!
//! Shape layout tools for vector editors. Distributes selected shapes evenly
//! along an axis and packages the move as an undoable before/after patch.
//!
//! ## Architecture
//!
//! LayoutKit is organized as a workspace with multiple crates:
//!
//! 1. **layoutkit-core** - Geometry primitives, axes, errors
//! 2. **layoutkit-designer** - Shape model, document store, distribute planner, commands, history
//! 3. **layoutkit-settings** - Configuration files and validation
//! 4. **layoutkit** - CLI binary that integrates all crates

pub use layoutkit_designer as designer;

pub use layoutkit_core::{Axis, Bounds, DocumentError, Error, Point, Result};

pub use layoutkit_designer::{
    distribute_shapes, Command, DesignerState, Document, DocumentPatch, Shape, ShapePatch,
    ShapeType, UndoRedoManager,
};

pub use layoutkit_settings::{Config, DistributeSettings, HistorySettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::Pretty)
}

/// Initialize logging in the given format.
///
/// Logs go to stderr so that command output on stdout stays machine-readable.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
