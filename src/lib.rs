//! # ShapeKit
//!
//! A 2D vector shape editor built around a small computational-geometry
//! engine: polygons, right triangles and cubic Bezier curves, affine
//! transforms, convex hulls and exact boolean operations.
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Shared value types, errors and configuration
//! 2. **shapekit-designer** - Geometry engine, shapes and the editing session
//! 3. **shapekit** - Headless driver that replays gesture scripts
//!
//! The binary stands in for a UI: every line of a script is one user
//! gesture, forwarded to a [`DesignerState`].

pub mod script;

pub use shapekit_core::{Color, Config, Error, GeometryConfig, MultiRegionPolicy, Point, Result};
pub use shapekit_designer::{BooleanOp, DesignerState, DrawingMode, DrawingObject, Shape};

pub use script::{Command, ReplaySummary, Script, ScriptError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout for the shape listing
/// - RUST_LOG environment variable support (INFO by default)
/// - Target, level and line numbers on every event
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
