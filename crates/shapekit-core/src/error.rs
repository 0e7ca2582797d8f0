//! Error handling for ShapeKit
//!
//! Provides error types for every layer of the editor:
//! - Geometry errors (shape construction, hull and boolean operations)
//! - Editor errors (selection preconditions of editing actions)
//! - Configuration errors (invalid tolerances, unsupported files)
//!
//! All error types use `thiserror`. None of them is fatal: a failed operation
//! leaves existing shapes untouched and is reported back as a value.

use std::fmt;
use thiserror::Error;

/// Number of points a shape constructor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many points.
    Exactly(usize),
    /// This many points or more.
    AtLeast(usize),
    /// Either of two point counts.
    Either(usize, usize),
}

impl Arity {
    /// Returns true when `count` satisfies this arity.
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Either(a, b) => count == a || count == b,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
            Arity::Either(a, b) => write!(f, "{} or {}", a, b),
        }
    }
}

/// Geometry error type
///
/// Raised by shape constructors, the convex hull builder and the boolean
/// polygon operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A shape was constructed from the wrong number of points
    #[error("{shape} requires {expected} points, got {actual}")]
    InvalidArity {
        /// The shape kind being constructed.
        shape: &'static str,
        /// The accepted point count.
        expected: Arity,
        /// The number of points supplied.
        actual: usize,
    },

    /// An operation collapsed to an empty or sub-3-point result
    #[error("{operation} produced a degenerate result: {reason}")]
    DegenerateResult {
        /// The operation that failed.
        operation: String,
        /// Why the result is unusable.
        reason: String,
    },

    /// An exact boolean operation produced several disjoint regions
    #[error("{operation} produced {regions} disjoint regions")]
    AmbiguousMultiRegion {
        /// The operation that produced the regions.
        operation: String,
        /// Number of regions in the result.
        regions: usize,
    },
}

impl GeometryError {
    /// Shorthand for a [`GeometryError::DegenerateResult`].
    pub fn degenerate(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        GeometryError::DegenerateResult {
            operation: operation.into(),
            reason: reason.into(),
        }
    }
}

/// Editor error type
///
/// Caller-level precondition violations of editing actions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// The action needs a different number of selected shapes
    #[error("Select exactly {expected} shapes (currently {actual})")]
    SelectionPrecondition {
        /// The required selection size.
        expected: usize,
        /// The current selection size.
        actual: usize,
    },

    /// A polygon-only action received a non-polygonal shape
    #[error("{shape} is not a polygon-shaped entity")]
    NotPolygonal {
        /// The kind of the rejected shape.
        shape: String,
    },

    /// A shape id does not exist in the shape store
    #[error("Unknown shape id {id}")]
    UnknownShape {
        /// The missing id.
        id: u64,
    },
}

/// Configuration error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A configuration value is out of its valid range.
    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },

    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The configuration file is corrupted or malformed.
    #[error("Corrupted configuration: {0}")]
    Corrupted(String),
}

/// Main error type for ShapeKit
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Editor error
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error reports a degenerate geometric result
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Error::Geometry(GeometryError::DegenerateResult { .. }))
    }
}

/// Result type alias for ShapeKit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for geometry operations.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;

/// Result type alias for editor actions.
pub type EditorResult<T> = std::result::Result<T, EditorError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
