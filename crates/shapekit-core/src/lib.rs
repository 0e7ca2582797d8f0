//! # ShapeKit Core
//!
//! Core types, errors, and configuration shared by the ShapeKit crates.
//! Provides the value types every geometric operation works on, the error
//! taxonomy surfaced to the editor, and the tunable tolerances.

pub mod config;
pub mod data;
pub mod error;

pub use config::{
    Config, GeometryConfig, MultiRegionPolicy, DEFAULT_AREA_EPSILON, DEFAULT_BEZIER_PICK_RADIUS,
    DEFAULT_BEZIER_SAMPLES, DEFAULT_COLLINEAR_EPSILON, DEFAULT_CONTAINMENT_EPSILON,
    DEFAULT_DRAG_SENSITIVITY, DEFAULT_MIN_SCALE_FACTOR,
};
pub use data::{Color, Point};
pub use error::{
    Arity, ConfigError, ConfigResult, EditorError, EditorResult, Error, GeometryError,
    GeometryResult, Result,
};
