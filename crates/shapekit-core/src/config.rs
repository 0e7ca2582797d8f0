//! Configuration for ShapeKit
//!
//! Every tolerance the geometry engine relies on lives here as a named
//! default constant and as a field of [`GeometryConfig`], so callers and test
//! suites can tune them without touching the algorithms.
//!
//! Configuration files are JSON. They hold editor settings only; drawings are
//! never persisted.

use crate::data::Color;
use crate::error::{ConfigError, ConfigResult, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tolerance of the triangle area-sum containment test.
pub const DEFAULT_CONTAINMENT_EPSILON: f64 = 0.1;

/// Determinants below this magnitude are treated as parallel lines.
pub const DEFAULT_COLLINEAR_EPSILON: f64 = 1e-12;

/// Boolean-result regions smaller than this area are dropped as slivers.
pub const DEFAULT_AREA_EPSILON: f64 = 1e-9;

/// A click this close to a Bezier control point selects the curve.
pub const DEFAULT_BEZIER_PICK_RADIUS: f64 = 10.0;

/// Pixels of drag distance per unit of scale factor.
pub const DEFAULT_DRAG_SENSITIVITY: f64 = 50.0;

/// Smallest scale factor a drag gesture can produce.
pub const DEFAULT_MIN_SCALE_FACTOR: f64 = 0.1;

/// Number of samples used to render a Bezier curve.
pub const DEFAULT_BEZIER_SAMPLES: usize = 100;

/// What an exact boolean operation does when its result has several
/// disjoint regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiRegionPolicy {
    /// Keep the region with the largest area (first one on ties).
    #[default]
    LargestArea,
    /// Report `AmbiguousMultiRegion` and leave the choice to the caller.
    Fail,
}

impl std::fmt::Display for MultiRegionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LargestArea => write!(f, "largest_area"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Tunable tolerances and interaction constants of the geometry engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Triangle hit-test tolerance (area units)
    pub containment_epsilon: f64,
    /// Near-zero determinant threshold for line intersection
    pub collinear_epsilon: f64,
    /// Minimum area of a boolean-result region
    pub area_epsilon: f64,
    /// Bezier hit-test radius around control points
    pub bezier_pick_radius: f64,
    /// Drag distance mapped to a scale factor of 1.0
    pub drag_sensitivity: f64,
    /// Floor applied to drag-derived scale factors
    pub min_scale_factor: f64,
    /// Samples taken along a Bezier curve when rendering
    pub bezier_samples: usize,
    /// Handling of multi-region boolean results
    pub multi_region_policy: MultiRegionPolicy,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            containment_epsilon: DEFAULT_CONTAINMENT_EPSILON,
            collinear_epsilon: DEFAULT_COLLINEAR_EPSILON,
            area_epsilon: DEFAULT_AREA_EPSILON,
            bezier_pick_radius: DEFAULT_BEZIER_PICK_RADIUS,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            min_scale_factor: DEFAULT_MIN_SCALE_FACTOR,
            bezier_samples: DEFAULT_BEZIER_SAMPLES,
            multi_region_policy: MultiRegionPolicy::default(),
        }
    }
}

impl GeometryConfig {
    /// Returns a copy using the given multi-region policy.
    pub fn with_policy(mut self, policy: MultiRegionPolicy) -> Self {
        self.multi_region_policy = policy;
        self
    }

    /// Validate all tolerances
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("geometry.containment_epsilon", self.containment_epsilon),
            ("geometry.collinear_epsilon", self.collinear_epsilon),
            ("geometry.area_epsilon", self.area_epsilon),
            ("geometry.bezier_pick_radius", self.bezier_pick_radius),
            ("geometry.drag_sensitivity", self.drag_sensitivity),
            ("geometry.min_scale_factor", self.min_scale_factor),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }
        if self.bezier_samples < 2 {
            return Err(ConfigError::ValueOutOfRange {
                key: "geometry.bezier_samples".to_string(),
                value: self.bezier_samples.to_string(),
            });
        }
        Ok(())
    }
}

fn default_palette() -> Vec<Color> {
    vec![
        Color::BLACK,
        Color::RED,
        Color::GREEN,
        Color::BLUE,
        Color::YELLOW,
        Color::PURPLE,
    ]
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Geometry tolerances
    #[serde(default)]
    pub geometry: GeometryConfig,
    /// Colours offered by the palette
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geometry: GeometryConfig::default(),
            palette: default_palette(),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::check_extension(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Corrupted(format!("Invalid JSON config: {}", e)))?;

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        Self::check_extension(path)?;

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        if self.palette.is_empty() {
            return Err(ConfigError::ValueOutOfRange {
                key: "palette".to_string(),
                value: "[]".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn check_extension(path: &Path) -> Result<()> {
        if path.extension().is_some_and(|ext| ext == "json") {
            Ok(())
        } else {
            Err(ConfigError::UnsupportedFormat(path.display().to_string()).into())
        }
    }
}
