//! # ShapeKit Designer
//!
//! The geometry engine of the ShapeKit vector editor and the editing session
//! that drives it.
//!
//! ## Core Components
//!
//! ### Geometry
//! - **Primitives**: orientation tests, segment intersection, point-in-polygon
//! - **Transforms**: rotation, scaling and reflection about arbitrary points as
//!   homogeneous 3x3 matrices
//! - **Hull**: Graham-scan convex hull
//! - **Boolean operations**: exact union and symmetric difference of polygons
//!
//! ### Editing
//! - **Shapes**: polygons, right triangles and cubic Bezier curves
//! - **Canvas**: the owned shape collection and the ordered selection
//! - **Designer state**: tool dispatch, gestures and status reporting
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (tools, gestures, status)
//!   └── Canvas
//!         ├── ShapeStore (shapes in draw order)
//!         └── SelectionManager (ordered selection)
//!
//! Shapes (Polygon, Triangle, Bezier)
//!   └── geometry / transform / hull / ops (pure functions)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_designer::{BooleanOp, DesignerState, DrawingMode, Point};
//!
//! let mut state = DesignerState::new();
//! state.set_tool(DrawingMode::Triangle);
//! state.click(Point::new(0.0, 0.0), false).unwrap();
//! state.click(Point::new(10.0, 10.0), false).unwrap();
//! assert_eq!(state.canvas.shape_count(), 1);
//!
//! // A boolean needs exactly two selected shapes.
//! assert!(state.apply_boolean(BooleanOp::Union).is_err());
//! ```

pub mod canvas;
pub mod designer_state;
pub mod geometry;
pub mod hull;
pub mod model;
pub mod ops;
pub mod selection_manager;
pub mod shape_store;
pub mod transform;

pub use canvas::{Canvas, DrawingMode, DrawingObject, TransformAnchor};
pub use designer_state::DesignerState;
pub use geometry::{
    centroid, orientation, point_in_polygon, segment_intersection_point, segments_intersect,
    Orientation,
};
pub use hull::convex_hull;
pub use model::{DesignBezier, DesignPolygon, DesignTriangle, DesignerShape, Shape, ShapeType};
pub use ops::{perform_boolean, symmetric_difference, union, BooleanOp};
pub use selection_manager::SelectionManager;
pub use shape_store::ShapeStore;
pub use transform::{
    angle_from_drag, reflect_point, rotate_point, scale_factor_from_drag, scale_point, Affine2,
    ScaleAxis,
};

pub use shapekit_core::{Color, GeometryConfig, MultiRegionPolicy, Point};
