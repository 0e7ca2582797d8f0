//! Designer state manager for UI integration.
//!
//! The UI collaborator forwards tool changes, clicks, drags and key actions
//! here; the state owns the canvas and reports every outcome through a
//! human-readable status line.
//!
//! This module is split into submodules:
//! - `shapes`: shape creation, deletion and boolean operations
//! - `transforms`: move drags and rotate/scale gestures

mod shapes;
mod transforms;

use shapekit_core::{Color, Config, GeometryConfig, Point, Result};

use crate::canvas::{Canvas, DrawingMode, TransformAnchor};

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub canvas: Canvas,
    pub config: GeometryConfig,
    pub palette: Vec<Color>,
    current_color: Color,
    pending: Vec<Point>,
    anchor: TransformAnchor,
    /// Cursor offset of each dragged shape's centroid, while a move drag is active.
    drag_offsets: Option<Vec<(u64, Point)>>,
    status: String,
}

impl DesignerState {
    /// Creates a new designer state with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let current_color = config.palette.first().copied().unwrap_or_default();
        Self {
            canvas: Canvas::new(),
            config: config.geometry,
            palette: config.palette,
            current_color,
            pending: Vec::new(),
            anchor: TransformAnchor::new(),
            drag_offsets: None,
            status: "Ready".to_string(),
        }
    }

    /// Switches tool; pending points and any half-picked anchor are dropped.
    pub fn set_tool(&mut self, mode: DrawingMode) {
        self.canvas.set_mode(mode);
        self.pending.clear();
        self.anchor.clear();
        self.drag_offsets = None;
        self.status = format!("Tool: {}", mode);
    }

    pub fn tool(&self) -> DrawingMode {
        self.canvas.mode()
    }

    /// Sets the drawing colour and recolours the current selection.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
        self.canvas.set_selected_color(color);
        self.status = format!("Color: {}", color);
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Points picked for a shape that is not committed yet.
    pub fn pending_points(&self) -> &[Point] {
        &self.pending
    }

    pub fn anchor(&self) -> &TransformAnchor {
        &self.anchor
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles a primary click at `point`; `multi` is the Shift modifier.
    pub fn click(&mut self, point: Point, multi: bool) -> Result<()> {
        let result = match self.tool() {
            DrawingMode::Select => {
                self.select_at(point, multi);
                Ok(())
            }
            DrawingMode::Bezier | DrawingMode::Triangle | DrawingMode::Polygon => {
                self.add_pending_point(point)
            }
            DrawingMode::Move => {
                self.begin_drag(point);
                Ok(())
            }
            DrawingMode::Rotate | DrawingMode::ScaleX | DrawingMode::ScaleXY => {
                self.pick_anchor(point);
                Ok(())
            }
        };
        self.report(result)
    }

    /// Drops pending points and the transform anchor; committed shapes are
    /// untouched.
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.anchor.clear();
        self.status = "Cancelled".to_string();
    }

    fn select_at(&mut self, point: Point, multi: bool) {
        self.canvas.select_at(point, &self.config, multi);
        self.status = format!("Selected: {}", self.canvas.selected_ids().len());
    }

    /// Surfaces a failed action in the status line without touching state.
    fn report<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            tracing::warn!("{}", e);
            self.status = e.to_string();
        }
        result
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
