//! Boolean polygon operations (union and symmetric difference).
//!
//! Operands are closed polylines clipped exactly by `cavalier_contours`.
//! A result with several disjoint regions is resolved by the configured
//! [`MultiRegionPolicy`]. A result with holes is rejected.

use cavalier_contours::polyline::{
    BooleanOp as PlineBooleanOp, PlineSource, PlineSourceMut, PlineVertex, Polyline,
};
use shapekit_core::{GeometryConfig, GeometryError, GeometryResult, MultiRegionPolicy, Point};
use tracing::debug;

use crate::geometry::{is_self_intersecting, signed_area};
use crate::model::{DesignPolygon, DesignerShape};

/// Vertices closer than this are merged before clipping.
const DUPLICATE_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    SymmetricDifference,
}

impl BooleanOp {
    pub fn name(&self) -> &'static str {
        match self {
            BooleanOp::Union => "union",
            BooleanOp::SymmetricDifference => "symmetric difference",
        }
    }

    fn as_pline_op(&self) -> PlineBooleanOp {
        match self {
            BooleanOp::Union => PlineBooleanOp::Or,
            BooleanOp::SymmetricDifference => PlineBooleanOp::Xor,
        }
    }
}

impl std::fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Union of two polygons with the default configuration.
pub fn union(a: &DesignPolygon, b: &DesignPolygon) -> GeometryResult<DesignPolygon> {
    perform_boolean(a, b, BooleanOp::Union, &GeometryConfig::default())
}

/// Symmetric difference of two polygons with the default configuration.
pub fn symmetric_difference(a: &DesignPolygon, b: &DesignPolygon) -> GeometryResult<DesignPolygon> {
    perform_boolean(a, b, BooleanOp::SymmetricDifference, &GeometryConfig::default())
}

/// Runs `op` on two polygons; the result takes the colour of `a`.
pub fn perform_boolean(
    a: &DesignPolygon,
    b: &DesignPolygon,
    op: BooleanOp,
    config: &GeometryConfig,
) -> GeometryResult<DesignPolygon> {
    let outline = boolean_outline(a.vertices(), b.vertices(), op, config)?;
    DesignPolygon::new(outline, a.color)
}

/// Runs `op` on two vertex rings and returns the outline of the single
/// resulting region.
pub fn boolean_outline(
    a: &[Point],
    b: &[Point],
    op: BooleanOp,
    config: &GeometryConfig,
) -> GeometryResult<Vec<Point>> {
    let ring_a = prepare_ring(a, op)?;
    let ring_b = prepare_ring(b, op)?;

    if same_ring(&ring_a, &ring_b) {
        debug!("{} of coincident polygons", op);
        return match op {
            BooleanOp::Union => Ok(ring_a),
            BooleanOp::SymmetricDifference => Err(GeometryError::degenerate(
                op.name(),
                "operands are identical, result is empty",
            )),
        };
    }

    let pline_a = to_polyline(&ring_a);
    let pline_b = to_polyline(&ring_b);
    let result = pline_a.boolean(&pline_b, op.as_pline_op());

    // A region with a hole cannot be represented by one simple outline.
    let holes = result
        .neg_plines
        .iter()
        .filter(|r| r.pline.area().abs() > config.area_epsilon)
        .count();
    if holes > 0 {
        debug!("{} result has {} hole(s)", op, holes);
        return Err(GeometryError::degenerate(
            op.name(),
            format!("result has {} hole(s) and is not a simple polygon", holes),
        ));
    }

    let regions: Vec<(Vec<Point>, f64)> = result
        .pos_plines
        .iter()
        .map(|r| {
            let ring: Vec<Point> = r
                .pline
                .vertex_data
                .iter()
                .map(|v| Point::new(v.x, v.y))
                .collect();
            let area = signed_area(&ring).abs();
            (ring, area)
        })
        .filter(|(ring, area)| ring.len() >= 3 && *area > config.area_epsilon)
        .collect();

    debug!("{} produced {} region(s)", op, regions.len());

    if regions.len() > 1 && config.multi_region_policy == MultiRegionPolicy::Fail {
        return Err(GeometryError::AmbiguousMultiRegion {
            operation: op.name().to_string(),
            regions: regions.len(),
        });
    }

    // Largest area wins; the first region reported wins ties.
    let mut best: Option<(Vec<Point>, f64)> = None;
    for (ring, area) in regions {
        if best.as_ref().map_or(true, |(_, best_area)| area > *best_area) {
            best = Some((ring, area));
        }
    }
    best.map(|(ring, _)| ring)
        .ok_or_else(|| GeometryError::degenerate(op.name(), "result is empty"))
}

/// Removes repeated vertices, enforces counter-clockwise winding and rejects
/// rings that cannot be clipped.
fn prepare_ring(vertices: &[Point], op: BooleanOp) -> GeometryResult<Vec<Point>> {
    let mut ring: Vec<Point> = Vec::with_capacity(vertices.len());
    for p in vertices {
        if ring
            .last()
            .map_or(true, |last| last.distance_to(p) > DUPLICATE_TOLERANCE)
        {
            ring.push(*p);
        }
    }
    // Drop the closing vertex if it repeats the first one.
    while ring.len() > 1
        && ring[0].distance_to(&ring[ring.len() - 1]) <= DUPLICATE_TOLERANCE
    {
        ring.pop();
    }

    if ring.len() < 3 {
        return Err(GeometryError::degenerate(
            op.name(),
            format!("operand has {} distinct vertices", ring.len()),
        ));
    }
    if is_self_intersecting(&ring) {
        return Err(GeometryError::degenerate(op.name(), "operand is self-intersecting"));
    }

    let area = signed_area(&ring);
    if area == 0.0 {
        return Err(GeometryError::degenerate(op.name(), "operand has zero area"));
    }
    if area < 0.0 {
        ring.reverse();
    }
    Ok(ring)
}

/// True when both rings hold the same vertices in the same cyclic order.
fn same_ring(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let n = a.len();
    (0..n).any(|shift| {
        (0..n).all(|i| a[i].distance_to(&b[(i + shift) % n]) <= DUPLICATE_TOLERANCE)
    })
}

fn to_polyline(ring: &[Point]) -> Polyline {
    let mut polyline = Polyline::new();
    for p in ring {
        polyline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
    }
    polyline.set_is_closed(true);
    polyline
}
