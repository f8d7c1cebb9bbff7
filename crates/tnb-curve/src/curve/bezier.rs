//! Piecewise cubic Bezier chains.

use tnb_core::{CurveError, Evaluator, PolygonViolation, Result};
use tnb_math::basis::{geometry_matrix, power_basis, BEZIER, BEZIER_DERIVATIVE};
use tnb_math::{DMat4, Point3, Vector3};
use tracing::{debug, instrument, warn};

use super::{Curve, FramePropagator, ParametricCurve};

/// One cubic Bezier segment, parameterized over `[0, 1]`.
///
/// `G · BEZIER` and `G · BEZIER_DERIVATIVE` are computed once so each
/// sample costs a single matrix-vector product per quantity.
#[derive(Debug, Clone)]
pub struct BezierSegment {
    pub control_points: [Point3; 4],
    g_basis: DMat4,
    g_dbasis: DMat4,
}

impl BezierSegment {
    pub fn new(control_points: [Point3; 4]) -> Self {
        let g = geometry_matrix(control_points);
        Self {
            control_points,
            g_basis: g * BEZIER,
            g_dbasis: g * BEZIER_DERIVATIVE,
        }
    }
}

impl ParametricCurve for BezierSegment {
    fn point_at(&self, t: f64) -> Point3 {
        (self.g_basis * power_basis(t)).truncate()
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        (self.g_dbasis * power_basis(t)).truncate()
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// Whether `count` points form a chain of one or more cubic segments.
pub fn is_bezier_chain_len(count: usize) -> bool {
    count >= 4 && count % 3 == 1
}

/// Split a `3n+1` control polygon into its `n` segments; consecutive
/// segments share an endpoint.
pub fn bezier_segments(points: &[Point3]) -> Result<Vec<BezierSegment>> {
    if !is_bezier_chain_len(points.len()) {
        return Err(reject(Evaluator::Bezier, points.len(), PolygonViolation::TooFewOrMisalignedPoints));
    }
    Ok(points
        .windows(4)
        .step_by(3)
        .map(|w| BezierSegment::new([w[0], w[1], w[2], w[3]]))
        .collect())
}

/// Evaluate a chain of cubic Bezier segments with propagated frames.
///
/// Every segment contributes `steps + 1` samples, so the shared endpoint
/// of two segments appears twice. Tangent (G1) continuity across segment
/// joints is assumed and not checked.
#[instrument(skip(points), fields(count = points.len()))]
pub fn eval_bezier(points: &[Point3], steps: u32) -> Result<Curve> {
    let segments = bezier_segments(points)?;
    check_steps(Evaluator::Bezier, steps)?;
    check_finite(Evaluator::Bezier, points)?;

    debug!(?points, "evaluating Bezier control polygon");

    let mut curve = Curve::with_capacity(segments.len() * (steps as usize + 1));
    let mut frames = FramePropagator::new();
    for (i, segment) in segments.iter().enumerate() {
        frames.sample_into(segment, steps, &mut curve).map_err(|err| {
            warn!(segment = i, %err, "degenerate Bezier segment");
            err
        })?;
    }

    debug!(samples = curve.len(), "returning Bezier curve");
    Ok(curve)
}

pub(crate) fn reject(evaluator: Evaluator, count: usize, violation: PolygonViolation) -> CurveError {
    warn!(
        %evaluator,
        count,
        constraint = violation.constraint(),
        "rejecting control polygon"
    );
    CurveError::InvalidControlPolygon {
        evaluator,
        count,
        violation,
    }
}

pub(crate) fn check_steps(evaluator: Evaluator, steps: u32) -> Result<()> {
    if steps == 0 {
        warn!(%evaluator, "steps must be at least 1");
        return Err(CurveError::InvalidParameter(format!(
            "{} requires steps >= 1",
            evaluator
        )));
    }
    Ok(())
}

pub(crate) fn check_finite(evaluator: Evaluator, points: &[Point3]) -> Result<()> {
    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        warn!(%evaluator, index = i, "non-finite control point");
        return Err(CurveError::InvalidParameter(format!(
            "{} control point {} is not finite: {:?}",
            evaluator, i, points[i]
        )));
    }
    Ok(())
}
