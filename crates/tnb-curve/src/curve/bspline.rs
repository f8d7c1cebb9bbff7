//! Uniform cubic B-splines, evaluated through their Bezier equivalent.

use tnb_core::{Evaluator, PolygonViolation, Result};
use tnb_math::basis::{geometry_matrix, matrix_columns, BEZIER_INVERSE, BSPLINE};
use tnb_math::Point3;
use tracing::{debug, instrument};

use super::bezier::{check_finite, check_steps, eval_bezier, reject};
use super::Curve;

/// Convert a uniform cubic B-spline control polygon into one continuous
/// `3n+1` Bezier chain.
///
/// Each run of four consecutive points becomes one Bezier segment via
/// `G · BSPLINE · BEZIER_INVERSE`. The first point of every segment after
/// the first coincides with the last point of the previous one and is
/// dropped, so `k` windows give `4 + 3(k - 1)` points.
pub fn bspline_to_bezier(points: &[Point3]) -> Result<Vec<Point3>> {
    if points.len() < 4 {
        return Err(reject(Evaluator::Bspline, points.len(), PolygonViolation::TooFewPoints));
    }

    let windows = points.len() - 3;
    let change_of_basis = BSPLINE * BEZIER_INVERSE;
    let mut bezier = Vec::with_capacity(4 + 3 * (windows - 1));
    for (i, w) in points.windows(4).enumerate() {
        let g = geometry_matrix([w[0], w[1], w[2], w[3]]) * change_of_basis;
        let skip = if i == 0 { 0 } else { 1 };
        bezier.extend_from_slice(&matrix_columns(&g)[skip..]);
    }
    Ok(bezier)
}

/// Evaluate a uniform cubic B-spline with propagated frames.
///
/// The result is exactly what [`eval_bezier`] returns for the converted
/// control polygon with the same `steps`.
#[instrument(skip(points), fields(count = points.len()))]
pub fn eval_bspline(points: &[Point3], steps: u32) -> Result<Curve> {
    let bezier = bspline_to_bezier(points)?;
    check_steps(Evaluator::Bspline, steps)?;
    check_finite(Evaluator::Bspline, points)?;

    debug!(?points, bezier_points = bezier.len(), "converted B-spline to Bezier");
    eval_bezier(&bezier, steps)
}
