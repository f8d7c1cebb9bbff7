//! Circle generator with an exact analytic frame.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tnb_core::{CurveError, Result};
use tnb_math::{Point3, Vector3};
use tracing::{instrument, warn};

use super::{Curve, CurvePoint, ParametricCurve};

/// A circle about the origin in the XY plane, counterclockwise seen from
/// `+Z`, parameterized over `[0, 2*PI]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Exact frame at `t`: the normal points at the center and the
    /// binormal is `+Z` everywhere.
    pub fn frame_at(&self, t: f64) -> CurvePoint {
        let (sin, cos) = t.sin_cos();
        CurvePoint {
            position: self.radius * Vector3::new(cos, sin, 0.0),
            tangent: Vector3::new(-sin, cos, 0.0),
            normal: Vector3::new(-cos, -sin, 0.0),
            binormal: Vector3::Z,
        }
    }
}

impl ParametricCurve for Circle {
    fn point_at(&self, t: f64) -> Point3 {
        self.frame_at(t).position
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let (sin, cos) = t.sin_cos();
        self.radius * Vector3::new(-sin, cos, 0.0)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}

/// Sample a circle of `radius` at `steps + 1` evenly spaced angles over
/// `[0, 2*PI]`; the last sample repeats the first.
#[instrument]
pub fn eval_circle(radius: f64, steps: u32) -> Result<Curve> {
    if steps == 0 {
        warn!("steps must be at least 1");
        return Err(CurveError::InvalidParameter(
            "eval_circle requires steps >= 1".to_string(),
        ));
    }
    if !radius.is_finite() {
        warn!("radius is not finite");
        return Err(CurveError::InvalidParameter(format!(
            "eval_circle radius is not finite: {}",
            radius
        )));
    }

    let circle = Circle::new(radius);
    Ok((0..=steps)
        .map(|i| circle.frame_at(TAU * i as f64 / steps as f64))
        .collect::<Vec<_>>()
        .into())
}
