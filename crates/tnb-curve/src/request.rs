//! Serializable curve requests handed over by front ends.

use serde::{Deserialize, Serialize};
use tnb_core::Result;
use tnb_math::Point3;

use crate::curve::{eval_bezier, eval_bspline, eval_circle, Curve};

/// One curve to evaluate, tagged by `kind`.
///
/// ```json
/// { "kind": "bspline", "points": [[0, 0, 0], [1, 1, 0], [2, 0, 0], [3, 1, 0]], "steps": 20 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveRequest {
    Bezier { points: Vec<Point3>, steps: u32 },
    Bspline { points: Vec<Point3>, steps: u32 },
    Circle { radius: f64, steps: u32 },
}

impl CurveRequest {
    pub fn steps(&self) -> u32 {
        match self {
            CurveRequest::Bezier { steps, .. }
            | CurveRequest::Bspline { steps, .. }
            | CurveRequest::Circle { steps, .. } => *steps,
        }
    }

    pub fn evaluate(&self) -> Result<Curve> {
        match self {
            CurveRequest::Bezier { points, steps } => eval_bezier(points, *steps),
            CurveRequest::Bspline { points, steps } => eval_bspline(points, *steps),
            CurveRequest::Circle { radius, steps } => eval_circle(*radius, *steps),
        }
    }
}
