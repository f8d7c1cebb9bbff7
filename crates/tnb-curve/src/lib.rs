//! TNB curves: cubic Bezier chains and uniform cubic B-splines sampled
//! into polylines with a propagated tangent/normal/binormal frame.

pub mod batch;
pub mod curve;
pub mod request;

pub use batch::{eval_bezier_batch, eval_bspline_batch};
pub use curve::{
    bspline_to_bezier, eval_bezier, eval_bspline, eval_circle, BezierSegment, Circle, Curve,
    CurvePoint, FramePropagator, ParametricCurve,
};
pub use request::CurveRequest;
