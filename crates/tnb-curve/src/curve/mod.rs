//! Curve samples and the evaluators that produce them.

mod bezier;
mod bspline;
mod circle;
mod frame;
mod point;

use tnb_math::{Point3, Vector3};

pub use bezier::{bezier_segments, eval_bezier, is_bezier_chain_len, BezierSegment};
pub use bspline::{bspline_to_bezier, eval_bspline};
pub use circle::{eval_circle, Circle};
pub use frame::FramePropagator;
pub use point::{Curve, CurvePoint};

/// Trait for parametric curves in 3D space.
pub trait ParametricCurve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// First derivative at parameter `t`, not normalized.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}
