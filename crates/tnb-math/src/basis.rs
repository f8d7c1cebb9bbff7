//! Cubic basis matrices against the power basis `(1, t, t², t³)`.
//!
//! A segment with control points packed as the columns of a geometry
//! matrix `G` (homogeneous `w = 0`) evaluates as `Q(t) = G · M · p(t)`,
//! where `M` is one of the matrices below and `p(t)` is [`power_basis`].

use crate::{DMat4, DVec4, Point3};

const THIRD: f64 = 1.0 / 3.0;
const SIXTH: f64 = 1.0 / 6.0;

/// Cubic Bernstein basis.
pub const BEZIER: DMat4 = DMat4::from_cols(
    DVec4::new(1.0, 0.0, 0.0, 0.0),
    DVec4::new(-3.0, 3.0, 0.0, 0.0),
    DVec4::new(3.0, -6.0, 3.0, 0.0),
    DVec4::new(-1.0, 3.0, -3.0, 1.0),
);

/// Derivative of [`BEZIER`] with respect to `t`, expressed against the
/// same power basis so `Q'(t) = G · BEZIER_DERIVATIVE · p(t)`.
pub const BEZIER_DERIVATIVE: DMat4 = DMat4::from_cols(
    DVec4::new(-3.0, 3.0, 0.0, 0.0),
    DVec4::new(6.0, -12.0, 6.0, 0.0),
    DVec4::new(-3.0, 9.0, -9.0, 3.0),
    DVec4::ZERO,
);

/// Inverse of [`BEZIER`].
pub const BEZIER_INVERSE: DMat4 = DMat4::from_cols(
    DVec4::new(1.0, 0.0, 0.0, 0.0),
    DVec4::new(1.0, THIRD, 0.0, 0.0),
    DVec4::new(1.0, 2.0 * THIRD, THIRD, 0.0),
    DVec4::new(1.0, 1.0, 1.0, 1.0),
);

/// Uniform cubic B-spline basis.
pub const BSPLINE: DMat4 = DMat4::from_cols(
    DVec4::new(SIXTH, 2.0 * THIRD, SIXTH, 0.0),
    DVec4::new(-0.5, 0.0, 0.5, 0.0),
    DVec4::new(0.5, -1.0, 0.5, 0.0),
    DVec4::new(-SIXTH, 0.5, -0.5, SIXTH),
);

/// Power basis column `(1, t, t², t³)`.
#[inline]
pub fn power_basis(t: f64) -> DVec4 {
    DVec4::new(1.0, t, t * t, t * t * t)
}

/// Pack four control points as the columns of a geometry matrix.
#[inline]
pub fn geometry_matrix(points: [Point3; 4]) -> DMat4 {
    DMat4::from_cols(
        points[0].extend(0.0),
        points[1].extend(0.0),
        points[2].extend(0.0),
        points[3].extend(0.0),
    )
}

/// Read the control points back out of a geometry matrix.
#[inline]
pub fn matrix_columns(g: &DMat4) -> [Point3; 4] {
    [
        g.x_axis.truncate(),
        g.y_axis.truncate(),
        g.z_axis.truncate(),
        g.w_axis.truncate(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::dvec3;

    #[test]
    fn test_inverse_is_inverse() {
        let product = BEZIER * BEZIER_INVERSE;
        assert!(product.abs_diff_eq(DMat4::IDENTITY, 1e-12));
        assert!(BEZIER.inverse().abs_diff_eq(BEZIER_INVERSE, 1e-12));
    }

    #[test]
    fn test_bernstein_partition_of_unity() {
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let weights = BEZIER * power_basis(t);
            assert_abs_diff_eq!(weights.element_sum(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let h = 1e-6;
        for i in 1..10 {
            let t = i as f64 / 10.0;
            let numeric = (BEZIER * power_basis(t + h) - BEZIER * power_basis(t - h)) / (2.0 * h);
            let analytic = BEZIER_DERIVATIVE * power_basis(t);
            assert!(numeric.abs_diff_eq(analytic, 1e-6));
        }
    }

    #[test]
    fn test_bspline_partition_of_unity() {
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let weights = BSPLINE * power_basis(t);
            assert_abs_diff_eq!(weights.element_sum(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_bspline_to_bezier_keeps_line_on_line() {
        let pts = [
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 1.0, 0.0),
            dvec3(2.0, 2.0, 0.0),
            dvec3(3.0, 3.0, 0.0),
        ];
        let bezier = matrix_columns(&(geometry_matrix(pts) * BSPLINE * BEZIER_INVERSE));
        // Evenly spaced collinear points map to the middle third of the line.
        let expected = [
            dvec3(1.0, 1.0, 0.0),
            dvec3(4.0 / 3.0, 4.0 / 3.0, 0.0),
            dvec3(5.0 / 3.0, 5.0 / 3.0, 0.0),
            dvec3(2.0, 2.0, 0.0),
        ];
        for (got, want) in bezier.iter().zip(expected) {
            assert!(got.abs_diff_eq(want, 1e-12), "{got:?} != {want:?}");
        }
    }

    #[test]
    fn test_geometry_matrix_columns_round_trip() {
        let pts = [dvec3(1.0, 2.0, 3.0), dvec3(4.0, 5.0, 6.0), dvec3(7.0, 8.0, 9.0), dvec3(0.0, -1.0, -2.0)];
        let g = geometry_matrix(pts);
        assert_eq!(g.x_axis.w, 0.0);
        assert_eq!(matrix_columns(&g), pts);
    }
}
