//! Frame propagation along a sampled curve.
//!
//! The first sample is seeded from a fixed binormal, `+Z` (or `+Y` when the
//! tangent is parallel to `+Z`). Every later sample derives its normal from
//! the previous binormal and its own tangent:
//!
//! ```text
//! N[i] = normalize(B[i-1] × T[i])
//! B[i] = normalize(T[i] × N[i])
//! ```
//!
//! The update is a sequential fold, so a chain can never be split across
//! threads. It keeps the frame from twisting as long as consecutive
//! tangents stay close; a tangent reversal flips the frame.

use tnb_core::{CurveError, Result};
use tnb_math::{Point3, Vector3};

use super::{Curve, CurvePoint, ParametricCurve};

const SEED_BINORMAL: Vector3 = Vector3::Z;
const FALLBACK_BINORMAL: Vector3 = Vector3::Y;

/// Carries the previous binormal from one sample to the next.
#[derive(Debug, Clone, Default)]
pub struct FramePropagator {
    last_binormal: Option<Vector3>,
}

impl FramePropagator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the first frame has been seeded.
    pub fn is_seeded(&self) -> bool {
        self.last_binormal.is_some()
    }

    /// Build the frame for the next sample. `derivative` may have any
    /// nonzero length; the stored tangent is its normalization.
    pub fn advance(&mut self, position: Point3, derivative: Vector3) -> Result<CurvePoint> {
        let tangent = derivative.try_normalize().ok_or_else(|| {
            CurveError::DegenerateGeometry(format!("zero-length tangent at {:?}", position))
        })?;
        let previous = match self.last_binormal {
            Some(binormal) => binormal,
            None if tangent.cross(SEED_BINORMAL) == Vector3::ZERO => FALLBACK_BINORMAL,
            None => SEED_BINORMAL,
        };

        let normal = previous.cross(tangent).try_normalize().ok_or_else(|| {
            CurveError::DegenerateGeometry(format!(
                "tangent {:?} is parallel to the previous binormal {:?}",
                tangent, previous
            ))
        })?;
        // Exact for the seed whenever the tangent is already perpendicular to it.
        let binormal = tangent.cross(normal).normalize();

        self.last_binormal = Some(binormal);
        Ok(CurvePoint {
            position,
            tangent,
            normal,
            binormal,
        })
    }

    /// Sample `segment` at `steps + 1` evenly spaced parameters spanning its
    /// whole domain (both ends included) and append the frames to `out`.
    pub fn sample_into<C>(&mut self, segment: &C, steps: u32, out: &mut Curve) -> Result<()>
    where
        C: ParametricCurve + ?Sized,
    {
        let (t0, t1) = segment.domain();
        for s in 0..=steps {
            let t = t0 + (t1 - t0) * (s as f64 / steps as f64);
            out.push(self.advance(segment.point_at(t), segment.tangent_at(t))?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tnb_math::DVec3;

    #[test]
    fn test_seed_in_plane_tangent() {
        let mut frames = FramePropagator::new();
        assert!(!frames.is_seeded());
        let p = frames.advance(DVec3::ZERO, DVec3::X).unwrap();
        assert!(frames.is_seeded());
        assert_eq!(p.normal, DVec3::Y);
        assert_eq!(p.binormal, DVec3::Z);
    }

    #[test]
    fn test_seed_falls_back_when_tangent_is_z() {
        let mut frames = FramePropagator::new();
        let p = frames.advance(DVec3::ZERO, DVec3::Z).unwrap();
        // B seed = +Y, N = Y × Z = +X
        assert_eq!(p.normal, DVec3::X);
        assert_eq!(p.binormal, DVec3::Y);
    }

    #[test]
    fn test_seed_with_out_of_plane_tangent_is_orthonormal() {
        let mut frames = FramePropagator::new();
        let t = DVec3::new(1.0, 0.0, 1.0).normalize();
        let p = frames.advance(DVec3::ZERO, t).unwrap();
        assert_abs_diff_eq!(p.normal.dot(t), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.binormal.dot(t), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.binormal.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_propagation_uses_previous_binormal() {
        let mut frames = FramePropagator::new();
        frames.advance(DVec3::ZERO, DVec3::X).unwrap();
        let p = frames.advance(DVec3::X, DVec3::Y).unwrap();
        // N = Z × Y = -X, B = Y × -X = +Z
        assert_eq!(p.normal, -DVec3::X);
        assert_eq!(p.binormal, DVec3::Z);
    }

    #[test]
    fn test_tangent_is_normalized() {
        let mut frames = FramePropagator::new();
        let p = frames.advance(DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0)).unwrap();
        assert_eq!(p.tangent, DVec3::X);
        let q = frames.advance(DVec3::X, DVec3::new(0.5, 0.5, 0.0)).unwrap();
        assert_abs_diff_eq!(q.tangent.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.tangent.dot(q.normal), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_tangent_is_degenerate() {
        let mut frames = FramePropagator::new();
        let err = frames.advance(DVec3::ZERO, DVec3::ZERO).unwrap_err();
        assert!(matches!(err, CurveError::DegenerateGeometry(_)));
        assert!(!frames.is_seeded());
    }

    #[test]
    fn test_tangent_along_previous_binormal_is_degenerate() {
        let mut frames = FramePropagator::new();
        frames.advance(DVec3::ZERO, DVec3::X).unwrap();
        let err = frames.advance(DVec3::X, DVec3::Z).unwrap_err();
        assert!(matches!(err, CurveError::DegenerateGeometry(_)));
    }
}
