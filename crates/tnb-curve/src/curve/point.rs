//! Sampled curve points and the curve they form.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use tnb_core::traits::{BoundingBox, Validate};
use tnb_core::{CurveError, Result, Tolerance};
use tnb_math::{Aabb3, DMat4, Point3, Transform, Vector3};

/// One sample of a curve with its local frame.
///
/// `tangent`, `normal` and `binormal` are unit vectors forming a
/// right-handed orthonormal triad, `binormal = tangent × normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub position: Point3,
    pub tangent: Vector3,
    pub normal: Vector3,
    pub binormal: Vector3,
}

impl CurvePoint {
    /// Local-to-world matrix with columns `(N, B, T, V)`.
    ///
    /// A cross-section drawn in the local XY plane ends up perpendicular
    /// to the curve at this sample.
    pub fn frame_matrix(&self) -> DMat4 {
        self.frame_transform().to_mat4()
    }

    pub fn frame_transform(&self) -> Transform {
        Transform::from_frame(self.position, self.normal, self.binormal, self.tangent)
    }

    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            position: transform.transform_point(self.position),
            tangent: transform.transform_vector(self.tangent),
            normal: transform.transform_vector(self.normal),
            binormal: transform.transform_vector(self.binormal),
        }
    }

    fn check_frame(&self, tolerance: Tolerance) -> std::result::Result<(), String> {
        let axes = [
            ("T", self.tangent),
            ("N", self.normal),
            ("B", self.binormal),
        ];
        for (name, axis) in axes {
            if !tolerance.is_unit(axis.length()) {
                return Err(format!("|{}| = {}", name, axis.length()));
            }
        }
        let dots = [
            ("T.N", self.tangent.dot(self.normal)),
            ("T.B", self.tangent.dot(self.binormal)),
            ("N.B", self.normal.dot(self.binormal)),
        ];
        for (name, dot) in dots {
            if !tolerance.is_zero(dot) {
                return Err(format!("{} = {}", name, dot));
            }
        }
        if !self
            .tangent
            .cross(self.normal)
            .abs_diff_eq(self.binormal, tolerance.linear)
        {
            return Err("frame is not right-handed".to_string());
        }
        Ok(())
    }
}

/// An ordered sequence of samples; index order is the polyline direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: CurvePoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<CurvePoint> {
        self.points
    }

    /// Sample positions in order, i.e. the polyline a renderer draws.
    pub fn positions(&self) -> Vec<Point3> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Apply a rigid transform to every sample.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            points: self.points.iter().map(|p| p.transformed(transform)).collect(),
        }
    }
}

impl From<Vec<CurvePoint>> for Curve {
    fn from(points: Vec<CurvePoint>) -> Self {
        Self { points }
    }
}

impl Index<usize> for Curve {
    type Output = CurvePoint;

    fn index(&self, index: usize) -> &CurvePoint {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for Curve {
    type Item = CurvePoint;
    type IntoIter = std::vec::IntoIter<CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl Validate for Curve {
    fn validate_with(&self, tolerance: Tolerance) -> Result<()> {
        for (i, point) in self.points.iter().enumerate() {
            point
                .check_frame(tolerance)
                .map_err(|msg| CurveError::Tolerance(format!("sample {}: {}", i, msg)))?;
        }
        Ok(())
    }
}

impl BoundingBox for Curve {
    type Bounds = Aabb3;

    fn bounding_box(&self) -> Option<Aabb3> {
        Aabb3::from_points(self.points.iter().map(|p| p.position))
    }
}
