use std::fmt;

use thiserror::Error;

/// The evaluator that rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluator {
    Bezier,
    Bspline,
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluator::Bezier => write!(f, "eval_bezier"),
            Evaluator::Bspline => write!(f, "eval_bspline"),
        }
    }
}

/// Which control polygon precondition was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonViolation {
    /// Bezier chains need `3n+1` points with `n >= 1`.
    TooFewOrMisalignedPoints,
    /// B-splines need at least 4 points.
    TooFewPoints,
}

impl PolygonViolation {
    pub fn constraint(self) -> &'static str {
        match self {
            PolygonViolation::TooFewOrMisalignedPoints => "3n+1 control points with n >= 1",
            PolygonViolation::TooFewPoints => "at least 4 control points",
        }
    }
}

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("{evaluator} received {count} control points, expected {}", .violation.constraint())]
    InvalidControlPolygon {
        evaluator: Evaluator,
        count: usize,
        violation: PolygonViolation,
    },

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Tolerance violation: {0}")]
    Tolerance(String),
}

impl CurveError {
    /// The violated polygon precondition, if this is a validation failure.
    pub fn violation(&self) -> Option<PolygonViolation> {
        match self {
            CurveError::InvalidControlPolygon { violation, .. } => Some(*violation),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_polygon_message() {
        let err = CurveError::InvalidControlPolygon {
            evaluator: Evaluator::Bezier,
            count: 5,
            violation: PolygonViolation::TooFewOrMisalignedPoints,
        };
        assert_eq!(
            err.to_string(),
            "eval_bezier received 5 control points, expected 3n+1 control points with n >= 1"
        );
        assert_eq!(err.violation(), Some(PolygonViolation::TooFewOrMisalignedPoints));
    }

    #[test]
    fn test_other_kinds_have_no_violation() {
        let err = CurveError::InvalidParameter("steps must be at least 1".into());
        assert!(err.violation().is_none());
        assert_eq!(err.to_string(), "Invalid parameter: steps must be at least 1");
    }
}
