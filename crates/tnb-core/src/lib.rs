pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{CurveError, Evaluator, PolygonViolation, Result};
pub use tolerance::Tolerance;
