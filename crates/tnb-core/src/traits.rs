use crate::error::Result;
use crate::tolerance::Tolerance;

/// Validate the numeric integrity of a sampled entity.
pub trait Validate {
    fn validate_with(&self, tolerance: Tolerance) -> Result<()>;

    fn validate(&self) -> Result<()> {
        self.validate_with(Tolerance::default())
    }
}

/// Compute an axis-aligned bounding box.
pub trait BoundingBox {
    type Bounds;
    fn bounding_box(&self) -> Option<Self::Bounds>;
}
