use crate::error::Result;
use crate::tolerance::Tolerance;

/// Validate structural integrity of a sampled curve or generated mesh.
pub trait Validate {
    fn validate(&self, tol: Tolerance) -> Result<()>;
}

/// Compute an axis-aligned bounding box.
pub trait BoundingBox {
    type Bounds;
    fn bounding_box(&self) -> Option<Self::Bounds>;
}
