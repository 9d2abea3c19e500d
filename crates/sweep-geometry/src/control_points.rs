//! Control point sets with a declared dimensionality.

use serde::{Deserialize, Serialize};
use sweep_core::{Result, SweepError};
use sweep_math::{DVec2, Point3};

/// Declared dimensionality of a control point set or curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Two,
    Three,
}

impl Dimension {
    pub fn as_u8(self) -> u8 {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.as_u8())
    }
}

/// An ordered set of control points. Planar sets have `z == 0` everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoints {
    points: Vec<Point3>,
    dimension: Dimension,
}

impl ControlPoints {
    /// Wrap `points`, rejecting planar sets with a nonzero `z`.
    pub fn new(points: Vec<Point3>, dimension: Dimension) -> Result<Self> {
        if dimension == Dimension::Two {
            if let Some(i) = points.iter().position(|p| p.z != 0.0) {
                return Err(SweepError::InvalidParameter(format!(
                    "2d control point {i} has z = {}",
                    points[i].z
                )));
            }
        }
        Ok(Self { points, dimension })
    }

    pub fn planar<I>(points: I) -> Self
    where
        I: IntoIterator<Item = DVec2>,
    {
        Self {
            points: points.into_iter().map(|p| p.extend(0.0)).collect(),
            dimension: Dimension::Two,
        }
    }

    pub fn spatial(points: Vec<Point3>) -> Self {
        Self {
            points,
            dimension: Dimension::Three,
        }
    }

    /// A set with no points, kept for records that are not built from control points.
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            points: Vec::new(),
            dimension,
        }
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
