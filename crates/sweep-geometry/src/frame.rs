//! Curve frames and approximate parallel transport of the binormal.

use serde::{Deserialize, Serialize};
use sweep_core::{Result, Tolerance};
use sweep_math::{normalize_or_fail, Point3, Vector3};

/// One curve sample: position plus a right-handed orthonormal frame with
/// `binormal = tangent × normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveFrame {
    pub position: Point3,
    pub tangent: Vector3,
    pub normal: Vector3,
    pub binormal: Vector3,
}

impl CurveFrame {
    /// Largest deviation from unit length or orthogonality among the three axes.
    pub fn orthonormal_error(&self) -> f64 {
        let (t, n, b) = (self.tangent, self.normal, self.binormal);
        [
            (t.length() - 1.0).abs(),
            (n.length() - 1.0).abs(),
            (b.length() - 1.0).abs(),
            t.dot(n).abs(),
            t.dot(b).abs(),
            n.dot(b).abs(),
            (t.cross(n).dot(b) - 1.0).abs(),
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }
}

/// Running reference binormal threaded through the samples of one curve.
///
/// Each step derives `N = normalize(B_prev × T)` and `B = normalize(T × N)`;
/// the new `B` becomes the reference for the next sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransport {
    binormal: Vector3,
}

impl FrameTransport {
    /// Reference binormal for the very first sample of a curve.
    pub const SEED: Vector3 = Vector3::Z;

    pub fn new() -> Self {
        Self::from_binormal(Self::SEED)
    }

    pub fn from_binormal(binormal: Vector3) -> Self {
        Self { binormal }
    }

    /// Build the frame at `position` with derivative `velocity`.
    ///
    /// Fails with `DegenerateVector` (sample 0) when the velocity vanishes or
    /// is parallel to the reference binormal.
    pub fn advance(
        self,
        position: Point3,
        velocity: Vector3,
        tol: Tolerance,
    ) -> Result<(CurveFrame, Self)> {
        let tangent = normalize_or_fail(velocity, tol, "tangent")?;
        let normal = normalize_or_fail(
            self.binormal.cross(tangent),
            tol,
            "normal (tangent parallel to reference binormal)",
        )?;
        let binormal = normalize_or_fail(tangent.cross(normal), tol, "binormal")?;
        let frame = CurveFrame {
            position,
            tangent,
            normal,
            binormal,
        };
        Ok((frame, Self::from_binormal(binormal)))
    }
}

impl Default for FrameTransport {
    fn default() -> Self {
        Self::new()
    }
}
