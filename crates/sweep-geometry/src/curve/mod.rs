//! Sampled curves and the evaluators that produce them.

mod bezier;
mod bspline;
mod catmull_rom;
mod circle;

use serde::{Deserialize, Serialize};
use sweep_core::traits::{BoundingBox, Validate};
use sweep_core::{Result, SweepError, Tolerance};
use sweep_math::{Aabb3, CubicBasis, DVec3, Point3};

use crate::control_points::{ControlPoints, Dimension};
use crate::frame::{CurveFrame, FrameTransport};

pub use bezier::eval_bezier;
pub use bspline::eval_bspline;
pub use catmull_rom::eval_catmull_rom;
pub use circle::eval_circle;

/// An ordered sequence of sampled frames. Immutable once evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    frames: Vec<CurveFrame>,
    dimension: Dimension,
}

impl Curve {
    pub(crate) fn new(frames: Vec<CurveFrame>, dimension: Dimension) -> Self {
        Self { frames, dimension }
    }

    pub fn frames(&self) -> &[CurveFrame] {
        &self.frames
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Point3> + '_ {
        self.frames.iter().map(|f| f.position)
    }
}

impl Validate for Curve {
    fn validate(&self, tol: Tolerance) -> Result<()> {
        for (i, frame) in self.frames.iter().enumerate() {
            let err = frame.orthonormal_error();
            if err > tol.frame {
                return Err(SweepError::Invalid(format!(
                    "frame {i} is not orthonormal (error {err:e})"
                )));
            }
            if self.dimension == Dimension::Two && !tol.frame_zero(frame.position.z) {
                return Err(SweepError::Invalid(format!(
                    "2d curve leaves the xy plane at frame {i}"
                )));
            }
        }
        Ok(())
    }
}

impl BoundingBox for Curve {
    type Bounds = Aabb3;

    fn bounding_box(&self) -> Option<Aabb3> {
        Aabb3::from_points(self.positions())
    }
}

/// The piecewise-cubic curve families read from control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplineKind {
    Bezier,
    BSpline,
    CatmullRom,
}

impl SplineKind {
    pub fn name(self) -> &'static str {
        match self {
            SplineKind::Bezier => "Bezier",
            SplineKind::BSpline => "B-spline",
            SplineKind::CatmullRom => "Catmull-Rom",
        }
    }

    /// Number of cubic segments for `count` control points.
    pub fn segment_count(self, count: usize) -> Result<usize> {
        match self {
            SplineKind::Bezier if count >= 4 && (count - 1) % 3 == 0 => Ok((count - 1) / 3),
            SplineKind::Bezier => Err(SweepError::InsufficientControlPoints {
                curve: self.name(),
                required: "3k+1 (at least 4)",
                found: count,
            }),
            SplineKind::BSpline | SplineKind::CatmullRom if count >= 4 => Ok(count - 3),
            SplineKind::BSpline | SplineKind::CatmullRom => {
                Err(SweepError::InsufficientControlPoints {
                    curve: self.name(),
                    required: "at least 4",
                    found: count,
                })
            }
        }
    }

    pub fn evaluate(self, cps: &ControlPoints, steps: u32, tol: Tolerance) -> Result<Curve> {
        match self {
            SplineKind::Bezier => eval_bezier(cps, steps, tol),
            SplineKind::BSpline => eval_bspline(cps, steps, tol),
            SplineKind::CatmullRom => eval_catmull_rom(cps, steps, tol),
        }
    }
}

/// Four control points and the basis that weights them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CubicSegment {
    pub basis: CubicBasis,
    pub geometry: [DVec3; 4],
}

impl CubicSegment {
    pub fn from_window(basis: CubicBasis, window: &[DVec3]) -> Self {
        Self {
            basis,
            geometry: [window[0], window[1], window[2], window[3]],
        }
    }
}

pub(crate) fn check_steps(steps: u32) -> Result<()> {
    if steps == 0 {
        return Err(SweepError::InvalidParameter(
            "steps must be at least 1".into(),
        ));
    }
    Ok(())
}

/// Sample `steps + 1` parameters per segment, threading the reference
/// binormal from one segment into the next.
///
/// The joint between two segments is kept once, evaluated with the segment
/// that starts there, so the result holds `segments * steps + 1` frames.
pub(crate) fn sample_segments<I>(
    segments: I,
    steps: u32,
    dimension: Dimension,
    tol: Tolerance,
) -> Result<Curve>
where
    I: IntoIterator<Item = CubicSegment>,
{
    let (frames, _) = segments.into_iter().try_fold(
        (Vec::new(), FrameTransport::new()),
        |(mut frames, mut transport): (Vec<CurveFrame>, FrameTransport), segment| {
            frames.pop();
            for step in 0..=steps {
                let t = f64::from(step) / f64::from(steps);
                let position = segment.basis.point(&segment.geometry, t);
                let velocity = segment.basis.tangent(&segment.geometry, t);
                let (frame, next) = transport
                    .advance(position, velocity, tol)
                    .map_err(|e| e.at_sample(frames.len()))?;
                frames.push(frame);
                transport = next;
            }
            Ok::<_, SweepError>((frames, transport))
        },
    )?;
    Ok(Curve::new(frames, dimension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_counts() {
        assert_eq!(SplineKind::Bezier.segment_count(4).unwrap(), 1);
        assert_eq!(SplineKind::Bezier.segment_count(10).unwrap(), 3);
        assert!(SplineKind::Bezier.segment_count(5).is_err());
        assert!(SplineKind::Bezier.segment_count(1).is_err());
        assert_eq!(SplineKind::BSpline.segment_count(4).unwrap(), 1);
        assert_eq!(SplineKind::CatmullRom.segment_count(6).unwrap(), 3);
        assert!(SplineKind::CatmullRom.segment_count(3).is_err());
    }

    #[test]
    fn test_insufficient_error_names_curve() {
        let err = SplineKind::CatmullRom.segment_count(2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Catmull-Rom needs at least 4 control points, got 2"
        );
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert!(matches!(
            check_steps(0),
            Err(SweepError::InvalidParameter(_))
        ));
        assert!(check_steps(1).is_ok());
    }
}
