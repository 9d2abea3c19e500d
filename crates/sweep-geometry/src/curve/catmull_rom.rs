//! Catmull-Rom splines through the interior control points.

use sweep_core::{Result, Tolerance};
use sweep_math::CubicBasis;

use super::{check_steps, sample_segments, Curve, CubicSegment, SplineKind};
use crate::control_points::ControlPoints;

/// Evaluate a Catmull-Rom spline.
///
/// Segment `i` runs from point `i + 1` to point `i + 2`, using points `i` and
/// `i + 3` only to shape the tangents. The first and last control points are
/// not interpolated.
pub fn eval_catmull_rom(cps: &ControlPoints, steps: u32, tol: Tolerance) -> Result<Curve> {
    let segments = SplineKind::CatmullRom.segment_count(cps.len())?;
    check_steps(steps)?;
    log::debug!("catmull-rom: {} control points, {segments} segments, {steps} steps", cps.len());

    let windows = cps
        .points()
        .windows(4)
        .map(|w| CubicSegment::from_window(CubicBasis::CATMULL_ROM, w));
    sample_segments(windows, steps, cps.dimension(), tol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweep_core::traits::Validate;
    use sweep_core::SweepError;
    use sweep_math::{dvec3, DVec2};

    fn wave(n: usize) -> ControlPoints {
        ControlPoints::planar((0..n).map(|i| DVec2::new(i as f64, (i as f64 * 0.9).sin())))
    }

    #[test]
    fn test_sample_count() {
        assert_eq!(eval_catmull_rom(&wave(4), 10, Tolerance::default()).unwrap().len(), 11);
        assert_eq!(eval_catmull_rom(&wave(6), 5, Tolerance::default()).unwrap().len(), 16);
    }

    #[test]
    fn test_passes_through_interior_points() {
        let cps = wave(6);
        let curve = eval_catmull_rom(&cps, 5, Tolerance::default()).unwrap();
        for (k, p) in cps.points()[1..5].iter().enumerate() {
            let frame = &curve.frames()[k * 5];
            assert!((frame.position - *p).length() < 1e-12, "missed point {}", k + 1);
        }
        curve.validate(Tolerance::default()).unwrap();
    }

    #[test]
    fn test_helix_is_orthonormal() {
        let cps = ControlPoints::spatial(
            (0..12)
                .map(|i| {
                    let a = i as f64 * 0.6;
                    dvec3(a.cos(), a.sin(), 0.2 * i as f64)
                })
                .collect(),
        );
        let curve = eval_catmull_rom(&cps, 8, Tolerance::default()).unwrap();
        assert_eq!(curve.len(), 9 * 8 + 1);
        curve.validate(Tolerance::default()).unwrap();
    }

    #[test]
    fn test_binormal_continuous_across_segments() {
        let curve = eval_catmull_rom(&wave(8), 6, Tolerance::default()).unwrap();
        for pair in curve.frames().windows(2) {
            assert!(pair[0].binormal.dot(pair[1].binormal) > 0.99);
        }
    }

    #[test]
    fn test_vertical_start_is_degenerate() {
        let cps = ControlPoints::spatial(vec![
            dvec3(0.0, 0.0, -1.0),
            dvec3(0.0, 0.0, 0.0),
            dvec3(0.0, 0.0, 1.0),
            dvec3(0.0, 0.0, 2.0),
        ]);
        let err = eval_catmull_rom(&cps, 4, Tolerance::default()).unwrap_err();
        assert!(matches!(err, SweepError::DegenerateVector { sample: 0, .. }));
    }

    #[test]
    fn test_too_few_points() {
        let err = eval_catmull_rom(&wave(3), 4, Tolerance::default()).unwrap_err();
        assert!(matches!(err, SweepError::InsufficientControlPoints { .. }));
    }
}
