//! Uniform cubic B-splines, sampled through their Bezier form.

use sweep_core::{Result, Tolerance};
use sweep_math::CubicBasis;

use super::{check_steps, sample_segments, Curve, CubicSegment, SplineKind};
use crate::control_points::ControlPoints;

/// Evaluate a uniform cubic B-spline.
///
/// Every window of four control points is converted to the equivalent Bezier
/// segment and sampled with the Bezier basis.
pub fn eval_bspline(cps: &ControlPoints, steps: u32, tol: Tolerance) -> Result<Curve> {
    let segments = SplineKind::BSpline.segment_count(cps.len())?;
    check_steps(steps)?;
    log::debug!("bspline: {} control points, {segments} segments, {steps} steps", cps.len());

    let windows = cps.points().windows(4).map(|w| {
        let window = CubicSegment::from_window(CubicBasis::BSPLINE, w);
        CubicSegment {
            basis: CubicBasis::BEZIER,
            geometry: CubicBasis::BSPLINE.convert_to(&CubicBasis::BEZIER, &window.geometry),
        }
    });
    sample_segments(windows, steps, cps.dimension(), tol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweep_core::traits::Validate;
    use sweep_core::SweepError;
    use sweep_math::{dvec3, DVec2, Vector3};

    fn zigzag(n: usize) -> ControlPoints {
        ControlPoints::planar((0..n).map(|i| DVec2::new(i as f64, (i % 2) as f64)))
    }

    #[test]
    fn test_sample_count() {
        let curve = eval_bspline(&zigzag(7), 6, Tolerance::default()).unwrap();
        assert_eq!(curve.len(), 4 * 6 + 1);
        curve.validate(Tolerance::default()).unwrap();
    }

    #[test]
    fn test_start_point_is_basis_average() {
        let cps = zigzag(4);
        let p = cps.points();
        let curve = eval_bspline(&cps, 4, Tolerance::default()).unwrap();
        let expected = (p[0] + 4.0 * p[1] + p[2]) / 6.0;
        assert!((curve.frames()[0].position - expected).length() < 1e-12);
        let expected_end = (p[1] + 4.0 * p[2] + p[3]) / 6.0;
        assert!((curve.frames()[4].position - expected_end).length() < 1e-12);
    }

    #[test]
    fn test_segments_join_with_matching_tangent() {
        // C2 continuity: the joint sample matches the previous segment's end
        let cps = zigzag(5);
        let p = cps.points();
        let curve = eval_bspline(&cps, 4, Tolerance::default()).unwrap();
        let joint = (p[1] + 4.0 * p[2] + p[3]) / 6.0;
        assert!((curve.frames()[4].position - joint).length() < 1e-12);
        let t = (p[3] - p[1]).normalize();
        assert!((curve.frames()[4].tangent - t).length() < 1e-12);
    }

    #[test]
    fn test_space_curve_frames() {
        let cps = ControlPoints::spatial(vec![
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 0.0, 0.5),
            dvec3(1.0, 1.0, 1.0),
            dvec3(0.0, 1.0, 1.5),
            dvec3(0.0, 0.0, 2.0),
        ]);
        let curve = eval_bspline(&cps, 12, Tolerance::default()).unwrap();
        assert_eq!(curve.len(), 25);
        curve.validate(Tolerance::default()).unwrap();
        // Seeded with +Z at the start
        assert!(curve.frames()[0].binormal.dot(Vector3::Z) > 0.0);
    }

    #[test]
    fn test_too_few_points() {
        let err = eval_bspline(&zigzag(3), 4, Tolerance::default()).unwrap_err();
        assert!(matches!(
            err,
            SweepError::InsufficientControlPoints { found: 3, .. }
        ));
    }
}
