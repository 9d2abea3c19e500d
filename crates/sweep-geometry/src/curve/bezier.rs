//! Piecewise cubic Bezier curves.

use sweep_core::{Result, Tolerance};
use sweep_math::CubicBasis;

use super::{check_steps, sample_segments, Curve, CubicSegment, SplineKind};
use crate::control_points::ControlPoints;

/// Evaluate a chain of cubic Bezier segments sharing endpoints.
///
/// Needs `3k + 1` control points; segment `i` uses points `3i..=3i+3`. Each
/// segment is sampled on its own, so joints are only C0 unless the control
/// points make them smoother.
pub fn eval_bezier(cps: &ControlPoints, steps: u32, tol: Tolerance) -> Result<Curve> {
    let segments = SplineKind::Bezier.segment_count(cps.len())?;
    check_steps(steps)?;
    log::debug!("bezier: {} control points, {segments} segments, {steps} steps", cps.len());

    let windows = cps
        .points()
        .windows(4)
        .step_by(3)
        .map(|w| CubicSegment::from_window(CubicBasis::BEZIER, w));
    sample_segments(windows, steps, cps.dimension(), tol)
}
