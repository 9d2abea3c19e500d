//! Analytic circle in the xy plane.

use std::f64::consts::TAU;

use sweep_core::{Result, SweepError};
use sweep_math::{dvec3, Vector3};

use super::{check_steps, Curve};
use crate::control_points::Dimension;
use crate::frame::CurveFrame;

/// Sample a circle of `radius` about the origin in `steps` equal angles.
///
/// Produces `steps + 1` frames; the last one closes the loop onto the first.
/// Normals point at the centre and the binormal is always `+Z`.
pub fn eval_circle(radius: f64, steps: u32) -> Result<Curve> {
    check_steps(steps)?;
    if !radius.is_finite() {
        return Err(SweepError::InvalidParameter(format!(
            "circle radius must be finite, got {radius}"
        )));
    }
    log::debug!("circle: radius {radius}, {steps} steps");

    let frames = (0..=steps)
        .map(|i| {
            let theta = TAU * f64::from(i) / f64::from(steps);
            let (sin, cos) = theta.sin_cos();
            CurveFrame {
                position: radius * dvec3(cos, sin, 0.0),
                tangent: dvec3(-sin, cos, 0.0),
                normal: dvec3(-cos, -sin, 0.0),
                binormal: Vector3::Z,
            }
        })
        .collect();
    Ok(Curve::new(frames, Dimension::Two))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sweep_core::traits::Validate;
    use sweep_core::Tolerance;

    #[test]
    fn test_points_on_circle() {
        let curve = eval_circle(2.5, 12).unwrap();
        assert_eq!(curve.len(), 13);
        assert_eq!(curve.dimension(), Dimension::Two);
        for frame in curve.frames() {
            assert_abs_diff_eq!(frame.position.length(), 2.5, epsilon = 1e-12);
        }
        curve.validate(Tolerance::default()).unwrap();
    }

    #[test]
    fn test_even_angular_spacing() {
        let n = 9;
        let curve = eval_circle(1.0, n).unwrap();
        for pair in curve.frames().windows(2) {
            let angle = pair[0].position.angle_between(pair[1].position);
            assert_abs_diff_eq!(angle, TAU / f64::from(n), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_closed_and_inward_normals() {
        let curve = eval_circle(1.0, 6).unwrap();
        let first = curve.frames()[0];
        let last = curve.frames()[6];
        assert!((first.position - last.position).length() < 1e-12);
        for frame in curve.frames() {
            assert!((frame.normal + frame.position).length() < 1e-12);
        }
    }

    #[test]
    fn test_rejects_zero_steps_and_nan_radius() {
        assert!(eval_circle(1.0, 0).is_err());
        assert!(eval_circle(f64::NAN, 4).is_err());
    }
}
