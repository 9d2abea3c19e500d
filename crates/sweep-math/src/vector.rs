use sweep_core::{Result, SweepError, Tolerance};

use crate::Vector3;

/// Normalize `v`, failing with [`SweepError::DegenerateVector`] when it is
/// shorter than `tol.length`.
///
/// The returned error carries sample index 0; evaluators re-tag it with
/// [`SweepError::at_sample`].
pub fn normalize_or_fail(v: Vector3, tol: Tolerance, what: &'static str) -> Result<Vector3> {
    let len = v.length();
    if !len.is_finite() || tol.is_degenerate(len) {
        return Err(SweepError::DegenerateVector { sample: 0, what });
    }
    Ok(v / len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::dvec3;

    #[test]
    fn test_normalize() {
        let n = normalize_or_fail(dvec3(3.0, 0.0, 4.0), Tolerance::default(), "v").unwrap();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(n.x, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(n.z, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_length_fails() {
        let err = normalize_or_fail(Vector3::ZERO, Tolerance::default(), "normal").unwrap_err();
        assert!(matches!(err, SweepError::DegenerateVector { what: "normal", .. }));
    }

    #[test]
    fn test_non_finite_fails() {
        let v = dvec3(f64::NAN, 0.0, 1.0);
        assert!(normalize_or_fail(v, Tolerance::default(), "v").is_err());
    }

    #[test]
    fn test_cross_of_parallel_vectors_fails() {
        let c = Vector3::Z.cross(dvec3(0.0, 0.0, -2.0));
        assert!(normalize_or_fail(c, Tolerance::default(), "normal").is_err());
    }
}
