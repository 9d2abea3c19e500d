//! Cubic polynomial bases in power form.

use crate::{DMat4, DVec3, DVec4};

/// A cubic basis as a 4×4 matrix.
///
/// Column `k` holds the coefficient of `t^k` for each of the four control
/// points, so `matrix * (1, t, t², t³)` gives the control point weights at `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBasis {
    matrix: DMat4,
}

impl CubicBasis {
    pub const BEZIER: Self = Self::from_cols([
        [1.0, 0.0, 0.0, 0.0],
        [-3.0, 3.0, 0.0, 0.0],
        [3.0, -6.0, 3.0, 0.0],
        [-1.0, 3.0, -3.0, 1.0],
    ]);

    pub const BSPLINE: Self = Self::from_cols([
        [1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0],
        [-3.0 / 6.0, 0.0, 3.0 / 6.0, 0.0],
        [3.0 / 6.0, -6.0 / 6.0, 3.0 / 6.0, 0.0],
        [-1.0 / 6.0, 3.0 / 6.0, -3.0 / 6.0, 1.0 / 6.0],
    ]);

    /// Catmull-Rom with tension 1/2; interpolates the middle two points.
    pub const CATMULL_ROM: Self = Self::from_cols([
        [0.0, 1.0, 0.0, 0.0],
        [-0.5, 0.0, 0.5, 0.0],
        [1.0, -2.5, 2.0, -0.5],
        [-0.5, 1.5, -1.5, 0.5],
    ]);

    const fn from_cols(cols: [[f64; 4]; 4]) -> Self {
        Self {
            matrix: DMat4::from_cols(
                DVec4::new(cols[0][0], cols[0][1], cols[0][2], cols[0][3]),
                DVec4::new(cols[1][0], cols[1][1], cols[1][2], cols[1][3]),
                DVec4::new(cols[2][0], cols[2][1], cols[2][2], cols[2][3]),
                DVec4::new(cols[3][0], cols[3][1], cols[3][2], cols[3][3]),
            ),
        }
    }

    /// Control point weights at `t`.
    pub fn weights(&self, t: f64) -> DVec4 {
        self.matrix * power(t)
    }

    /// Weights of the first derivative at `t`.
    pub fn derivative_weights(&self, t: f64) -> DVec4 {
        self.matrix * power_derivative(t)
    }

    pub fn point(&self, geometry: &[DVec3; 4], t: f64) -> DVec3 {
        combine(geometry, self.weights(t))
    }

    pub fn tangent(&self, geometry: &[DVec3; 4], t: f64) -> DVec3 {
        combine(geometry, self.derivative_weights(t))
    }

    /// Re-express a segment given in this basis as control points of `target`.
    ///
    /// Solves `G' · M_target = G · M_self`, i.e. `G' = G · M_self · M_target⁻¹`.
    pub fn convert_to(&self, target: &CubicBasis, geometry: &[DVec3; 4]) -> [DVec3; 4] {
        let conversion = self.matrix * target.matrix.inverse();
        let col = |j: usize| combine(geometry, conversion.col(j));
        [col(0), col(1), col(2), col(3)]
    }
}

/// Power vector `(1, t, t², t³)`.
pub fn power(t: f64) -> DVec4 {
    DVec4::new(1.0, t, t * t, t * t * t)
}

/// Derivative of the power vector, `(0, 1, 2t, 3t²)`.
pub fn power_derivative(t: f64) -> DVec4 {
    DVec4::new(0.0, 1.0, 2.0 * t, 3.0 * t * t)
}

fn combine(geometry: &[DVec3; 4], w: DVec4) -> DVec3 {
    geometry[0] * w.x + geometry[1] * w.y + geometry[2] * w.z + geometry[3] * w.w
}
