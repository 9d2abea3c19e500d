use crate::{DMat3, DMat4, Point3, Vector3};

/// Rigid body transform (rotation + translation, no shear/scale).
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    /// Rotation by `angle` radians about the unit vector `axis` through the origin.
    pub fn from_axis_angle(axis: Vector3, angle: f64) -> Self {
        Self::from_mat4(DMat4::from_mat3(DMat3::from_axis_angle(axis, angle)))
    }

    /// Map local x, y, z onto the given axes and translate to `origin`.
    ///
    /// The axes are expected to be orthonormal and right-handed.
    pub fn from_frame(x_axis: Vector3, y_axis: Vector3, z_axis: Vector3, origin: Point3) -> Self {
        Self::from_mat4(DMat4::from_cols(
            x_axis.extend(0.0),
            y_axis.extend(0.0),
            z_axis.extend(0.0),
            origin.extend(1.0),
        ))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    /// Rotate a direction. Rigid transforms need no inverse-transpose for normals.
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.to_mat4().transform_vector3(v)
    }
}
