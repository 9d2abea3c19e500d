use serde::{Deserialize, Serialize};
use sweep_core::traits::{BoundingBox, Validate};
use sweep_core::{Result, SweepError, Tolerance};
use sweep_math::aabb::Aabb3;
use sweep_math::{Point3, Vector3};

/// Triangle mesh produced by a surface generator, one normal per vertex.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub faces: Vec<[u32; 3]>,
}

impl Surface {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Unnormalized geometric normal of face `i` from its winding.
    pub fn face_normal(&self, i: usize) -> Vector3 {
        let [a, b, c] = self.faces[i].map(|v| self.positions[v as usize]);
        (b - a).cross(c - a)
    }

    /// Flatten rings of `(position, normal)` pairs, ring by ring, into one mesh.
    pub(crate) fn from_rings(rings: Vec<Vec<(Point3, Vector3)>>, faces: Vec<[u32; 3]>) -> Self {
        let (positions, normals) = rings.into_iter().flatten().unzip();
        Self {
            positions,
            normals,
            faces,
        }
    }
}

/// Ring count and ring length as `u32`, provided every vertex of the grid
/// can be addressed by a `u32` face index.
pub(crate) fn grid_size(rings: usize, ring_len: usize) -> Result<(u32, u32)> {
    let too_large = || {
        SweepError::InvalidParameter(format!(
            "{rings} rings of {ring_len} vertices exceed the u32 index range"
        ))
    };
    let r = u32::try_from(rings).map_err(|_| too_large())?;
    let k = u32::try_from(ring_len).map_err(|_| too_large())?;
    r.checked_mul(k).ok_or_else(too_large)?;
    Ok((r, k))
}

/// Two triangles joining vertex `j` of ring `ring` to ring `next`.
///
/// `a = (ring, j)`, `b = (ring, j+1)`, `c = (next, j)`, `d = (next, j+1)`.
/// With `flip` unset the quad is wound `a c b` / `b c d`, otherwise `a b c` /
/// `b d c`. Indices stay in range for grids accepted by [`grid_size`].
pub(crate) fn quad(ring_len: u32, ring: u32, next: u32, j: u32, flip: bool) -> [[u32; 3]; 2] {
    let a = ring * ring_len + j;
    let b = a + 1;
    let c = next * ring_len + j;
    let d = c + 1;
    if flip {
        [[a, b, c], [b, d, c]]
    } else {
        [[a, c, b], [b, c, d]]
    }
}

impl Validate for Surface {
    fn validate(&self, tol: Tolerance) -> Result<()> {
        if self.normals.len() != self.positions.len() {
            return Err(SweepError::Invalid(format!(
                "{} normals for {} vertices",
                self.normals.len(),
                self.positions.len()
            )));
        }
        let n = self.positions.len() as u32;
        if let Some(face) = self.faces.iter().find(|f| f.iter().any(|&v| v >= n)) {
            return Err(SweepError::Invalid(format!(
                "face {face:?} indexes past {n} vertices"
            )));
        }
        if let Some(i) = self.normals.iter().position(|v| !tol.frame_unit(v.length())) {
            return Err(SweepError::Invalid(format!("normal {i} is not unit length")));
        }
        Ok(())
    }
}

impl BoundingBox for Surface {
    type Bounds = Aabb3;

    fn bounding_box(&self) -> Option<Aabb3> {
        Aabb3::from_points(self.positions.iter().copied())
    }
}
