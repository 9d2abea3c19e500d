//! SweepKit math primitives.

pub mod aabb;
pub mod basis;
pub mod transform;
pub mod vector;

pub use glam::{dvec3, DMat3, DMat4, DVec2, DVec3, DVec4};
pub use aabb::Aabb3;
pub use basis::CubicBasis;
pub use transform::Transform;
pub use vector::normalize_or_fail;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
