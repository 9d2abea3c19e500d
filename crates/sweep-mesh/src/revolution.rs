//! Surfaces of revolution.

use std::f64::consts::TAU;

use rayon::prelude::*;
use sweep_core::{Result, SweepError, Tolerance};
use sweep_geometry::{Curve, Dimension};
use sweep_math::{normalize_or_fail, Transform, Vector3};

use crate::surface::{grid_size, quad, Surface};

/// Revolve a 2D profile about the +Y axis.
pub fn make_surf_rev(profile: &Curve, steps: u32) -> Result<Surface> {
    revolve(profile, steps, Vector3::Y)
}

/// Revolve a 2D profile about `axis` (through the origin) in `steps` equal angles.
///
/// Ring `i` is the profile rotated by `2πi / steps`; the last ring is joined
/// back to the first, so the mesh holds `profile.len() * steps` vertices and
/// no duplicated seam. Vertex normals are the rotated profile normals
/// reversed, which points them away from the axis for a profile traced in
/// the `+Y` direction on the `+X` side.
pub fn revolve(profile: &Curve, steps: u32, axis: Vector3) -> Result<Surface> {
    if profile.dimension() != Dimension::Two {
        return Err(SweepError::WrongDimension {
            name: "profile".into(),
            found: profile.dimension().as_u8(),
        });
    }
    if steps < 2 {
        return Err(SweepError::InvalidParameter(format!(
            "surface of revolution needs at least 2 steps, got {steps}"
        )));
    }
    let axis = normalize_or_fail(axis, Tolerance::default(), "revolution axis")?;

    let (steps, k) = grid_size(steps as usize, profile.len())?;
    log::debug!("revolution: {k} profile frames, {steps} steps");

    let rings: Vec<_> = (0..steps)
        .into_par_iter()
        .map(|i| {
            let rotation = Transform::from_axis_angle(axis, TAU * f64::from(i) / f64::from(steps));
            profile
                .frames()
                .iter()
                .map(|f| {
                    (
                        rotation.transform_point(f.position),
                        -rotation.transform_vector(f.normal),
                    )
                })
                .collect::<Vec<_>>()
        })
        .collect();

    let faces = (0..steps)
        .flat_map(|i| {
            let next = (i + 1) % steps;
            (0..k.saturating_sub(1)).flat_map(move |j| quad(k, i, next, j, false))
        })
        .collect();

    Ok(Surface::from_rings(rings, faces))
}
