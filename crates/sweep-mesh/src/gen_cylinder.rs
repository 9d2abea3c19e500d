//! Generalized cylinders: a planar profile swept along a curve.

use rayon::prelude::*;
use sweep_core::{Result, SweepError};
use sweep_geometry::{Curve, Dimension};
use sweep_math::Transform;

use crate::surface::{grid_size, quad, Surface};

/// Sweep a 2D profile along `sweep`.
///
/// At every sweep frame the profile's x and y axes are mapped onto the
/// frame's normal and binormal, and its origin onto the frame position. Rings
/// are joined only to their successor, so the tube is open at both ends.
pub fn make_gen_cyl(profile: &Curve, sweep: &Curve) -> Result<Surface> {
    if profile.dimension() != Dimension::Two {
        return Err(SweepError::WrongDimension {
            name: "profile".into(),
            found: profile.dimension().as_u8(),
        });
    }

    let (m, k) = grid_size(sweep.len(), profile.len())?;
    log::debug!("generalized cylinder: {k} profile frames, {m} sweep frames");

    let rings: Vec<_> = sweep
        .frames()
        .par_iter()
        .map(|s| {
            let frame = Transform::from_frame(s.normal, s.binormal, s.tangent, s.position);
            profile
                .frames()
                .iter()
                .map(|f| {
                    (
                        frame.transform_point(f.position),
                        -frame.transform_vector(f.normal),
                    )
                })
                .collect::<Vec<_>>()
        })
        .collect();

    let faces = (0..m.saturating_sub(1))
        .flat_map(|i| (0..k.saturating_sub(1)).flat_map(move |j| quad(k, i, i + 1, j, true)))
        .collect();

    Ok(Surface::from_rings(rings, faces))
}
