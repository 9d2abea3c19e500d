//! Record dispatch: evaluates each record and commits it to the [`Scene`].

use std::io::Read;
use std::path::Path;

use sweep_core::traits::Validate;
use sweep_core::{Result, SweepError};
use sweep_geometry::{eval_circle, ControlPoints, Curve, Dimension, SplineKind};
use sweep_mesh::{make_gen_cyl, make_surf_rev};

use crate::config::SceneConfig;
use crate::record::{RecordBody, RecordHeader, RecordKind, RecordReader};
use crate::registry::{CurveId, SurfaceId};
use crate::scene::Scene;

/// Builds a [`Scene`] one record at a time, in declaration order.
///
/// The first failing record stops reading. Everything committed before it
/// stays in the scene; nothing of the failing record is stored.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    config: SceneConfig,
    scene: Scene,
    objects: usize,
}

impl SceneBuilder {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            scene: Scene::new(),
            objects: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn finish(self) -> Scene {
        self.scene
    }

    pub fn read_path(&mut self, path: &Path) -> Result<()> {
        log::info!("reading scene {}", path.display());
        let text = std::fs::read_to_string(path)?;
        self.read_str(&text)
    }

    pub fn read_from<R: Read>(&mut self, mut input: R) -> Result<()> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        self.read_str(&text)
    }

    /// Read and commit every record in `input`.
    pub fn read_str(&mut self, input: &str) -> Result<()> {
        let mut reader = RecordReader::new(input);
        while let Some(header) = reader.next_header().map_err(|err| {
            log::error!("failed: {err}");
            err
        })? {
            let index = self.objects;
            self.objects += 1;
            log::info!(">object {index}");
            self.read_record(&mut reader, header).map_err(|err| {
                log::error!(
                    "failed: object {index} [{}] on line {}: {err}",
                    header.name,
                    header.line
                );
                err
            })?;
        }
        Ok(())
    }

    fn read_record(
        &mut self,
        reader: &mut RecordReader<'_>,
        header: RecordHeader<'_>,
    ) -> Result<()> {
        let RecordHeader { tag, name, .. } = header;
        log::info!(" reading {tag} [{name}]");
        self.scene.registry().ensure_available(name)?;

        match reader.read_body(RecordKind::from_tag(tag)?)? {
            RecordBody::Spline {
                kind,
                steps,
                control_points,
            } => {
                self.add_spline(name, kind, control_points, steps)?;
            }
            RecordBody::Circle { steps, radius } => {
                log::info!("  radius [{radius}]");
                self.add_circle(name, steps, radius)?;
            }
            RecordBody::Revolution { steps, profile } => {
                log::info!("  profile [{profile}]");
                self.add_revolution(name, steps, &profile)?;
            }
            RecordBody::Cylinder { profile, sweep } => {
                log::info!("  profile [{profile}], sweep [{sweep}]");
                self.add_gen_cylinder(name, &profile, &sweep)?;
            }
        }
        Ok(())
    }

    pub fn add_spline(
        &mut self,
        name: &str,
        kind: SplineKind,
        control_points: ControlPoints,
        steps: u32,
    ) -> Result<CurveId> {
        self.scene.registry().ensure_available(name)?;
        let curve = kind.evaluate(&control_points, steps, self.config.tolerance)?;
        self.commit_curve(name, control_points, curve)
    }

    pub fn add_circle(&mut self, name: &str, steps: u32, radius: f64) -> Result<CurveId> {
        self.scene.registry().ensure_available(name)?;
        let curve = eval_circle(radius, steps)?;
        self.commit_curve(name, ControlPoints::empty(Dimension::Two), curve)
    }

    pub fn add_revolution(&mut self, name: &str, steps: u32, profile: &str) -> Result<SurfaceId> {
        self.scene.registry().ensure_available(name)?;
        let surface = make_surf_rev(self.profile(profile)?, steps)?;
        log::debug!("  {} vertices, {} faces", surface.vertex_count(), surface.face_count());
        self.scene.add_surface(name, surface)
    }

    pub fn add_gen_cylinder(
        &mut self,
        name: &str,
        profile: &str,
        sweep: &str,
    ) -> Result<SurfaceId> {
        self.scene.registry().ensure_available(name)?;
        let profile = self.profile(profile)?;
        let sweep = self
            .scene
            .curve(sweep)
            .ok_or_else(|| SweepError::MissingReference(sweep.to_string()))?;
        let surface = make_gen_cyl(profile, &sweep.curve)?;
        log::debug!("  {} vertices, {} faces", surface.vertex_count(), surface.face_count());
        self.scene.add_surface(name, surface)
    }

    /// Resolve a named curve that must be planar.
    fn profile(&self, name: &str) -> Result<&Curve> {
        let entry = self
            .scene
            .curve(name)
            .ok_or_else(|| SweepError::MissingReference(name.to_string()))?;
        if entry.curve.dimension() != Dimension::Two {
            return Err(SweepError::WrongDimension {
                name: name.to_string(),
                found: entry.curve.dimension().as_u8(),
            });
        }
        Ok(&entry.curve)
    }

    fn commit_curve(
        &mut self,
        name: &str,
        control_points: ControlPoints,
        curve: Curve,
    ) -> Result<CurveId> {
        if self.config.validate_curves {
            curve.validate(self.config.tolerance)?;
        }
        log::debug!("  {} frames", curve.len());
        self.scene.add_curve(name, control_points, curve)
    }
}

/// Build a scene from text, discarding the partial scene on failure.
pub fn parse_scene(input: &str) -> Result<Scene> {
    let mut builder = SceneBuilder::default();
    builder.read_str(input)?;
    Ok(builder.finish())
}
