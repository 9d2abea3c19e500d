//! Evaluated scene: curve and surface arenas plus the name registry.

use serde::Serialize;
use slotmap::SlotMap;
use sweep_core::traits::BoundingBox;
use sweep_core::Result;
use sweep_geometry::{ControlPoints, Curve};
use sweep_math::Aabb3;
use sweep_mesh::Surface;

use crate::registry::{CurveId, Handle, Registry, SurfaceId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneCurve {
    pub name: String,
    /// Points the curve was evaluated from; empty for circles.
    pub control_points: ControlPoints,
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSurface {
    pub name: String,
    pub surface: Surface,
}

/// Curves and surfaces in declaration order.
///
/// Objects are never removed, so slot order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    curves: SlotMap<CurveId, SceneCurve>,
    surfaces: SlotMap<SurfaceId, SceneSurface>,
    registry: Registry,
}

#[derive(Serialize)]
struct SceneExport<'a> {
    curves: Vec<&'a SceneCurve>,
    surfaces: Vec<&'a SceneSurface>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn curves(&self) -> impl Iterator<Item = &SceneCurve> {
        self.curves.values()
    }

    pub fn surfaces(&self) -> impl Iterator<Item = &SceneSurface> {
        self.surfaces.values()
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn curve_names(&self) -> Vec<&str> {
        self.curves().map(|c| c.name.as_str()).collect()
    }

    pub fn surface_names(&self) -> Vec<&str> {
        self.surfaces().map(|s| s.name.as_str()).collect()
    }

    pub fn curve_by_id(&self, id: CurveId) -> Option<&SceneCurve> {
        self.curves.get(id)
    }

    pub fn surface_by_id(&self, id: SurfaceId) -> Option<&SceneSurface> {
        self.surfaces.get(id)
    }

    /// Look up a named curve. Anonymous curves cannot be found by name.
    pub fn curve(&self, name: &str) -> Option<&SceneCurve> {
        self.registry.curve(name).ok().and_then(|id| self.curves.get(id))
    }

    pub fn surface(&self, name: &str) -> Option<&SceneSurface> {
        self.registry.surface(name).ok().and_then(|id| self.surfaces.get(id))
    }

    /// Store a fully evaluated curve under `name`.
    pub(crate) fn add_curve(
        &mut self,
        name: &str,
        control_points: ControlPoints,
        curve: Curve,
    ) -> Result<CurveId> {
        self.registry.ensure_available(name)?;
        let id = self.curves.insert(SceneCurve {
            name: name.to_string(),
            control_points,
            curve,
        });
        self.registry.insert(name, Handle::Curve(id))?;
        Ok(id)
    }

    pub(crate) fn add_surface(&mut self, name: &str, surface: Surface) -> Result<SurfaceId> {
        self.registry.ensure_available(name)?;
        let id = self.surfaces.insert(SceneSurface {
            name: name.to_string(),
            surface,
        });
        self.registry.insert(name, Handle::Surface(id))?;
        Ok(id)
    }

    /// Serialize curves and surfaces, in declaration order, as JSON.
    pub fn to_json(&self) -> Result<String> {
        let export = SceneExport {
            curves: self.curves().collect(),
            surfaces: self.surfaces().collect(),
        };
        Ok(serde_json::to_string(&export)?)
    }
}

impl BoundingBox for Scene {
    type Bounds = Aabb3;

    fn bounding_box(&self) -> Option<Aabb3> {
        let curves = self.curves().filter_map(|c| c.curve.bounding_box());
        let surfaces = self.surfaces().filter_map(|s| s.surface.bounding_box());
        curves.chain(surfaces).reduce(|a, b| a.merge(&b))
    }
}
