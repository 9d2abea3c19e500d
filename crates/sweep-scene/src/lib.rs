//! SweepKit scene builder: reads scene records, evaluates curves and
//! surfaces, and keeps them under unique names.

pub mod builder;
pub mod config;
pub mod record;
pub mod registry;
pub mod scanner;
pub mod scene;

pub use builder::{parse_scene, SceneBuilder};
pub use config::SceneConfig;
pub use registry::{CurveId, Handle, Registry, SurfaceId, ANONYMOUS};
pub use scene::{Scene, SceneCurve, SceneSurface};
