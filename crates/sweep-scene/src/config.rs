use std::path::Path;

use serde::{Deserialize, Serialize};
use sweep_core::{Result, Tolerance};

/// Settings applied while building a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub tolerance: Tolerance,
    /// Check every evaluated curve for orthonormal frames before storing it.
    pub validate_curves: bool,
}

impl SceneConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            validate_curves: false,
        }
    }
}
