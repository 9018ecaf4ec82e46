//! Portable camera pose record and pose-file persistence.
//!
//! `CameraProperties` is the only representation that crosses the camera
//! boundary: save/load, pose interpolation, and hand-off between camera
//! variants all go through it. It stores the *absolute* eye position — not
//! the focus/distance decomposition — so any rig can reproduce the exact
//! viewpoint. Angles are radians, same unit as internal camera state.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::PancamError;

/// A portable camera pose: absolute position, orientation, and optics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraProperties {
    /// Eye position in world space.
    pub position: Vec3,
    /// Rotation about world up, radians.
    pub yaw: f32,
    /// Elevation, radians.
    pub pitch: f32,
    /// Vertical field of view, radians.
    pub fov: f32,
    /// Display gamma.
    pub gamma: f32,
    /// Near clipping plane distance.
    pub near: f32,
}

impl Default for CameraProperties {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov: 90f32.to_radians(),
            gamma: 2.2,
            near: 0.01,
        }
    }
}

impl CameraProperties {
    /// Load a pose from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PancamError> {
        let content = std::fs::read_to_string(path).map_err(PancamError::Io)?;
        let props = toml::from_str(&content)
            .map_err(|e| PancamError::Parse(e.to_string()))?;
        log::info!("Loaded camera pose from {}", path.display());
        Ok(props)
    }

    /// Save the pose to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PancamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PancamError::Parse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PancamError::Io)?;
        }
        std::fs::write(path, content).map_err(PancamError::Io)?;
        log::info!("Saved camera pose to {}", path.display());
        Ok(())
    }

    /// List saved pose names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_poses(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
