//! Centralized camera configuration with TOML preset support.
//!
//! Sensitivity multipliers and control bindings are consolidated here.
//! Options serialize to/from TOML so hosts can ship control presets;
//! partial files fill in defaults via `#[serde(default)]`.

mod bindings;
mod controls;

use std::path::Path;

pub use bindings::BindingOptions;
pub use controls::ControlOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PancamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera control sensitivity multipliers.
    pub controls: ControlOptions,
    /// Button/key bindings for camera gestures.
    #[schemars(skip)]
    pub bindings: BindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PancamError> {
        let content = std::fs::read_to_string(path).map_err(PancamError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| PancamError::Parse(e.to_string()))?;
        log::info!("Loaded control preset from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PancamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PancamError::Parse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PancamError::Io)?;
        }
        std::fs::write(path, content).map_err(PancamError::Io)?;
        log::info!("Saved control preset to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
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
