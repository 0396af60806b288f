//! Centralized scene options with TOML preset support.
//!
//! All tweakable settings (camera, scroll timeline, idle motion, pointer
//! orbit, particles, lighting) are consolidated here. Options serialize
//! to/from TOML for presets stored in `presets/`.

mod camera;
mod lighting;
mod motion;
mod particles;
mod pointer;
mod timeline;

use std::path::Path;

pub use camera::CameraOptions;
pub use lighting::LightingOptions;
pub use motion::MotionOptions;
pub use particles::ParticleOptions;
pub use pointer::PointerOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use timeline::{PoseOptions, StageOptions, TimelineOptions};

use crate::error::SceneError;
use crate::timeline::ScrollTimeline;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[motion]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Scroll-driven camera choreography.
    #[schemars(skip)]
    pub timeline: TimelineOptions,
    /// Idle motion of the core mesh.
    pub motion: MotionOptions,
    /// Pointer orbit behavior.
    pub pointer: PointerOptions,
    /// Particle ring layout.
    pub particles: ParticleOptions,
    /// Lights and colors.
    pub lighting: LightingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path).map_err(SceneError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, SceneError> {
        toml::from_str(content)
            .map_err(|e| SceneError::OptionsParse(e.to_string()))
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String, SceneError> {
        toml::to_string_pretty(self)
            .map_err(|e| SceneError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SceneError::Io)?;
        }
        std::fs::write(path, content).map_err(SceneError::Io)
    }

    /// Validate and build the scroll timeline.
    pub fn build_timeline(&self) -> Result<ScrollTimeline, SceneError> {
        Ok(self.timeline.build()?)
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
