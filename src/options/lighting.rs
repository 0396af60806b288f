use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Scene lights and accent colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
pub struct LightingOptions {
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient: f32,
    /// Spot light intensity.
    #[schemars(title = "Key Light", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub spot_intensity: f32,
    /// Point light intensity.
    #[schemars(title = "Fill Light", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub point_intensity: f32,
    /// Spot light position.
    #[schemars(skip)]
    pub spot_position: [f32; 3],
    /// Spot cone half-angle in radians.
    #[schemars(skip)]
    pub spot_angle: f32,
    /// Spot edge softness.
    #[schemars(skip)]
    pub spot_penumbra: f32,
    /// Point light position.
    #[schemars(skip)]
    pub point_position: [f32; 3],
    /// Accent color for the core mesh, ambient and spot light.
    #[schemars(skip)]
    pub accent: [f32; 3],
    /// Clear color.
    #[schemars(skip)]
    pub background: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient: 0.2,
            spot_intensity: 1.0,
            point_intensity: 1.0,
            spot_position: [10.0, 10.0, 10.0],
            spot_angle: 0.15,
            spot_penumbra: 1.0,
            point_position: [-10.0, -10.0, -10.0],
            accent: [0.0, 1.0, 0.616],
            background: [0.02, 0.02, 0.03],
        }
    }
}
