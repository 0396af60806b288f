use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Idle motion of the core mesh, layered on top of the scroll rotation.
///
/// Both terms are functions of elapsed scene time, so a dropped frame never
/// changes where the mesh ends up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
pub struct MotionOptions {
    /// Peak vertical bob distance.
    #[schemars(title = "Bob Height", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub bob_amplitude: f32,
    /// Bob angular frequency in radians per second.
    #[schemars(title = "Bob Speed", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub bob_frequency: f32,
    /// Continuous spin in radians per second.
    #[schemars(title = "Spin", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub spin_rate: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            bob_amplitude: 0.1,
            bob_frequency: 0.5,
            spin_rate: 0.12,
        }
    }
}
