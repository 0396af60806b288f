use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Decorative particle ring around the core mesh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Particles", inline)]
#[serde(default)]
pub struct ParticleOptions {
    /// Number of particles, spaced evenly by angle.
    #[schemars(title = "Count", range(min = 0, max = 200))]
    pub count: u32,
    /// Minimum distance from the Y axis.
    #[schemars(title = "Radius", range(min = 0.5, max = 6.0), extend("step" = 0.1))]
    pub base_radius: f32,
    /// Random extra radius, uniform in [0, jitter).
    #[schemars(title = "Radius Jitter", range(min = 0.0, max = 3.0), extend("step" = 0.1))]
    pub radius_jitter: f32,
    /// Total vertical spread, centered on the origin.
    #[schemars(title = "Height Spread", range(min = 0.0, max = 8.0), extend("step" = 0.1))]
    pub height_span: f32,
    /// Sphere scale.
    #[schemars(skip)]
    pub scale: f32,
    /// Particle color (linear RGB).
    #[schemars(skip)]
    pub color: [f32; 3],
    /// RNG seed for the jitter.
    #[schemars(skip)]
    pub seed: u64,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 20,
            base_radius: 2.0,
            radius_jitter: 1.0,
            height_span: 4.0,
            scale: 0.05,
            color: [1.0, 0.722, 0.0],
            seed: 0x4b52_4953,
        }
    }
}
