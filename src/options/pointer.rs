use std::f32::consts::{FRAC_PI_3, PI};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::PolarLimits;

/// Rotate-only pointer orbit. Pan and zoom are never offered because the
/// page scroll owns the camera distance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pointer", inline)]
#[serde(default)]
pub struct PointerOptions {
    /// Whether dragging orbits the camera.
    #[schemars(title = "Orbit")]
    pub orbit_enabled: bool,
    /// Radians of rotation per dragged pixel.
    #[schemars(title = "Rotate Speed", range(min = 0.0005, max = 0.02), extend("step" = 0.0005))]
    pub rotate_speed: f32,
    /// Smallest polar angle from +Y, in radians.
    #[schemars(skip)]
    pub min_polar: f32,
    /// Largest polar angle from +Y, in radians.
    #[schemars(skip)]
    pub max_polar: f32,
}

impl PointerOptions {
    /// Polar clamp for the orbit.
    #[must_use]
    pub fn limits(&self) -> PolarLimits {
        PolarLimits {
            min: self.min_polar.min(self.max_polar),
            max: self.max_polar.max(self.min_polar),
        }
    }
}

impl Default for PointerOptions {
    fn default() -> Self {
        Self {
            orbit_enabled: true,
            rotate_speed: 0.005,
            min_polar: FRAC_PI_3,
            max_polar: PI / 1.5,
        }
    }
}
