//! Description of the decorative background scene.
//!
//! The scene is static apart from the core mesh transform: a wireframe
//! octahedron (the "cyber plant") at the origin, a ring of glowing
//! particle nodes around it, and three lights. Hosts build their render
//! objects from a [`SceneDescription`] once, then receive per-frame
//! camera and [`ObjectTransform`] updates.

pub mod layout;

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

pub use layout::particle_ring;

use crate::options::Options;

/// Linear RGB color.
pub type Color = [f32; 3];

/// Surface material of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base color.
    pub color: Color,
    /// Emissive color.
    pub emissive: Color,
    /// Emissive multiplier.
    pub emissive_intensity: f32,
    /// Draw edges only.
    pub wireframe: bool,
}

/// The animated centerpiece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreMesh {
    /// Circumradius of the octahedron.
    pub radius: f32,
    /// Material of the mesh.
    pub material: Material,
}

/// One decorative particle node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// World-space position.
    pub position: Vec3,
    /// Uniform scale of the unit sphere.
    pub scale: f32,
}

/// Scene lights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Light {
    /// Uniform fill light.
    Ambient {
        /// Light color.
        color: Color,
        /// Intensity multiplier.
        intensity: f32,
    },
    /// Cone light aimed at the origin.
    Spot {
        /// World-space position.
        position: Vec3,
        /// Half-angle of the cone in radians.
        angle: f32,
        /// Edge softness, 0 (hard) to 1 (soft).
        penumbra: f32,
        /// Light color.
        color: Color,
        /// Intensity multiplier.
        intensity: f32,
    },
    /// Omnidirectional light.
    Point {
        /// World-space position.
        position: Vec3,
        /// Light color.
        color: Color,
        /// Intensity multiplier.
        intensity: f32,
    },
}

/// Everything a host needs to build the scene's render objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// The centerpiece mesh.
    pub core: CoreMesh,
    /// Particle nodes around the core.
    pub particles: Vec<Particle>,
    /// Material shared by all particles.
    pub particle_material: Material,
    /// Lights in the scene.
    pub lights: Vec<Light>,
    /// Clear color behind the scene.
    pub background: Color,
}

impl SceneDescription {
    /// Build the scene from options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let lighting = &options.lighting;
        let particles = &options.particles;
        Self {
            core: CoreMesh {
                radius: 1.0,
                material: Material {
                    color: lighting.accent,
                    emissive: lighting.accent,
                    emissive_intensity: 0.5,
                    wireframe: true,
                },
            },
            particles: particle_ring(particles),
            particle_material: Material {
                color: particles.color,
                emissive: particles.color,
                emissive_intensity: 1.0,
                wireframe: false,
            },
            lights: vec![
                Light::Ambient {
                    color: lighting.accent,
                    intensity: lighting.ambient,
                },
                Light::Spot {
                    position: Vec3::from_array(lighting.spot_position),
                    angle: lighting.spot_angle,
                    penumbra: lighting.spot_penumbra,
                    color: lighting.accent,
                    intensity: lighting.spot_intensity,
                },
                Light::Point {
                    position: Vec3::from_array(lighting.point_position),
                    color: particles.color,
                    intensity: lighting.point_intensity,
                },
            ],
            background: lighting.background,
        }
    }
}

/// Per-frame transform of the core mesh.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectTransform {
    /// Rotation about the Y axis in radians.
    pub yaw: f32,
    /// Vertical offset from the origin.
    pub height: f32,
}

impl ObjectTransform {
    /// Model matrix for the mesh.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            Quat::from_rotation_y(self.yaw),
            Vec3::new(0.0, self.height, 0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_matches_site_look() {
        let scene = SceneDescription::from_options(&Options::default());
        assert!(scene.core.material.wireframe);
        assert_eq!(scene.particles.len(), 20);
        assert_eq!(scene.lights.len(), 3);
        assert!(matches!(scene.lights[0], Light::Ambient { intensity, .. } if intensity == 0.2));
    }

    #[test]
    fn model_matrix_rotates_and_lifts() {
        let t = ObjectTransform {
            yaw: std::f32::consts::FRAC_PI_2,
            height: 0.1,
        };
        let p = t.model_matrix().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.1, -1.0), 1e-5));
    }
}
