use glam::{Mat4, Vec3};

use crate::timeline::CameraPose;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Camera {
    /// Camera placed at `pose` with the given projection.
    #[must_use]
    pub fn new(pose: CameraPose, aspect: f32, fovy: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye: pose.position,
            target: pose.look_at,
            up: Vec3::Y,
            aspect,
            fovy,
            znear,
            zfar,
        }
    }

    /// Replace eye and target in one assignment.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.eye = pose.position;
        self.target = pose.look_at;
    }

    /// Current eye and target.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.eye, self.target)
    }

    /// Build the view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the projection matrix ([0,1] depth range).
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Unit vector from eye toward target. Falls back to -Z when the eye
    /// sits on the target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).try_normalize().unwrap_or(Vec3::NEG_Z)
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 50.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.forward().to_array();
        self.fovy = camera.fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(
            CameraPose::new(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO),
            1.6,
            50.0,
            0.1,
            100.0,
        )
    }

    #[test]
    fn target_projects_to_screen_center() {
        let cam = camera();
        let clip = cam.build_matrix() * cam.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn set_pose_replaces_eye_and_target() {
        let mut cam = camera();
        let pose = CameraPose::new(Vec3::new(4.0, 0.5, -1.0), Vec3::Y);
        cam.set_pose(pose);
        assert_eq!(cam.pose(), pose);
    }

    #[test]
    fn degenerate_forward_falls_back() {
        let mut cam = camera();
        cam.set_pose(CameraPose::new(Vec3::ONE, Vec3::ONE));
        assert_eq!(cam.forward(), Vec3::NEG_Z);
    }

    #[test]
    fn uniform_tracks_camera() {
        let cam = camera();
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&cam);
        assert_eq!(uniform.position, [0.0, 2.0, 5.0]);
        assert_eq!(uniform.fovy, 50.0);
        let fwd = Vec3::from_array(uniform.forward);
        assert!((fwd.length() - 1.0).abs() < 1e-5);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 96);
    }
}
