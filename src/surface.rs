//! Render surface abstraction and a GPU-uniform packing implementation.

use crate::camera::{Camera, CameraUniform};
use crate::scene::{ObjectTransform, SceneDescription};

/// Output collaborator of the [`SceneComposer`](crate::composer::SceneComposer).
///
/// A surface receives the scene description once when mounted, then whole
/// camera and object updates once per frame. Implementations must not
/// assume updates arrive at any particular rate.
pub trait RenderSurface {
    /// Create render objects for the scene.
    fn build(&mut self, scene: &SceneDescription);

    /// Replace the camera state.
    fn apply_camera(&mut self, camera: &Camera);

    /// Replace the core mesh transform.
    fn apply_object(&mut self, transform: &ObjectTransform);
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform for the core mesh.
pub struct ObjectUniform {
    /// Model matrix.
    pub model: [[f32; 4]; 4],
}

impl Default for ObjectUniform {
    fn default() -> Self {
        Self {
            model: glam::Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

/// Surface that packs each update into `Pod` uniforms for GPU upload.
///
/// Hosts drive their own pipeline: after each frame they copy
/// [`camera_bytes`](Self::camera_bytes) and
/// [`object_bytes`](Self::object_bytes) into uniform buffers. `revision`
/// increments on every change so hosts can skip redundant uploads.
#[derive(Debug, Default)]
pub struct UniformSurface {
    camera: CameraUniform,
    object: ObjectUniform,
    scene: Option<SceneDescription>,
    revision: u64,
}

impl UniformSurface {
    /// Empty surface with identity uniforms.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Packed camera uniform.
    #[must_use]
    pub fn camera_uniform(&self) -> &CameraUniform {
        &self.camera
    }

    /// Packed camera uniform as bytes.
    #[must_use]
    pub fn camera_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.camera)
    }

    /// Packed object uniform as bytes.
    #[must_use]
    pub fn object_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.object)
    }

    /// The scene built on mount, if any.
    #[must_use]
    pub fn scene(&self) -> Option<&SceneDescription> {
        self.scene.as_ref()
    }

    /// Number of updates received.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl RenderSurface for UniformSurface {
    fn build(&mut self, scene: &SceneDescription) {
        self.scene = Some(scene.clone());
        self.revision += 1;
    }

    fn apply_camera(&mut self, camera: &Camera) {
        self.camera.update_view_proj(camera);
        self.revision += 1;
    }

    fn apply_object(&mut self, transform: &ObjectTransform) {
        self.object.model = transform.model_matrix().to_cols_array_2d();
        self.revision += 1;
    }
}
