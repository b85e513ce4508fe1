//! Shader-constant payloads handed to the renderer.
//!
//! Both structs are `#[repr(C)]` and `Pod`, so a backend can upload them
//! with `bytemuck::bytes_of` without any conversion step.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use crate::camera::Camera;
use crate::math::Transform;

/// Per-frame constants (camera data)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameConstants {
    pub view: Mat4,
    pub projection: Mat4,
    pub camera_position: Vec3,
    pub _padding: f32,
}

impl FrameConstants {
    /// Snapshot of the camera's cached view, projection and position.
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view: camera.view(),
            projection: camera.projection(),
            camera_position: camera.position(),
            _padding: 0.0,
        }
    }

    /// Raw bytes for a constant-buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Per-object constants (one entity's matrices and tint)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ObjectConstants {
    pub world: Mat4,
    pub world_inverse_transpose: Mat4,
    pub color_tint: Vec4,
}

impl ObjectConstants {
    /// Snapshot of the transform's cached matrices.
    ///
    /// Matrices are read as-is: call `Transform::update_matrices()` first if
    /// the pose changed.
    pub fn from_transform(transform: &Transform, color_tint: Vec4) -> Self {
        Self {
            world: transform.world_matrix(),
            world_inverse_transpose: transform.world_inverse_transpose_matrix(),
            color_tint,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "constants_tests.rs"]
mod tests;
