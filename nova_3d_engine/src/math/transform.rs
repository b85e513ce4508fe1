//! Transform - spatial state of one entity.
//!
//! Position, orientation (unit quaternion) and per-axis scale, plus the
//! cached world and world-inverse-transpose matrices derived from them.
//!
//! The cached matrices are NOT kept in sync automatically: every mutator
//! leaves them stale until the owner calls `update_matrices()`. Readers get
//! whatever the last explicit recompute produced.
//!
//! Conventions (glam, column vectors):
//! - canonical axes: right = +X, up = +Y, forward = +Z
//! - world = T * R * S (scale first, then rotation, then translation)
//! - Euler angles are radians, composed as Ry(yaw) * Rx(pitch) * Rz(roll)

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position, orientation and scale of one entity, with cached world matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    position: Vec3,
    orientation: Quat,
    scale: Vec3,
    world_matrix: Mat4,
    world_inverse_transpose_matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: Vec3::ONE,
            world_matrix: Mat4::IDENTITY,
            world_inverse_transpose_matrix: Mat4::IDENTITY,
        }
    }
}

/// Quaternion for intrinsic pitch/yaw/roll angles (radians).
fn quat_from_euler(pitch: f32, yaw: f32, roll: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, roll)
}

impl Transform {
    /// Identity pose: origin, no rotation, unit scale, identity matrices.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== SETTERS - overwrite, no validation =====

    /// Overwrite the position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.set_position(Vec3::new(x, y, z));
    }

    /// Overwrite the orientation from Euler angles (radians).
    pub fn set_orientation_euler(&mut self, pitch: f32, yaw: f32, roll: f32) {
        self.orientation = quat_from_euler(pitch, yaw, roll).normalize();
    }

    /// Overwrite the orientation with `orientation`, normalized.
    ///
    /// The caller must pass a non-zero quaternion; a zero input yields NaN
    /// components, which then propagate through every derived value.
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation.normalize();
    }

    /// Overwrite the scale. Zero or negative components are accepted.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    pub fn set_scale_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.set_scale(Vec3::new(x, y, z));
    }

    // ===== GETTERS - cached values, no recompute =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// World matrix as of the last `update_matrices()` call.
    pub fn world_matrix(&self) -> Mat4 {
        self.world_matrix
    }

    /// `transpose(inverse(world))` as of the last `update_matrices()` call.
    /// Used to transform normals under non-uniform scale.
    pub fn world_inverse_transpose_matrix(&self) -> Mat4 {
        self.world_inverse_transpose_matrix
    }

    // ===== MOVEMENT =====

    /// Translate along the world axes, ignoring orientation.
    pub fn move_absolute(&mut self, offset: Vec3) {
        self.position += offset;
    }

    pub fn move_absolute_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.move_absolute(Vec3::new(x, y, z));
    }

    /// Translate along the entity's own axes: the offset is rotated by the
    /// current orientation before being added to the position.
    pub fn move_relative(&mut self, offset: Vec3) {
        self.position += self.orientation * offset;
    }

    pub fn move_relative_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.move_relative(Vec3::new(x, y, z));
    }

    // ===== ROTATION =====

    /// Apply an incremental Euler rotation in the entity's local frame:
    /// `orientation' = normalize(orientation * incremental)`.
    pub fn rotate(&mut self, pitch: f32, yaw: f32, roll: f32) {
        let incremental = quat_from_euler(pitch, yaw, roll).normalize();
        self.orientation = (self.orientation * incremental).normalize();
    }

    /// `rotate` with the angles packed as (pitch, yaw, roll).
    pub fn rotate_euler(&mut self, angles: Vec3) {
        self.rotate(angles.x, angles.y, angles.z);
    }

    /// Rotate by `angle` radians about a world-space `axis`:
    /// `orientation' = normalize(Q(axis, angle) * orientation)`.
    ///
    /// The axis is normalized first; a zero axis yields NaN.
    pub fn rotate_axis(&mut self, axis: Vec3, angle: f32) {
        let incremental = Quat::from_axis_angle(axis.normalize(), angle);
        self.orientation = (incremental * self.orientation).normalize();
    }

    // ===== SCALE =====

    /// Additive scale adjustment: `scale += delta`.
    ///
    /// Repeated calls accumulate linearly, so zero or negative scale is
    /// reachable and tolerated.
    pub fn scale_by(&mut self, delta: Vec3) {
        self.scale += delta;
    }

    pub fn scale_by_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.scale_by(Vec3::new(x, y, z));
    }

    // ===== DERIVED DIRECTIONS =====

    /// +X rotated by the orientation.
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// +Y rotated by the orientation.
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// +Z rotated by the orientation.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    // ===== MATRICES =====

    /// Recompute the cached world and world-inverse-transpose matrices.
    ///
    /// Deterministic: two calls with no mutation in between produce
    /// bit-identical matrices. A singular world (zero scale) gives a
    /// non-finite inverse-transpose.
    pub fn update_matrices(&mut self) {
        let world = Mat4::from_translation(self.position)
            * Mat4::from_quat(self.orientation)
            * Mat4::from_scale(self.scale);

        self.world_matrix = world;
        self.world_inverse_transpose_matrix = world.inverse().transpose();
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
