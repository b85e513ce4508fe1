//! Camera - first-person camera built on a Transform.
//!
//! The camera owns its Transform and caches a left-handed view and
//! perspective projection. Like the Transform's world matrix, both caches
//! are only refreshed by explicit calls: `update_projection()` (and the
//! projection-parameter setters) for the projection, `update()` /
//! `update_view()` for the view.
//!
//! Controls (polled through `CameraInput` every `update()`):
//! - Forward/Backward/StrafeLeft/StrafeRight move along the camera's own
//!   axes, Up/Down along world Y. Held actions add up; diagonals are faster.
//! - While the look button is held, mouse X yaws about world up and mouse Y
//!   pitches about the camera's right axis. A pitch is only committed when
//!   the resulting forward stays strictly between 10° and 170° from world
//!   up; yaw is always applied.

use glam::{Mat4, Quat, Vec3};
use crate::input::{CameraAction, CameraInput};
use crate::math::Transform;
use super::camera_desc::CameraDesc;

/// World up reference used for yaw and for the view basis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Smallest allowed angle between forward and world up after a pitch.
pub const PITCH_GUARD_MIN_ANGLE: f32 = 10.0 * std::f32::consts::PI / 180.0;

/// Largest allowed angle between forward and world up after a pitch.
pub const PITCH_GUARD_MAX_ANGLE: f32 = 170.0 * std::f32::consts::PI / 180.0;

/// Forward vector the camera would have after pitching by `pitch` radians.
///
/// Pitching about the world-space right axis (`orientation * +X`) equals a
/// local X rotation, so the candidate is computed without touching any
/// transform.
pub fn pitched_forward(orientation: Quat, pitch: f32) -> Vec3 {
    (orientation * Quat::from_rotation_x(pitch)) * Vec3::Z
}

/// Whether `forward` is strictly inside the pitch guard band.
///
/// NaN directions are rejected.
pub fn pitch_within_guard(forward: Vec3) -> bool {
    let angle = forward.angle_between(WORLD_UP);
    angle > PITCH_GUARD_MIN_ANGLE && angle < PITCH_GUARD_MAX_ANGLE
}

/// First-person camera: owned transform, cached view and projection.
#[derive(Debug, Clone)]
pub struct Camera {
    transform: Transform,
    aspect_ratio: f32,
    field_of_view: f32,
    near_clip: f32,
    far_clip: f32,
    move_speed: f32,
    look_speed_x: f32,
    look_speed_y: f32,
    view: Mat4,
    projection: Mat4,
}

impl Camera {
    /// Create a camera with default projection and control settings
    /// (90° FOV, clip 0.1..900, move speed 2, look speeds 0.001).
    ///
    /// `orientation` is (pitch, yaw, roll) in radians.
    pub fn new(aspect_ratio: f32, position: Vec3, orientation: Vec3) -> Self {
        Self::from_desc(
            aspect_ratio,
            &CameraDesc {
                position,
                orientation,
                ..CameraDesc::default()
            },
        )
    }

    /// Create a camera from a descriptor.
    ///
    /// View and projection are computed immediately, so the camera is usable
    /// before the first resize or update.
    pub fn from_desc(aspect_ratio: f32, desc: &CameraDesc) -> Self {
        let mut transform = Transform::new();
        transform.set_position(desc.position);
        transform.set_orientation_euler(desc.orientation.x, desc.orientation.y, desc.orientation.z);

        let mut camera = Self {
            transform,
            aspect_ratio,
            field_of_view: desc.field_of_view,
            near_clip: desc.near_clip,
            far_clip: desc.far_clip,
            move_speed: desc.move_speed,
            look_speed_x: desc.look_speed_x,
            look_speed_y: desc.look_speed_y,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection(aspect_ratio);
        camera.update_view();
        camera
    }

    // ===== GETTERS =====

    /// View matrix as of the last `update()` / `update_view()`.
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// Projection matrix as of the last projection recompute.
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    pub fn forward(&self) -> Vec3 {
        self.transform.forward()
    }

    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn look_speed(&self) -> (f32, f32) {
        (self.look_speed_x, self.look_speed_y)
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable access to the camera's transform.
    ///
    /// The view is not refreshed until the next `update()` / `update_view()`.
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    // ===== PROJECTION =====

    /// Store a new aspect ratio and recompute the projection.
    ///
    /// Must be called for every viewport resize.
    pub fn update_projection(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
        self.projection = Mat4::perspective_lh(
            self.field_of_view,
            self.aspect_ratio,
            self.near_clip,
            self.far_clip,
        );
    }

    /// Change the vertical field of view (radians) and recompute the projection.
    pub fn set_field_of_view(&mut self, field_of_view: f32) {
        self.field_of_view = field_of_view;
        self.update_projection(self.aspect_ratio);
    }

    /// Change the clip distances and recompute the projection.
    pub fn set_clip_planes(&mut self, near_clip: f32, far_clip: f32) {
        self.near_clip = near_clip;
        self.far_clip = far_clip;
        self.update_projection(self.aspect_ratio);
    }

    // ===== CONTROLS =====

    pub fn set_move_speed(&mut self, move_speed: f32) {
        self.move_speed = move_speed;
    }

    pub fn set_look_speed(&mut self, look_speed_x: f32, look_speed_y: f32) {
        self.look_speed_x = look_speed_x;
        self.look_speed_y = look_speed_y;
    }

    /// Recompute the view from the current position and forward.
    ///
    /// World up is the up reference, not the transform's own up, so roll
    /// never leaks into the view.
    pub fn update_view(&mut self) {
        self.view = Mat4::look_to_lh(self.transform.position(), self.transform.forward(), WORLD_UP);
    }

    /// Per-frame update: apply held movement actions, mouse-look (with the
    /// pitch guard), then refresh the view.
    pub fn update(&mut self, delta_time: f32, input: &dyn CameraInput) {
        let step = self.move_speed * delta_time;

        if input.is_action_down(CameraAction::Forward) {
            self.transform.move_relative(Vec3::new(0.0, 0.0, step));
        }
        if input.is_action_down(CameraAction::Backward) {
            self.transform.move_relative(Vec3::new(0.0, 0.0, -step));
        }
        if input.is_action_down(CameraAction::StrafeLeft) {
            self.transform.move_relative(Vec3::new(-step, 0.0, 0.0));
        }
        if input.is_action_down(CameraAction::StrafeRight) {
            self.transform.move_relative(Vec3::new(step, 0.0, 0.0));
        }
        if input.is_action_down(CameraAction::Up) {
            self.transform.move_absolute(Vec3::new(0.0, step, 0.0));
        }
        if input.is_action_down(CameraAction::Down) {
            self.transform.move_absolute(Vec3::new(0.0, -step, 0.0));
        }

        if input.is_look_held() {
            let delta = input.mouse_delta();
            let yaw = delta.x * self.look_speed_x;
            let pitch = delta.y * self.look_speed_y;

            let candidate = pitched_forward(self.transform.orientation(), pitch);
            if pitch_within_guard(candidate) {
                self.transform.rotate_axis(self.transform.right(), pitch);
            } else if pitch != 0.0 {
                crate::engine_trace!(
                    "nova3d::Camera",
                    "Pitch {:.4} rejected: forward would be {:.1} deg from world up",
                    pitch,
                    candidate.angle_between(WORLD_UP).to_degrees()
                );
            }

            self.transform.rotate_axis(WORLD_UP, yaw);
        }

        self.update_view();
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
