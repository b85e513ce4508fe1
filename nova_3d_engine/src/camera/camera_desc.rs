//! Camera descriptor - construction parameters with demo defaults.

use glam::Vec3;

// ===== CAMERA DESC =====

/// Descriptor for creating a camera
///
/// All angles are radians. Degree-based settings must be converted by the
/// caller (`f32::to_radians`).
#[derive(Debug, Clone, PartialEq)]
pub struct CameraDesc {
    /// Initial world position
    pub position: Vec3,
    /// Initial orientation as (pitch, yaw, roll)
    pub orientation: Vec3,
    /// Vertical field of view
    pub field_of_view: f32,
    /// Near clip distance
    pub near_clip: f32,
    /// Far clip distance
    pub far_clip: f32,
    /// Movement speed in world units per second
    pub move_speed: f32,
    /// Yaw radians per mouse unit
    pub look_speed_x: f32,
    /// Pitch radians per mouse unit
    pub look_speed_y: f32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Vec3::ZERO,
            field_of_view: std::f32::consts::FRAC_PI_2,
            near_clip: 0.1,
            far_clip: 900.0,
            move_speed: 2.0,
            look_speed_x: 0.001,
            look_speed_y: 0.001,
        }
    }
}

impl CameraDesc {
    /// Default descriptor at `position`, facing +Z.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Same descriptor with the field of view given in degrees.
    pub fn with_fov_degrees(mut self, degrees: f32) -> Self {
        self.field_of_view = degrees.to_radians();
        self
    }
}
