//! Camera module - first-person camera and its construction parameters.
//!
//! Cameras are plain values owned by the caller (usually a `Scene`); they
//! derive view/projection from their own Transform and never touch the GPU.

mod camera;
mod camera_desc;

pub use camera::{
    Camera,
    pitched_forward, pitch_within_guard,
    WORLD_UP, PITCH_GUARD_MIN_ANGLE, PITCH_GUARD_MAX_ANGLE,
};
pub use camera_desc::CameraDesc;
