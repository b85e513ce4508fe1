//! Input collaborator contract for camera control.
//!
//! The camera polls this once per frame and treats every answer as a pure
//! read. Implementations decide where the state comes from (winit events,
//! a replay script, a network peer, ...).

use glam::Vec2;

/// Logical camera actions driven by held keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAction {
    /// Move along the camera's forward axis
    Forward,
    /// Move against the camera's forward axis
    Backward,
    /// Move against the camera's right axis
    StrafeLeft,
    /// Move along the camera's right axis
    StrafeRight,
    /// Move along world +Y
    Up,
    /// Move along world -Y
    Down,
}

impl CameraAction {
    /// Every action, in binding order.
    pub const ALL: [CameraAction; 6] = [
        CameraAction::Forward,
        CameraAction::Backward,
        CameraAction::StrafeLeft,
        CameraAction::StrafeRight,
        CameraAction::Up,
        CameraAction::Down,
    ];
}

/// Per-frame input queries consumed by `Camera::update`.
pub trait CameraInput {
    /// Whether the key bound to `action` is currently held.
    fn is_action_down(&self, action: CameraAction) -> bool;

    /// Whether the look button (mouse drag to rotate) is held.
    fn is_look_held(&self) -> bool;

    /// Raw mouse movement accumulated this frame, before look-speed scaling.
    fn mouse_delta(&self) -> Vec2;
}
