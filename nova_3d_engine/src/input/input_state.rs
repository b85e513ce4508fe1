//! InputState - winit-backed implementation of `CameraInput`.
//!
//! Feed it window/device events as they arrive, call `begin_frame()` once
//! per frame after the camera has consumed the state. Held keys and buttons
//! persist across frames; the mouse delta is per frame.

use std::collections::HashSet;
use glam::Vec2;
use winit::event::{DeviceEvent, ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use super::camera_input::{CameraAction, CameraInput};

// ===== KEY BINDINGS =====

/// Maps camera actions to physical keys and names the look button.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub strafe_left: KeyCode,
    pub strafe_right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    /// Mouse button that must be held for mouse-look
    pub look_button: MouseButton,
}

impl Default for KeyBindings {
    /// W/S walk, A/D strafe, E/Q rise and sink, left mouse button looks.
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            strafe_left: KeyCode::KeyA,
            strafe_right: KeyCode::KeyD,
            up: KeyCode::KeyE,
            down: KeyCode::KeyQ,
            look_button: MouseButton::Left,
        }
    }
}

impl KeyBindings {
    /// Key bound to `action`.
    pub fn key_for(&self, action: CameraAction) -> KeyCode {
        match action {
            CameraAction::Forward => self.forward,
            CameraAction::Backward => self.backward,
            CameraAction::StrafeLeft => self.strafe_left,
            CameraAction::StrafeRight => self.strafe_right,
            CameraAction::Up => self.up,
            CameraAction::Down => self.down,
        }
    }
}

// ===== INPUT STATE =====

#[derive(Debug, Clone, Default)]
pub struct InputState {
    bindings: KeyBindings,
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_delta: Vec2,
}

impl InputState {
    /// Input state with the default bindings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn set_bindings(&mut self, bindings: KeyBindings) {
        self.bindings = bindings;
    }

    /// Reset per-frame state (mouse delta). Held keys and buttons persist.
    pub fn begin_frame(&mut self) {
        self.mouse_delta = Vec2::ZERO;
    }

    // ===== DIRECT FEED =====

    pub fn press_key(&mut self, key: KeyCode) {
        self.keys_down.insert(key);
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.mouse_buttons_down.insert(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.mouse_buttons_down.remove(&button);
    }

    /// Accumulate raw mouse motion for this frame.
    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta += Vec2::new(dx, dy);
    }

    pub fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    // ===== WINIT FEED =====

    /// Update key and button state from a window event.
    ///
    /// Cursor positions are ignored: look deltas come from raw device
    /// motion, which keeps working when the cursor is grabbed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.press_key(key),
                        ElementState::Released => self.release_key(key),
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.press_button(*button),
                ElementState::Released => self.release_button(*button),
            },
            // Focus loss swallows the release events
            WindowEvent::Focused(false) => {
                self.keys_down.clear();
                self.mouse_buttons_down.clear();
            }
            _ => {}
        }
    }

    /// Accumulate raw mouse motion from a device event.
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.add_mouse_delta(delta.0 as f32, delta.1 as f32);
        }
    }
}

impl CameraInput for InputState {
    fn is_action_down(&self, action: CameraAction) -> bool {
        self.key_down(self.bindings.key_for(action))
    }

    fn is_look_held(&self) -> bool {
        self.mouse_down(self.bindings.look_button)
    }

    fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod tests;
