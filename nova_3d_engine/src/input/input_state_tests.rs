use glam::Vec2;
use winit::event::{DeviceEvent, MouseButton, WindowEvent};
use winit::keyboard::KeyCode;
use super::*;

// ============================================================================
// Key bindings
// ============================================================================

#[test]
fn test_default_bindings() {
    let bindings = KeyBindings::default();

    assert_eq!(bindings.key_for(CameraAction::Forward), KeyCode::KeyW);
    assert_eq!(bindings.key_for(CameraAction::Backward), KeyCode::KeyS);
    assert_eq!(bindings.key_for(CameraAction::StrafeLeft), KeyCode::KeyA);
    assert_eq!(bindings.key_for(CameraAction::StrafeRight), KeyCode::KeyD);
    assert_eq!(bindings.key_for(CameraAction::Up), KeyCode::KeyE);
    assert_eq!(bindings.key_for(CameraAction::Down), KeyCode::KeyQ);
    assert_eq!(bindings.look_button, MouseButton::Left);
}

// ============================================================================
// Actions
// ============================================================================

#[test]
fn test_held_key_maps_to_action() {
    let mut input = InputState::new();
    input.press_key(KeyCode::KeyW);
    input.press_key(KeyCode::KeyD);

    assert!(input.is_action_down(CameraAction::Forward));
    assert!(input.is_action_down(CameraAction::StrafeRight));
    assert!(!input.is_action_down(CameraAction::Backward));

    input.release_key(KeyCode::KeyW);
    assert!(!input.is_action_down(CameraAction::Forward));
}

#[test]
fn test_custom_bindings() {
    let bindings = KeyBindings {
        up: KeyCode::Space,
        down: KeyCode::KeyX,
        look_button: MouseButton::Right,
        ..KeyBindings::default()
    };
    let mut input = InputState::with_bindings(bindings);
    input.press_key(KeyCode::Space);
    input.press_button(MouseButton::Left);

    assert!(input.is_action_down(CameraAction::Up));
    assert!(!input.is_action_down(CameraAction::Down));
    assert!(!input.is_look_held());

    input.press_button(MouseButton::Right);
    assert!(input.is_look_held());
}

#[test]
fn test_held_keys_survive_begin_frame() {
    let mut input = InputState::new();
    input.press_key(KeyCode::KeyS);
    input.press_button(MouseButton::Left);
    input.begin_frame();

    assert!(input.is_action_down(CameraAction::Backward));
    assert!(input.is_look_held());
}

// ============================================================================
// Mouse delta
// ============================================================================

#[test]
fn test_mouse_delta_accumulates_and_resets() {
    let mut input = InputState::new();
    input.add_mouse_delta(3.0, -1.0);
    input.add_mouse_delta(2.0, 4.0);
    assert_eq!(input.mouse_delta(), Vec2::new(5.0, 3.0));

    input.begin_frame();
    assert_eq!(input.mouse_delta(), Vec2::ZERO);
}

#[test]
fn test_device_mouse_motion_feeds_delta() {
    let mut input = InputState::new();
    input.handle_device_event(&DeviceEvent::MouseMotion { delta: (10.0, -2.5) });
    input.handle_device_event(&DeviceEvent::MouseMotion { delta: (1.0, 0.5) });

    assert_eq!(input.mouse_delta(), Vec2::new(11.0, -2.0));
}

#[test]
fn test_focus_loss_releases_everything() {
    let mut input = InputState::new();
    input.press_key(KeyCode::KeyW);
    input.press_button(MouseButton::Left);

    input.handle_window_event(&WindowEvent::Focused(false));

    assert!(!input.key_down(KeyCode::KeyW));
    assert!(!input.is_look_held());
}
