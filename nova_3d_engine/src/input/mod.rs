//! Input module - the camera's input collaborator.
//!
//! `CameraInput` is the narrow contract the camera polls each frame;
//! `InputState` implements it on top of winit events.

mod camera_input;
mod input_state;

pub use camera_input::{CameraAction, CameraInput};
pub use input_state::{InputState, KeyBindings};
