/*!
# Nova 3D Engine

Spatial core of the Nova3D real-time demo.

This crate owns the part of the engine that has real invariants: entity
transforms (position, orientation, scale and the derived world matrices),
the first-person camera (view/projection derivation, look and movement
controls with a pitch guard) and the scene that drives them once per frame.
GPU work is delegated to a `Renderer` collaborator that only consumes the
per-frame and per-object constants produced here.

## Architecture

- **Transform**: position/orientation/scale → world and world-inverse-transpose
- **Camera**: owns a Transform, derives view/projection, maps input to motion
- **CameraInput**: input collaborator contract (`InputState` is the winit adapter)
- **Scene**: entities, ordered cameras with one active, resize broadcast
- **Renderer**: consumer of `FrameConstants` / `ObjectConstants`
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod math;
pub mod camera;
pub mod input;
pub mod renderer;
pub mod scene;

#[cfg(test)]
mod test_support;

// Main nova3d namespace module
pub mod nova3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine (global logger holder)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Input sub-module
    pub mod input {
        pub use crate::input::*;
    }

    // Render sub-module (collaborator contract)
    pub mod render {
        pub use crate::renderer::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
