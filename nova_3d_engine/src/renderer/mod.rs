//! Renderer module - the collaborator that consumes per-frame and per-object constants

mod constants;
mod renderer;

#[cfg(test)]
pub(crate) mod mock_renderer;

pub use constants::{FrameConstants, ObjectConstants};
pub use renderer::Renderer;
