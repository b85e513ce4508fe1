//! Renderer trait - the drawing side of the frame loop.
//!
//! A frame is `begin_frame` once, `draw_object` for every visible entity,
//! then `end_frame`. Implementations own every GPU resource; the engine only
//! hands them plain constants.

use crate::error::Result;
use super::constants::{FrameConstants, ObjectConstants};

/// Consumer of the scene's per-frame output.
pub trait Renderer {
    /// Start a frame and upload the camera constants
    fn begin_frame(&mut self, frame: &FrameConstants) -> Result<()>;

    /// Upload one object's constants and draw it
    fn draw_object(&mut self, object: &ObjectConstants) -> Result<()>;

    /// Finish and present the frame
    fn end_frame(&mut self) -> Result<()>;
}
