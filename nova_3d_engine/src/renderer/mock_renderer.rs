//! Mock Renderer for unit tests (no GPU required)
//!
//! Records every call so tests can check what the scene submitted and in
//! which order.

use crate::error::{Error, Result};
use super::constants::{FrameConstants, ObjectConstants};
use super::renderer::Renderer;

/// One recorded renderer call
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    BeginFrame(FrameConstants),
    DrawObject(ObjectConstants),
    EndFrame,
}

#[derive(Debug, Default)]
pub struct MockRenderer {
    pub calls: Vec<MockCall>,
    /// When set, `draw_object` fails with a backend error
    pub fail_draws: bool,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer whose draws always fail
    pub fn failing() -> Self {
        Self { fail_draws: true, ..Self::default() }
    }

    pub fn frame_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, MockCall::EndFrame)).count()
    }

    pub fn drawn_objects(&self) -> Vec<ObjectConstants> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                MockCall::DrawObject(object) => Some(*object),
                _ => None,
            })
            .collect()
    }

    pub fn last_frame(&self) -> Option<FrameConstants> {
        self.calls.iter().rev().find_map(|c| match c {
            MockCall::BeginFrame(frame) => Some(*frame),
            _ => None,
        })
    }
}

impl Renderer for MockRenderer {
    fn begin_frame(&mut self, frame: &FrameConstants) -> Result<()> {
        self.calls.push(MockCall::BeginFrame(*frame));
        Ok(())
    }

    fn draw_object(&mut self, object: &ObjectConstants) -> Result<()> {
        if self.fail_draws {
            return Err(Error::BackendError("mock draw failure".to_string()));
        }
        self.calls.push(MockCall::DrawObject(*object));
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.calls.push(MockCall::EndFrame);
        Ok(())
    }
}
