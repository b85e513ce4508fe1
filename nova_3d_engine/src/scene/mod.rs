//! Scene management module
//!
//! Entities (named transforms with a tint), the ordered camera list with one
//! active camera, and the per-frame update/render loop that feeds a Renderer.

mod entity;
mod scene;

pub use entity::{Entity, EntityKey};
pub use scene::Scene;
