//! Entity - a named, tinted Transform drawn once per frame.

use glam::Vec4;
use slotmap::new_key_type;
use crate::math::Transform;
use crate::renderer::ObjectConstants;

new_key_type! {
    /// Stable key for an Entity within a Scene.
    ///
    /// Keys remain valid even after other entities are removed.
    pub struct EntityKey;
}

/// A drawable object: name, pose and color tint.
#[derive(Debug, Clone)]
pub struct Entity {
    name: String,
    transform: Transform,
    color_tint: Vec4,
}

impl Entity {
    /// New entity at the identity pose with a white tint
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(),
            color_tint: Vec4::ONE,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_color_tint(mut self, color_tint: Vec4) -> Self {
        self.color_tint = color_tint;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn color_tint(&self) -> Vec4 {
        self.color_tint
    }

    pub fn set_color_tint(&mut self, color_tint: Vec4) {
        self.color_tint = color_tint;
    }

    /// Constants for the renderer, from the cached matrices
    pub fn object_constants(&self) -> ObjectConstants {
        ObjectConstants::from_transform(&self.transform, self.color_tint)
    }
}
