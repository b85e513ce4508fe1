//! Scene - entities plus an ordered list of cameras, one of them active.
//!
//! Entities live in a SlotMap for O(1) insert/remove with stable keys.
//! Cameras are addressed by index; the first camera added becomes active.
//!
//! Frame order: `update()` recomputes every entity's matrices, then moves
//! the active camera; `render()` submits the active camera's constants and
//! one draw per entity.

use slotmap::SlotMap;
use crate::camera::Camera;
use crate::error::Result;
use crate::input::CameraInput;
use crate::renderer::{FrameConstants, ObjectConstants, Renderer};
use crate::{engine_bail, engine_debug, engine_err, engine_info, engine_warn};
use super::entity::{Entity, EntityKey};

const LOG_SOURCE: &str = "nova3d::Scene";

/// A scene: entities, cameras and the active camera index.
#[derive(Debug, Default)]
pub struct Scene {
    entities: SlotMap<EntityKey, Entity>,
    cameras: Vec<Camera>,
    active_camera: usize,
}

impl Scene {
    /// Create an empty scene (no entities, no cameras)
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            cameras: Vec::new(),
            active_camera: 0,
        }
    }

    // ===== ENTITIES =====

    /// Add an entity and return its stable key
    pub fn create_entity(&mut self, entity: Entity) -> EntityKey {
        self.entities.insert(entity)
    }

    /// Remove an entity, returning it.
    ///
    /// Fails with `InvalidResource` if the key is unknown (or was already
    /// removed).
    pub fn remove_entity(&mut self, key: EntityKey) -> Result<Entity> {
        match self.entities.remove(key) {
            Some(entity) => Ok(entity),
            None => engine_bail!(LOG_SOURCE, "Cannot remove entity {:?}: unknown key", key),
        }
    }

    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    pub fn entity_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key)
    }

    /// Iterate over all entities (key, entity)
    pub fn entities(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.entities.iter()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    // ===== CAMERAS =====

    /// Append a camera and return its index. The first camera becomes active.
    pub fn add_camera(&mut self, camera: Camera) -> usize {
        self.cameras.push(camera);
        let index = self.cameras.len() - 1;
        engine_debug!(LOG_SOURCE, "Camera {} added ({} total)", index, self.cameras.len());
        index
    }

    pub fn camera(&self, index: usize) -> Option<&Camera> {
        self.cameras.get(index)
    }

    pub fn camera_mut(&mut self, index: usize) -> Option<&mut Camera> {
        self.cameras.get_mut(index)
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    pub fn active_camera_index(&self) -> usize {
        self.active_camera
    }

    /// Make the camera at `index` the one used by `update()` and `render()`
    pub fn set_active_camera(&mut self, index: usize) -> Result<()> {
        if index >= self.cameras.len() {
            engine_bail!(
                LOG_SOURCE,
                "Camera index {} out of range ({} cameras)",
                index,
                self.cameras.len()
            );
        }
        self.active_camera = index;
        engine_info!(LOG_SOURCE, "Active camera switched to {}", index);
        Ok(())
    }

    pub fn active_camera(&self) -> Result<&Camera> {
        match self.cameras.get(self.active_camera) {
            Some(camera) => Ok(camera),
            None => Err(engine_err!(LOG_SOURCE, "Scene has no active camera")),
        }
    }

    pub fn active_camera_mut(&mut self) -> Result<&mut Camera> {
        match self.cameras.get_mut(self.active_camera) {
            Some(camera) => Ok(camera),
            None => Err(engine_err!(LOG_SOURCE, "Scene has no active camera")),
        }
    }

    // ===== FRAME =====

    /// Broadcast a viewport resize to every camera.
    ///
    /// A zero-sized viewport (minimized window) is ignored: the cameras keep
    /// their previous projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            engine_warn!(LOG_SOURCE, "Ignoring resize to {}x{}", width, height);
            return;
        }

        let aspect_ratio = width as f32 / height as f32;
        for camera in &mut self.cameras {
            camera.update_projection(aspect_ratio);
        }
        engine_debug!(
            LOG_SOURCE,
            "Resized to {}x{} (aspect {:.3}), {} cameras updated",
            width,
            height,
            aspect_ratio,
            self.cameras.len()
        );
    }

    /// Per-frame update: entity matrices first, then the active camera.
    ///
    /// Entities are updated even when the scene has no camera; the missing
    /// camera is then reported as `InvalidResource`.
    pub fn update(&mut self, delta_time: f32, input: &dyn CameraInput) -> Result<()> {
        for entity in self.entities.values_mut() {
            entity.transform_mut().update_matrices();
        }
        self.active_camera_mut()?.update(delta_time, input);
        Ok(())
    }

    /// Constants of the active camera
    pub fn frame_constants(&self) -> Result<FrameConstants> {
        Ok(FrameConstants::from_camera(self.active_camera()?))
    }

    /// Constants of every entity, in iteration order
    pub fn object_constants(&self) -> Vec<ObjectConstants> {
        self.entities.values().map(Entity::object_constants).collect()
    }

    /// Submit one frame: the active camera, then one draw per entity.
    ///
    /// The first renderer failure aborts the frame and is returned as is.
    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<()> {
        let frame = self.frame_constants()?;
        renderer.begin_frame(&frame)?;
        for entity in self.entities.values() {
            renderer.draw_object(&entity.object_constants())?;
        }
        renderer.end_frame()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
