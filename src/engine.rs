//! Capability interface over the external 3D engine
//!
//! The sim only ever needs a handful of engine operations: build a mesh,
//! attach/detach it, move it, draw the frame, and release resources. Keeping
//! that surface behind a trait means the whole game loop runs headless in
//! tests and in the demo binary.

use std::collections::{HashMap, HashSet};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures from the render delegate. Rendering failure is unrecoverable for
/// the game loop, so these are propagated rather than caught.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("render surface lost")]
    SurfaceLost,
    #[error("render failed: {0}")]
    Render(String),
}

/// Opaque handle to a mesh owned by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshHandle(pub u64);

/// The three mesh shapes the game composes
#[derive(Debug, Clone)]
pub enum MeshDesc {
    /// Player ship
    Cone {
        radius: f32,
        height: f32,
        color: [f32; 3],
    },
    /// Asteroid: icosahedron-like polyhedron with cosmetic vertex deformation
    Polyhedron {
        radius: f32,
        detail: u32,
        color: [f32; 3],
        deform_seed: u64,
    },
    /// Backdrop star points
    Points { count: u32, spread: f32 },
}

/// The engine surface consumed by the game loop
pub trait Engine {
    fn create_mesh(&mut self, desc: &MeshDesc) -> MeshHandle;
    fn add_to_scene(&mut self, handle: MeshHandle);
    fn remove_from_scene(&mut self, handle: MeshHandle);
    fn set_transform(&mut self, handle: MeshHandle, position: Vec3, rotation: Vec3);
    /// Release the mesh's geometry and material. Must happen exactly once,
    /// and only after the mesh has been removed from the scene.
    fn dispose_mesh(&mut self, handle: MeshHandle);
    /// Draw the current scene from the current camera
    fn render(&mut self) -> Result<(), EngineError>;
    /// Release the output surface. Idempotent.
    fn release_surface(&mut self);
}

/// Recording engine stub for tests and headless runs
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    next_id: u64,
    /// Handles currently attached to the scene
    pub in_scene: HashSet<MeshHandle>,
    /// Handles created and not yet disposed
    pub live: HashSet<MeshHandle>,
    /// Last transform pushed per handle
    pub transforms: HashMap<MeshHandle, (Vec3, Vec3)>,
    pub render_count: u64,
    pub surface_released: bool,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for HeadlessEngine {
    fn create_mesh(&mut self, _desc: &MeshDesc) -> MeshHandle {
        self.next_id += 1;
        let handle = MeshHandle(self.next_id);
        self.live.insert(handle);
        handle
    }

    fn add_to_scene(&mut self, handle: MeshHandle) {
        debug_assert!(self.live.contains(&handle), "add of disposed mesh");
        self.in_scene.insert(handle);
    }

    fn remove_from_scene(&mut self, handle: MeshHandle) {
        self.in_scene.remove(&handle);
    }

    fn set_transform(&mut self, handle: MeshHandle, position: Vec3, rotation: Vec3) {
        self.transforms.insert(handle, (position, rotation));
    }

    fn dispose_mesh(&mut self, handle: MeshHandle) {
        debug_assert!(
            !self.in_scene.contains(&handle),
            "dispose must follow scene removal"
        );
        let was_live = self.live.remove(&handle);
        debug_assert!(was_live, "double dispose");
        self.transforms.remove(&handle);
    }

    fn render(&mut self) -> Result<(), EngineError> {
        if self.surface_released {
            return Err(EngineError::SurfaceLost);
        }
        self.render_count += 1;
        Ok(())
    }

    fn release_surface(&mut self) {
        self.surface_released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_lifecycle() {
        let mut engine = HeadlessEngine::new();
        let desc = MeshDesc::Cone {
            radius: 0.5,
            height: 1.5,
            color: [0.2, 0.8, 1.0],
        };
        let handle = engine.create_mesh(&desc);
        engine.add_to_scene(handle);
        assert!(engine.in_scene.contains(&handle));

        engine.remove_from_scene(handle);
        engine.dispose_mesh(handle);
        assert!(engine.in_scene.is_empty());
        assert!(engine.live.is_empty());
    }

    #[test]
    fn test_render_fails_after_surface_release() {
        let mut engine = HeadlessEngine::new();
        assert!(engine.render().is_ok());
        engine.release_surface();
        assert!(matches!(engine.render(), Err(EngineError::SurfaceLost)));
    }
}
