//! Session state and entity types
//!
//! `GameSession` is the explicit, auditable bundle of everything the
//! controller derives from elapsed time: score, phase, and the three
//! difficulty values. Entities carry their own visual handle but never touch
//! the scene graph themselves; attach/detach/dispose all go through the
//! controller.
//!
//! The full lifecycle is Init (construction) -> Playing -> GameOver ->
//! Playing (restart), with Terminated reached only through
//! `GameController::destroy`. Only Playing/GameOver live here; Init and
//! Terminated are controller-level.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{
    Aabb, clamp, generate_random_position, lerp, random_range,
};
use crate::consts::*;
use crate::engine::{Engine, MeshHandle};
use crate::input::InputSnapshot;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended by a collision; score frozen until restart
    GameOver,
}

/// Per-run session state, owned and mutated only by the controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: GamePhase,
    /// Derived from elapsed Playing time; monotonic, frozen at GameOver
    pub score: u64,
    /// Fixed-timestep tick counter since init/restart
    pub elapsed_ticks: u64,
    /// Global fall-speed multiplier, >= 1, non-decreasing
    pub game_speed: f32,
    /// Seconds between spawns, floor-clamped, non-increasing
    pub spawn_interval: f32,
    /// Per-asteroid speed ramp, >= 1, non-decreasing
    pub speed_multiplier: f32,
    /// Elapsed seconds at the last spawn, gates new spawns
    pub last_spawn_secs: f32,
}

impl GameSession {
    /// Baseline session at t = 0
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Playing,
            score: 0,
            elapsed_ticks: 0,
            game_speed: 1.0,
            spawn_interval: tuning.base_spawn_interval,
            speed_multiplier: 1.0,
            last_spawn_secs: 0.0,
        }
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_ticks as f32 * SIM_DT
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Combined multiplier applied to asteroid motion each tick
    pub fn combined_speed(&self) -> f32 {
        self.game_speed * self.speed_multiplier
    }

    /// Re-derive score and the three difficulty values from elapsed time
    pub fn recompute_derived(&mut self, tuning: &Tuning) {
        let secs = self.elapsed_secs();
        self.score = tuning.score_at(secs);
        self.game_speed = tuning.game_speed_at(secs);
        self.spawn_interval = tuning.spawn_interval_at(secs);
        self.speed_multiplier = tuning.speed_multiplier_at(secs);
    }
}

/// The player's ship: bounded horizontal motion plus a cosmetic lean
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spaceship {
    pub handle: MeshHandle,
    pub position: Vec3,
    /// Rotation about z; visual only, never affects collision
    pub lean: f32,
    pub speed: f32,
    pub bounds: f32,
}

impl Spaceship {
    pub fn new(handle: MeshHandle) -> Self {
        Self {
            handle,
            position: SHIP_START,
            lean: 0.0,
            speed: SHIP_SPEED,
            bounds: SHIP_BOUNDS,
        }
    }

    /// Apply one tick of input. Opposite keys held together cancel out: no
    /// net motion, lean decays as if idle.
    pub fn update(&mut self, input: &InputSnapshot) {
        match (input.left, input.right) {
            (true, false) => {
                self.position.x -= self.speed;
                self.lean = lerp(self.lean, SHIP_LEAN_MAX, SHIP_LEAN_EASE);
            }
            (false, true) => {
                self.position.x += self.speed;
                self.lean = lerp(self.lean, -SHIP_LEAN_MAX, SHIP_LEAN_EASE);
            }
            _ => {
                self.lean *= SHIP_LEAN_DAMPING;
                if self.lean.abs() < 1e-3 {
                    self.lean = 0.0;
                }
            }
        }
        // Hard invariant, enforced after every move
        self.position.x = clamp(self.position.x, -self.bounds, self.bounds);
    }

    /// Restore the rest pose; the visual handle is reused across restarts
    pub fn reset(&mut self) {
        self.position = SHIP_START;
        self.lean = 0.0;
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, SHIP_HALF_EXTENTS)
    }
}

/// A falling obstacle with randomized per-instance kinematics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub handle: MeshHandle,
    pub position: Vec3,
    pub rotation: Vec3,
    /// Units per tick, rolled once at spawn
    pub fall_speed: f32,
    /// Radians per tick on each axis, rolled once at spawn
    pub rotation_speed: Vec3,
    /// Collision extent (the mesh is deformed cosmetically around this)
    pub radius: f32,
}

impl Asteroid {
    /// Roll spawn position and kinematics. The radius is rolled by the
    /// caller because it also shapes the mesh.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, handle: MeshHandle, radius: f32) -> Self {
        Self {
            handle,
            position: generate_random_position(
                rng,
                ASTEROID_SPAWN_X,
                ASTEROID_SPAWN_Y,
                ASTEROID_SPAWN_Z,
            ),
            rotation: Vec3::ZERO,
            fall_speed: random_range(rng, ASTEROID_MIN_FALL_SPEED, ASTEROID_MAX_FALL_SPEED),
            rotation_speed: Vec3::new(
                random_range(rng, -ASTEROID_MAX_SPIN, ASTEROID_MAX_SPIN),
                random_range(rng, -ASTEROID_MAX_SPIN, ASTEROID_MAX_SPIN),
                random_range(rng, -ASTEROID_MAX_SPIN, ASTEROID_MAX_SPIN),
            ),
            radius,
        }
    }

    /// Advance fall and tumble by one tick, scaled by the session's combined
    /// speed multiplier. No collision awareness here; that is the
    /// controller's job.
    pub fn update(&mut self, speed_multiplier: f32) {
        self.position.y -= self.fall_speed * speed_multiplier;
        self.rotation += self.rotation_speed * speed_multiplier;
    }

    /// Fallen past the despawn threshold and due for removal
    pub fn is_out_of_play(&self) -> bool {
        self.position.y < ASTEROID_DESPAWN_Y
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, Vec3::splat(self.radius))
    }

    /// Detach from the scene and release visual resources, in that order.
    /// Called exactly once per instance, by the controller that owns it.
    pub fn destroy<E: Engine>(&self, engine: &mut E) {
        engine.remove_from_scene(self.handle);
        engine.dispose_mesh(self.handle);
    }
}
