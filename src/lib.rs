//! Astro Dodge - an asteroid-dodge arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state, controller)
//! - `engine`: Capability interface over the external 3D engine, plus a headless stub
//! - `hud`: Score/game-over display capability
//! - `schedule`: Next-frame scheduling capability
//! - `input`: Keyboard state shared between host events and the tick
//! - `tuning`: Data-driven difficulty balance

pub mod engine;
pub mod hud;
pub mod input;
pub mod schedule;
pub mod sim;
pub mod tuning;

pub use engine::{Engine, EngineError, HeadlessEngine, MeshDesc, MeshHandle};
pub use hud::{LogDisplay, NullDisplay, ScoreDisplay};
pub use input::{InputSnapshot, Key, KeysHeld};
pub use schedule::{FrameScheduler, ManualScheduler};
pub use sim::{Asteroid, GameController, GamePhase, GameSession, Spaceship};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Symmetric clamp on the ship's x position
    pub const SHIP_BOUNDS: f32 = 8.0;
    /// Horizontal ship speed (units per tick)
    pub const SHIP_SPEED: f32 = 0.15;
    /// Ship rest position
    pub const SHIP_START: Vec3 = Vec3::new(0.0, -5.0, 0.0);
    /// Maximum visual lean (radians, rotation about z)
    pub const SHIP_LEAN_MAX: f32 = 0.35;
    /// Easing factor toward the lean cap while a key is held
    pub const SHIP_LEAN_EASE: f32 = 0.15;
    /// Per-tick decay of the lean when no key is held
    pub const SHIP_LEAN_DAMPING: f32 = 0.85;
    /// Half extents of the ship's collision box
    pub const SHIP_HALF_EXTENTS: Vec3 = Vec3::new(0.6, 0.8, 0.6);

    /// Asteroid spawn height
    pub const ASTEROID_SPAWN_Y: f32 = 15.0;
    /// Asteroids below this y are out of play and removed
    pub const ASTEROID_DESPAWN_Y: f32 = -10.0;
    /// Spawn x range is [-ASTEROID_SPAWN_X, ASTEROID_SPAWN_X]
    pub const ASTEROID_SPAWN_X: f32 = 8.0;
    /// Spawn z range is [-ASTEROID_SPAWN_Z, ASTEROID_SPAWN_Z]
    pub const ASTEROID_SPAWN_Z: f32 = 2.0;
    /// Per-instance fall speed range (units per tick)
    pub const ASTEROID_MIN_FALL_SPEED: f32 = 0.05;
    pub const ASTEROID_MAX_FALL_SPEED: f32 = 0.15;
    /// Per-axis tumble rate range is [-ASTEROID_MAX_SPIN, ASTEROID_MAX_SPIN]
    pub const ASTEROID_MAX_SPIN: f32 = 0.05;
    /// Per-instance radius range (cosmetic and collision extent)
    pub const ASTEROID_MIN_RADIUS: f32 = 0.5;
    pub const ASTEROID_MAX_RADIUS: f32 = 1.1;

    /// Backdrop starfield
    pub const STARFIELD_COUNT: u32 = 400;
    pub const STARFIELD_SPREAD: f32 = 60.0;
}
