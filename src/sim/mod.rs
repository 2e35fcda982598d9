//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies outside the injected capabilities

pub mod collision;
pub mod controller;
pub mod state;

pub use collision::{
    Aabb, check_collision, check_collision_distance, clamp, distance3d,
    generate_random_position, is_in_bounds, lerp, random_color, random_range,
};
pub use controller::GameController;
pub use state::{Asteroid, GamePhase, GameSession, Spaceship};
