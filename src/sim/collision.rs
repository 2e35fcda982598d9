//! Collision tests and numeric helpers
//!
//! Everything here is stateless: axis-aligned box overlap for the main
//! collision path, a distance-based alternative, and the small random/number
//! helpers the spawner uses. Random helpers draw from a caller-supplied RNG
//! so the whole simulation stays reproducible from one seed.

use glam::Vec3;
use rand::Rng;

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Build a box from its center and half extents
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Overlap test, inclusive on the boundary (touching counts as overlap)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// True iff the two boxes intersect. Symmetric in its arguments.
#[inline]
pub fn check_collision(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}

/// Cheaper proximity test: true iff the box centers are strictly closer
/// than `threshold`.
#[inline]
pub fn check_collision_distance(a: &Aabb, b: &Aabb, threshold: f32) -> bool {
    distance3d(a.center(), b.center()) < threshold
}

/// Euclidean distance between two points
#[inline]
pub fn distance3d(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.clamp(min, max)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Uniform sample in [min, max]
#[inline]
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    rng.random_range(min..=max)
}

/// Random RGB triple biased away from black so every asteroid reads on screen
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> [f32; 3] {
    [
        random_range(rng, 0.3, 1.0),
        random_range(rng, 0.3, 1.0),
        random_range(rng, 0.3, 1.0),
    ]
}

/// Random spawn position: x and z uniform in symmetric bands, y fixed
pub fn generate_random_position<R: Rng + ?Sized>(
    rng: &mut R,
    x_band: f32,
    y: f32,
    z_band: f32,
) -> Vec3 {
    Vec3::new(
        random_range(rng, -x_band, x_band),
        y,
        random_range(rng, -z_band, z_band),
    )
}

/// True iff `pos` lies within the symmetric box `[-bounds, bounds]` on every
/// axis, inclusive.
pub fn is_in_bounds(pos: Vec3, bounds: Vec3) -> bool {
    pos.x.abs() <= bounds.x && pos.y.abs() <= bounds.y && pos.z.abs() <= bounds.z
}
