//! Rockfield - toroidal asteroid-field simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (seeded generation, wrap geometry,
//!   containment, asteroid lifecycle)
//!
//! Rendering, input, scoring, and collision resolution against other
//! entities live in the surrounding game; this crate only models rock
//! shapes, their kinematics, and the wrap/containment math other systems
//! query.

pub mod sim;

pub use sim::field::FieldBounds;
pub use sim::rng::{Seed, SeededValue};

use glam::Vec2;

/// Field configuration constants
pub mod consts {
    /// Play-field dimensions (world units, centered on the origin)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Circular region around the field center where rocks may not spawn
    pub const SAFE_ZONE_RADIUS: f32 = 100.0;

    /// Ideal outline radius per size tier (tier 5 rock ~ 80 units)
    pub const TIER_RADIUS_STEP: f32 = 16.0;
    /// Whole-rock radius jitter around the ideal (±5%)
    pub const RADIUS_JITTER: f32 = 0.05;
    /// Per-vertex radius jitter around the rock radius (±20%)
    pub const VERTEX_RADIUS_JITTER: f32 = 0.2;
    /// Per-vertex angular jitter as a fraction of one sector.
    /// Bounded below 0.5 so adjacent vertices cannot cross in angular
    /// order, keeping the outline simple.
    pub const VERTEX_ANGLE_JITTER: f32 = 0.3;
    /// Outline vertex count range
    pub const MIN_VERTICES: u32 = 10;
    pub const MAX_VERTICES: u32 = 16;

    /// Speed range endpoints; the upper endpoint is divided by size² so
    /// bigger tiers drift slower
    pub const SPEED_LO: f32 = 60.0;
    pub const SPEED_HI: f32 = 180.0;
    /// Spin magnitude limit (radians/second)
    pub const SPIN_LIMIT: f32 = 0.5;

    /// Fresh-population size tiers and rock count
    pub const START_SIZE_MIN: u32 = 4;
    pub const START_SIZE_MAX: u32 = 5;
    pub const START_COUNT_MIN: u32 = 2;
    pub const START_COUNT_MAX: u32 = 3;

    /// Fission child count range
    pub const SPLIT_COUNT_MIN: u32 = 1;
    pub const SPLIT_COUNT_MAX: u32 = 3;
}

/// Rotate `v` clockwise by `theta` radians.
///
/// The whole crate uses the clockwise convention (`y' = y·cosθ − x·sinθ`);
/// outline orientation and the wrap predicates assume it.
#[inline]
pub fn rotate_cw(theta: f32, v: Vec2) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    Vec2::new(v.x * cos + v.y * sin, v.y * cos - v.x * sin)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
