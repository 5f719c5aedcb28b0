//! Debris particles emitted when a rock is struck
//!
//! Consumers only rely on the emitter's cardinality and seed consumption;
//! the particle fields themselves are for whatever effect system picks
//! them up.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;

use super::rng::{SeededValue, float_in, sequence};
use super::shape::Segment;

/// A debris particle (visual only, not gameplay-affecting).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in seconds
    pub life: f32,
    pub size: f32,
}

/// Fraction of the parent velocity debris inherits
const INHERITED_VELOCITY: f32 = 0.5;
/// Outward drift speed range
const DRIFT_LO: f32 = 20.0;
const DRIFT_HI: f32 = 60.0;
/// Lifetime range in seconds
const LIFE_LO: f32 = 0.4;
const LIFE_HI: f32 = 1.0;
const PARTICLE_SIZE: f32 = 2.0;

/// One particle per outline edge, anchored at the edge midpoint, drifting
/// in a drawn direction on top of a share of the parent's velocity.
pub fn segment_particles(velocity: Vec2, segments: Vec<Segment>) -> SeededValue<Vec<Particle>> {
    let emitters = segments
        .into_iter()
        .map(move |segment| {
            let pos = segment.midpoint();
            float_in(0.0, TAU)
                .zip(float_in(DRIFT_LO, DRIFT_HI))
                .zip(float_in(LIFE_LO, LIFE_HI))
                .map(move |((angle, drift), life)| Particle {
                    pos,
                    vel: velocity * INHERITED_VELOCITY + polar_to_cartesian(drift, angle),
                    life,
                    size: PARTICLE_SIZE,
                })
        })
        .collect();
    sequence(emitters)
}
