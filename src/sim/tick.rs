//! Asteroid lifecycle: time-stepping and fission
//!
//! Both operations build new values; nothing is mutated in place. `tick`
//! is pure, `split` is a seeded computation like everything else that
//! draws randomness.

use crate::consts::*;

use super::asteroid::Asteroid;
use super::field::FieldBounds;
use super::generator;
use super::particles::{Particle, segment_particles};
use super::rng::{SeededValue, int_in, sequence};

/// Advance every rock by `dt` seconds: translate under wrap, accumulate
/// rotation. Rotation is left unbounded; only its sine/cosine are ever used.
pub fn tick(dt: f32, bounds: &FieldBounds, asteroids: &[Asteroid]) -> Vec<Asteroid> {
    asteroids
        .iter()
        .map(|rock| Asteroid {
            position: bounds.wrap_point(rock.position + rock.velocity * dt),
            rotation: rock.rotation + rock.rotation_velocity * dt,
            ..rock.clone()
        })
        .collect()
}

/// What a destroyed rock leaves behind.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOutcome {
    /// 1-3 children one tier down, or none when the parent was tier 1
    pub children: Vec<Asteroid>,
    /// Debris, produced regardless of tier
    pub debris: Vec<Particle>,
}

/// Fission. Debris is always emitted from the rock's edges; children exist
/// only while there is a tier below the parent, spawn at the parent's
/// position, and draw their own kinematics and outlines independently.
pub fn split(asteroid: &Asteroid, bounds: FieldBounds) -> SeededValue<SplitOutcome> {
    let debris = segment_particles(asteroid.velocity, asteroid.segments());
    let child_size = asteroid.size.saturating_sub(1);
    let spawn = asteroid.position;

    debris.and_then(move |debris| {
        if child_size == 0 {
            SeededValue::constant(SplitOutcome {
                children: Vec::new(),
                debris,
            })
        } else {
            int_in(SPLIT_COUNT_MIN, SPLIT_COUNT_MAX)
                .and_then(move |count| {
                    log::debug!("rock split into {count} tier-{child_size} children");
                    sequence(
                        (0..count)
                            .map(|_| generator::asteroid(Some(spawn), child_size, child_size, bounds))
                            .collect(),
                    )
                })
                .map(move |children| SplitOutcome { children, debris })
        }
    })
}
