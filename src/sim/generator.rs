//! Seeded asteroid generation
//!
//! Every draw goes through [`SeededValue`] so a whole field is a pure
//! function of its seed. The draw order per asteroid is fixed: size,
//! velocity direction, speed, rotation, spin, outline radius, position
//! (two draws when fresh-spawned, none when placed by fission), then the
//! outline vertices.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::consts::*;
use crate::polar_to_cartesian;

use super::asteroid::Asteroid;
use super::field::FieldBounds;
use super::rng::{SeededValue, float_in, int_in, sequence};

/// Generate one asteroid.
///
/// `spawn` is the fission case: children materialize at the parent's
/// position and skip the safe-zone placement. Callers must pass
/// `min_size <= max_size`, both at least 1; the two call sites
/// ([`field`] and [`split`](super::tick::split)) always do.
pub fn asteroid(
    spawn: Option<Vec2>,
    min_size: u32,
    max_size: u32,
    bounds: FieldBounds,
) -> SeededValue<Asteroid> {
    int_in(min_size, max_size).and_then(move |size| {
        // Larger tiers drift slower: the speed ceiling falls off with size².
        let speed_hi = SPEED_HI / (size * size) as f32;
        float_in(0.0, TAU)
            .zip(float_in(SPEED_LO, speed_hi))
            .zip(float_in(0.0, TAU))
            .zip(float_in(-SPIN_LIMIT, SPIN_LIMIT))
            .and_then(move |(((direction, speed), rotation), rotation_velocity)| {
                let ideal = size as f32 * TIER_RADIUS_STEP;
                float_in((1.0 - RADIUS_JITTER) * ideal, (1.0 + RADIUS_JITTER) * ideal).and_then(
                    move |radius| {
                        position(spawn, radius, bounds).and_then(move |position| {
                            outline(radius).map(move |points| Asteroid {
                                position,
                                velocity: polar_to_cartesian(speed, direction),
                                rotation,
                                rotation_velocity,
                                size,
                                points,
                            })
                        })
                    },
                )
            })
    })
}

/// A fresh field population: 2-3 rocks of the largest tiers, fresh-spawned.
pub fn field(bounds: FieldBounds) -> SeededValue<Vec<Asteroid>> {
    int_in(START_COUNT_MIN, START_COUNT_MAX).and_then(move |count| {
        log::debug!("spawning field population of {count}");
        sequence(
            (0..count)
                .map(|_| asteroid(None, START_SIZE_MIN, START_SIZE_MAX, bounds))
                .collect(),
        )
    })
}

/// Spawn position. Fission children take the parent position verbatim;
/// fresh spawns draw a point anywhere on the field and, if it lands too
/// close to the center, get pushed outward along their own direction to
/// exactly `safe_zone_radius + radius` away.
fn position(spawn: Option<Vec2>, radius: f32, bounds: FieldBounds) -> SeededValue<Vec2> {
    match spawn {
        Some(p) => SeededValue::constant(p),
        None => float_in(-bounds.half_width(), bounds.half_width())
            .zip(float_in(-bounds.half_height(), bounds.half_height()))
            .map(move |(x, y)| {
                let p = Vec2::new(x, y);
                let min_dist = bounds.safe_zone_radius + radius;
                if p.length() < min_dist {
                    p.normalize_or(Vec2::X) * min_dist
                } else {
                    p
                }
            }),
    }
}

/// Irregular star-like outline: 10-16 vertices walked clockwise from the
/// top of the circle, each jittered within 30% of its sector and 20% of
/// the rock radius. The angular jitter bound keeps vertices in angular
/// order, so the polygon never self-intersects.
fn outline(radius: f32) -> SeededValue<Vec<Vec2>> {
    int_in(MIN_VERTICES, MAX_VERTICES).and_then(move |count| {
        let sector = TAU / count as f32;
        let vertices = (1..=count)
            .rev()
            .map(|index| {
                let base_angle = index as f32 * sector;
                float_in(-VERTEX_ANGLE_JITTER * sector, VERTEX_ANGLE_JITTER * sector)
                    .zip(float_in(
                        (1.0 - VERTEX_RADIUS_JITTER) * radius,
                        (1.0 + VERTEX_RADIUS_JITTER) * radius,
                    ))
                    .map(move |(offset, r)| polar_to_cartesian(r, base_angle + offset))
            })
            .collect();
        sequence(vertices)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::Seed;

    fn bounds() -> FieldBounds {
        FieldBounds::new(800.0, 600.0, 100.0)
    }

    #[test]
    fn test_field_population_shape() {
        for seed in 0..20u64 {
            let rocks = field(bounds()).eval(Seed::from_u64(seed));
            assert!((2..=3).contains(&rocks.len()));
            for rock in &rocks {
                assert!((4..=5).contains(&rock.size));
                assert!((10..=16).contains(&rock.points.len()));
            }
        }
    }

    #[test]
    fn test_fresh_spawns_respect_safe_zone() {
        for seed in 0..50u64 {
            let rocks = field(bounds()).eval(Seed::from_u64(seed));
            for rock in &rocks {
                // Drawn radius is at least 95% of the tier ideal
                let min_radius = 0.95 * rock.size as f32 * TIER_RADIUS_STEP;
                let min_dist = bounds().safe_zone_radius + min_radius;
                assert!(
                    rock.position.length() >= min_dist - 1e-3,
                    "rock at {} is inside the safe zone (dist {}, min {})",
                    rock.position,
                    rock.position.length(),
                    min_dist
                );
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = field(bounds()).eval(Seed::from_u64(42));
        let b = field(bounds()).eval(Seed::from_u64(42));
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = field(bounds()).eval(Seed::from_u64(1));
        let b = field(bounds()).eval(Seed::from_u64(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_spawn_position_taken_verbatim() {
        let spawn = Vec2::new(12.0, -34.0);
        for seed in 0..10u64 {
            let rock = asteroid(Some(spawn), 2, 2, bounds()).eval(Seed::from_u64(seed));
            assert_eq!(rock.position, spawn);
            assert_eq!(rock.size, 2);
        }
    }

    #[test]
    fn test_spawn_inside_safe_zone_even_when_asked() {
        // Fission placement may be inside the safe zone; only fresh spawns
        // are pushed out.
        let rock = asteroid(Some(Vec2::ZERO), 1, 1, bounds()).eval(Seed::from_u64(9));
        assert_eq!(rock.position, Vec2::ZERO);
    }

    #[test]
    fn test_size_bounds_hold() {
        for seed in 0..30u64 {
            let rock = asteroid(None, 1, 5, bounds()).eval(Seed::from_u64(seed));
            assert!((1..=5).contains(&rock.size));
            assert!(rock.size >= 1);
        }
    }

    #[test]
    fn test_outline_radii_stay_in_jitter_band() {
        for seed in 0..20u64 {
            let rock = asteroid(None, 3, 3, bounds()).eval(Seed::from_u64(seed));
            let ideal = 3.0 * TIER_RADIUS_STEP;
            let lo = 0.8 * 0.95 * ideal;
            let hi = 1.2 * 1.05 * ideal;
            for p in &rock.points {
                let r = p.length();
                assert!(r >= lo - 1e-3 && r <= hi + 1e-3, "vertex radius {r} out of band");
            }
        }
    }

    #[test]
    fn test_outline_is_a_simple_star() {
        // Vertices must stay in decreasing angular order (clockwise walk),
        // which is what keeps the polygon non-self-intersecting.
        let rock = asteroid(None, 4, 4, bounds()).eval(Seed::from_u64(77));
        let n = rock.points.len() as f32;
        let sector = TAU / n;
        let mut prev = f32::INFINITY;
        for (i, p) in rock.points.iter().enumerate() {
            let mut angle = p.y.atan2(p.x);
            if angle <= 0.0 {
                angle += TAU;
            }
            // First vertex sits near TAU and may jitter past it
            if i == 0 && angle < sector {
                angle += TAU;
            }
            assert!(angle < prev, "vertex {i} out of angular order");
            prev = angle;
        }
    }

    #[test]
    fn test_speed_scales_inverse_square() {
        for seed in 0..20u64 {
            let big = asteroid(None, 5, 5, bounds()).eval(Seed::from_u64(seed));
            let speed = big.velocity.length();
            // Tier 5 range endpoints: 180/25 = 7.2 and 60
            assert!((7.2..=60.0).contains(&speed), "tier-5 speed {speed}");
        }
        for seed in 0..20u64 {
            let small = asteroid(None, 1, 1, bounds()).eval(Seed::from_u64(seed));
            let speed = small.velocity.length();
            assert!((60.0..=180.0).contains(&speed), "tier-1 speed {speed}");
        }
    }
}
