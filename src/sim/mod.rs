//! Deterministic simulation module
//!
//! All asteroid logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, threaded explicitly through [`rng::SeededValue`]
//! - No hidden mutable state; every operation maps inputs to new values
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod field;
pub mod generator;
pub mod particles;
pub mod rng;
pub mod shape;
pub mod tick;
pub mod wrap;

pub use asteroid::Asteroid;
pub use field::FieldBounds;
pub use particles::{Particle, segment_particles};
pub use rng::{Seed, SeededValue, float_in, int_in, sequence};
pub use shape::{Polygon, Segment, Triangle};
pub use tick::{SplitOutcome, split, tick};
pub use wrap::{Wrapped, wrapped_copies};
