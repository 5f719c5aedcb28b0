//! Asteroid value type and derived geometry
//!
//! An asteroid is an immutable value; time-stepping and fission both build
//! new ones. The outline is stored in the local (unrotated, untranslated)
//! frame and fixed at creation; everything absolute is derived on demand.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rotate_cw;

use super::field::FieldBounds;
use super::shape::{Polygon, Segment, Triangle};
use super::wrap::wrapped_copies;

/// One rock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    /// World position, kept inside field bounds by `tick`
    pub position: Vec2,
    /// World velocity, constant between integration steps
    pub velocity: Vec2,
    /// Current orientation (radians, clockwise-positive, unbounded)
    pub rotation: f32,
    /// Spin (radians/second)
    pub rotation_velocity: f32,
    /// Size tier; splitting decrements it, tier 0 means fully destroyed
    pub size: u32,
    /// Outline in the local frame, a simple closed polygon around the origin
    pub points: Vec<Vec2>,
}

impl Asteroid {
    /// Outline vertices in absolute coordinates: rotated, then translated.
    pub fn absolute_points(&self) -> Vec<Vec2> {
        self.points
            .iter()
            .map(|p| self.position + rotate_cw(self.rotation, *p))
            .collect()
    }

    /// Outline edges in absolute coordinates, closing last-to-first.
    /// Empty outline yields no segments.
    pub fn segments(&self) -> Vec<Segment> {
        let abs = self.absolute_points();
        (0..abs.len())
            .map(|i| Segment::new(abs[i], abs[(i + 1) % abs.len()]))
            .collect()
    }

    /// Fan triangulation: one triangle per edge, apex at the rock's center.
    pub fn triangles(&self) -> Vec<Triangle> {
        self.segments()
            .into_iter()
            .map(|s| Triangle::new(s.a, s.b, self.position))
            .collect()
    }

    /// True if `point` lies inside the rock, testing against the
    /// torus-adjacent duplicates of every fan triangle so containment holds
    /// across field edges. False for an empty outline.
    pub fn lies_inside(&self, point: Vec2, bounds: &FieldBounds) -> bool {
        self.triangles()
            .into_iter()
            .flat_map(|t| wrapped_copies(t, bounds))
            .any(|t| t.contains(point))
    }

    /// Outline edges with their torus duplicates, for edge-anchored
    /// collaborators (particle spawning, edge rendering).
    pub fn wrapped_segments(&self, bounds: &FieldBounds) -> Vec<Segment> {
        self.segments()
            .into_iter()
            .flat_map(|s| wrapped_copies(s, bounds))
            .collect()
    }

    /// The absolute outline plus its torus duplicates, ready to draw.
    pub fn wrapped_outlines(&self, bounds: &FieldBounds) -> Vec<Polygon> {
        wrapped_copies(Polygon(self.absolute_points()), bounds)
    }
}
