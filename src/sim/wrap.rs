//! Toroidal wrap engine
//!
//! A shape near a field edge must also exist at the opposite edge for
//! rendering and containment to behave as if the field were a torus. The
//! engine asks a shape which boundaries it crosses and emits the translated
//! duplicates needed: one per crossed axis, plus the diagonal copy when a
//! corner is straddled.
//!
//! Implemented once per shape kind (polygon, segment, triangle) via the
//! [`Wrapped`] trait and applied per instance with [`wrapped_copies`].

use glam::Vec2;

use super::field::FieldBounds;

/// Boundary-crossing predicates plus a rigid translation.
///
/// Left/right (and top/bottom) are mutually exclusive for any shape smaller
/// than the field, which all rock geometry is.
pub trait Wrapped: Sized {
    fn crosses_left(&self, bounds: &FieldBounds) -> bool;
    fn crosses_right(&self, bounds: &FieldBounds) -> bool;
    fn crosses_top(&self, bounds: &FieldBounds) -> bool;
    fn crosses_bottom(&self, bounds: &FieldBounds) -> bool;

    /// The same shape translated by `offset`.
    fn translated(&self, offset: Vec2) -> Self;
}

/// The shape itself plus the 0-3 translated duplicates needed on the torus.
///
/// A shape sticking out past the left edge gains a copy one field-width to
/// the right, and symmetrically for the other directions; crossing both an
/// x and a y boundary additionally yields the diagonal copy.
pub fn wrapped_copies<S: Wrapped>(shape: S, bounds: &FieldBounds) -> Vec<S> {
    let dx = if shape.crosses_left(bounds) {
        bounds.width
    } else if shape.crosses_right(bounds) {
        -bounds.width
    } else {
        0.0
    };
    let dy = if shape.crosses_bottom(bounds) {
        bounds.height
    } else if shape.crosses_top(bounds) {
        -bounds.height
    } else {
        0.0
    };

    let mut copies = Vec::with_capacity(4);
    if dx != 0.0 {
        copies.push(shape.translated(Vec2::new(dx, 0.0)));
    }
    if dy != 0.0 {
        copies.push(shape.translated(Vec2::new(0.0, dy)));
    }
    if dx != 0.0 && dy != 0.0 {
        copies.push(shape.translated(Vec2::new(dx, dy)));
    }
    copies.insert(0, shape);
    copies
}
