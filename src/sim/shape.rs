//! Derived shape views in absolute coordinates
//!
//! Segments and triangles are transient: recomputed on demand from an
//! asteroid's rotated-and-translated outline, never stored. A polygon is
//! the full absolute outline handed to renderers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::FieldBounds;
use super::wrap::Wrapped;

/// One polygon edge in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.a + self.b) * 0.5
    }
}

impl Wrapped for Segment {
    fn crosses_left(&self, bounds: &FieldBounds) -> bool {
        self.a.x.min(self.b.x) < -bounds.half_width()
    }

    fn crosses_right(&self, bounds: &FieldBounds) -> bool {
        self.a.x.max(self.b.x) > bounds.half_width()
    }

    fn crosses_top(&self, bounds: &FieldBounds) -> bool {
        self.a.y.max(self.b.y) > bounds.half_height()
    }

    fn crosses_bottom(&self, bounds: &FieldBounds) -> bool {
        self.a.y.min(self.b.y) < -bounds.half_height()
    }

    fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.a + offset, self.b + offset)
    }
}

/// A fan triangle: one outline edge plus the rock's center as apex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    /// Same-sign cross-product containment test; points on an edge count
    /// as inside. Works for either winding order.
    pub fn contains(&self, p: Vec2) -> bool {
        let d1 = (p - self.a).perp_dot(self.b - self.a);
        let d2 = (p - self.b).perp_dot(self.c - self.b);
        let d3 = (p - self.c).perp_dot(self.a - self.c);

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }
}

impl Wrapped for Triangle {
    fn crosses_left(&self, bounds: &FieldBounds) -> bool {
        self.a.x.min(self.b.x).min(self.c.x) < -bounds.half_width()
    }

    fn crosses_right(&self, bounds: &FieldBounds) -> bool {
        self.a.x.max(self.b.x).max(self.c.x) > bounds.half_width()
    }

    fn crosses_top(&self, bounds: &FieldBounds) -> bool {
        self.a.y.max(self.b.y).max(self.c.y) > bounds.half_height()
    }

    fn crosses_bottom(&self, bounds: &FieldBounds) -> bool {
        self.a.y.min(self.b.y).min(self.c.y) < -bounds.half_height()
    }

    fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.a + offset, self.b + offset, self.c + offset)
    }
}

/// An absolute outline, ordered, closed last-to-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon(pub Vec<Vec2>);

impl Wrapped for Polygon {
    fn crosses_left(&self, bounds: &FieldBounds) -> bool {
        self.0.iter().any(|p| p.x < -bounds.half_width())
    }

    fn crosses_right(&self, bounds: &FieldBounds) -> bool {
        self.0.iter().any(|p| p.x > bounds.half_width())
    }

    fn crosses_top(&self, bounds: &FieldBounds) -> bool {
        self.0.iter().any(|p| p.y > bounds.half_height())
    }

    fn crosses_bottom(&self, bounds: &FieldBounds) -> bool {
        self.0.iter().any(|p| p.y < -bounds.half_height())
    }

    fn translated(&self, offset: Vec2) -> Self {
        Polygon(self.0.iter().map(|p| *p + offset).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::wrap::wrapped_copies;

    #[test]
    fn test_triangle_contains_interior_point() {
        let t = Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0));
        assert!(t.contains(Vec2::new(2.0, 2.0)));
        assert!(!t.contains(Vec2::new(8.0, 8.0)));
        assert!(!t.contains(Vec2::new(-1.0, 5.0)));
    }

    #[test]
    fn test_triangle_contains_either_winding() {
        let ccw = Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0));
        let cw = Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), Vec2::new(10.0, 0.0));
        let p = Vec2::new(3.0, 3.0);
        assert!(ccw.contains(p));
        assert!(cw.contains(p));
    }

    #[test]
    fn test_triangle_edge_point_counts_as_inside() {
        let t = Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0));
        assert!(t.contains(Vec2::new(5.0, 0.0)));
        assert!(t.contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_polygon_wraps_like_its_vertices() {
        let bounds = FieldBounds::new(800.0, 600.0, 100.0);
        let poly = Polygon(vec![
            Vec2::new(390.0, 290.0),
            Vec2::new(410.0, 290.0),
            Vec2::new(410.0, 310.0),
            Vec2::new(390.0, 310.0),
        ]);
        // Straddles the top-right corner: original + 3 duplicates
        let copies = wrapped_copies(poly, &bounds);
        assert_eq!(copies.len(), 4);
        assert_eq!(copies[3].0[0], Vec2::new(-410.0, -310.0));
    }
}
