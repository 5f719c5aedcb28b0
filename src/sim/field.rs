//! Play-field bounds and toroidal position wrap
//!
//! The field is a rectangle centered on the origin whose opposite edges are
//! identified: exiting one edge re-enters from the other.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Field dimensions plus the spawn-exclusion radius around the center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub width: f32,
    pub height: f32,
    /// Rocks never spawn closer than this to the field center
    pub safe_zone_radius: f32,
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            safe_zone_radius: SAFE_ZONE_RADIUS,
        }
    }
}

impl FieldBounds {
    pub fn new(width: f32, height: f32, safe_zone_radius: f32) -> Self {
        Self {
            width,
            height,
            safe_zone_radius,
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Translate `v` by whole field dimensions until it lies in
    /// `[-w/2, w/2] × [-h/2, h/2]`. Terminates for any finite input since
    /// each shift reduces the out-of-range magnitude by a full dimension.
    pub fn wrap_point(&self, mut v: Vec2) -> Vec2 {
        let hw = self.half_width();
        let hh = self.half_height();
        while v.x > hw {
            v.x -= self.width;
        }
        while v.x < -hw {
            v.x += self.width;
        }
        while v.y > hh {
            v.y -= self.height;
        }
        while v.y < -hh {
            v.y += self.height;
        }
        v
    }
}
