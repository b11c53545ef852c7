//! Collision detection between the bird and the pillar stream
//!
//! Everything is axis-aligned: the bird and every pipe are rectangles, and two
//! rectangles collide when their projections overlap on both axes. Overlaps
//! thinner than [`COLLISION_TOLERANCE`] are forgiven so that grazing a pipe
//! edge does not end the run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pillar::Pillar;
use crate::consts::COLLISION_TOLERANCE;

/// Axis-aligned rectangle in world space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Horizontal extent as `(left, right)`
    #[inline]
    pub fn x_range(&self) -> (f32, f32) {
        (self.min.x, self.max.x)
    }

    /// Vertical extent as `(top, bottom)`
    #[inline]
    pub fn y_range(&self) -> (f32, f32) {
        (self.min.y, self.max.y)
    }

    /// Lenient overlap test on both axes
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlap_1d(self.x_range(), other.x_range()) && overlap_1d(self.y_range(), other.y_range())
    }
}

/// Check whether two closed ranges overlap by at least the tolerance
///
/// Ranges that merely touch, or overlap by less than one unit, do not count.
#[inline]
pub fn overlap_1d(a: (f32, f32), b: (f32, f32)) -> bool {
    !(a.1 - b.0 < COLLISION_TOLERANCE || b.1 - a.0 < COLLISION_TOLERANCE)
}

/// Check the bird against every pipe in the stream
///
/// Pure function: it reads positions only and can be called regardless of the
/// current game phase. Returns on the first overlapping pipe.
pub fn collides(bird: &Bird, pillar: &Pillar) -> bool {
    let bird_box = bird.bounds();
    pillar.gates().any(|gate| bird_box.overlaps(&gate.rect()))
}
