//! The player-controlled bird
//!
//! Discrete-time integrator: one call to [`Bird::update`] per tick, with
//! velocity in pixels per tick. Positions are never clamped here; the state
//! machine reads [`Bird::hit_top`] / [`Bird::hit_bottom`] after each step.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Vertical position the bird starts from (centered)
pub const BIRD_START_Y: f32 = (WORLD_HEIGHT - BIRD_SIZE) / 2.0;

/// The bird entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top edge (pixels, y grows downward)
    y: f32,
    /// Vertical velocity (pixels per tick, positive is down)
    vy: f32,
    /// Current animation frame in `[0, BIRD_FRAMES)`
    frame: usize,
    /// Ticks since the last reset, drives the flap animation
    frame_counter: u32,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Bird {
    pub fn new() -> Self {
        Self {
            y: BIRD_START_Y,
            vy: 0.0,
            frame: 0,
            frame_counter: 0,
        }
    }

    /// Advance one tick: accumulate gravity, move, animate
    pub fn update(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.vy += GRAVITY;

        // Once well below the floor, stop sinking; an upward velocity still applies
        if self.y < WORLD_HEIGHT + BIRD_SIZE || self.vy < 0.0 {
            self.y += self.vy;
        }

        if self.frame_counter % IDLE_SPACE == 0 {
            self.frame = (self.frame + 1) % BIRD_FRAMES;
        }
    }

    /// Flap: replace the current velocity with the jump impulse
    #[inline]
    pub fn jump(&mut self) {
        self.vy = -JUMP_SPEED;
    }

    /// Back to the start position, at rest
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn hit_top(&self) -> bool {
        self.y < 0.0
    }

    #[inline]
    pub fn hit_bottom(&self) -> bool {
        self.y + BIRD_SIZE > WORLD_HEIGHT
    }

    /// Bounding box at the fixed screen column
    pub fn bounds(&self) -> Rect {
        Rect::new(BIRD_X, self.y, BIRD_SIZE, BIRD_SIZE)
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.vy
    }

    /// Animation frame index for the sprite lookup
    #[inline]
    pub fn frame(&self) -> usize {
        self.frame
    }

    #[cfg(test)]
    pub(crate) fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    #[cfg(test)]
    pub(crate) fn set_velocity(&mut self, vy: f32) {
        self.vy = vy;
    }
}
