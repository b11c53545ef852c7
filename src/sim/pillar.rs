//! The scrolling pillar stream
//!
//! Pillars enter at the right edge of the world and scroll left at a speed
//! that steps up every [`SPEED_STEP_EVERY`] points. Each gate is a single pipe
//! of fixed size, either hanging from the top or rising from the bottom; the
//! open space beside it is where the bird passes.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// A single obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Left edge, decreases every tick
    pub x: f32,
    /// Top edge of the pipe sprite, fixed at creation
    gap_y: f32,
}

impl Gate {
    pub fn new(x: f32, gap_y: f32) -> Self {
        Self { x, gap_y }
    }

    #[inline]
    pub fn gap_y(&self) -> f32 {
        self.gap_y
    }

    /// Pipe rectangle used for both drawing and collision
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.gap_y, PILLAR_WIDTH, PILLAR_MAX_HEIGHT as f32)
    }

    /// Whether the pipe hangs from the top of the screen
    pub fn from_top(&self) -> bool {
        self.gap_y <= 0.0
    }

    /// Vertical band the bird can safely occupy beside this pipe
    pub fn open_range(&self) -> (f32, f32) {
        if self.from_top() {
            (self.gap_y + PILLAR_MAX_HEIGHT as f32, WORLD_HEIGHT)
        } else {
            (0.0, self.gap_y)
        }
    }
}

/// Ordered stream of gates, oldest (leftmost) first
#[derive(Debug, Clone)]
pub struct Pillar {
    gates: VecDeque<Gate>,
    /// Scroll speed (pixels per tick)
    speed: f32,
    /// Distance the newest gate must travel before the next one spawns
    spacing: f32,
    rng: Pcg32,
}

impl Pillar {
    /// Create a stream seeded for reproducible gate sequences
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }

    /// Create a stream driven by an existing generator
    pub fn with_rng(rng: Pcg32) -> Self {
        let mut pillar = Self {
            gates: VecDeque::new(),
            speed: PILLAR_INIT_SPEED,
            spacing: INITIAL_SPACING,
            rng,
        };
        pillar.spawn_gate();
        pillar
    }

    /// Advance one tick
    ///
    /// Scrolls every gate, retires the ones fully off-screen (adding a point
    /// each and stepping the speed on every tenth point), then spawns a new
    /// gate once the newest one has cleared the spacing threshold. Returns the
    /// number of gates retired.
    ///
    /// # Panics
    ///
    /// Panics if the stream is empty, which `new` and `reset` rule out.
    pub fn update(&mut self, score: &mut u64) -> u32 {
        assert!(!self.gates.is_empty(), "at least one pillar is needed");

        for gate in &mut self.gates {
            gate.x -= self.speed;
        }

        let mut retired = 0;
        while self.gates.front().is_some_and(|g| g.x < -PILLAR_WIDTH) {
            self.gates.pop_front();
            retired += 1;
            *score += 1;
            if score.is_multiple_of(SPEED_STEP_EVERY) {
                self.speed += SPEED_STEP;
                log::debug!("Score {} reached, scroll speed now {}", score, self.speed);
            }
        }

        let needs_spawn = match self.gates.back() {
            Some(newest) => newest.x < WORLD_WIDTH - PILLAR_WIDTH - self.spacing,
            None => true,
        };
        if needs_spawn {
            self.spawn_gate();
            let drawn = self.draw_height();
            self.spacing = (drawn as f32 / PILLAR_MAX_HEIGHT as f32) * 2.0 * BIRD_SIZE;
        }

        retired
    }

    /// Start over with a single fresh gate at the initial speed
    pub fn reset(&mut self) {
        self.gates.clear();
        self.speed = PILLAR_INIT_SPEED;
        self.spacing = INITIAL_SPACING;
        self.spawn_gate();
    }

    /// Push a gate at the right edge with a random pipe length
    fn spawn_gate(&mut self) {
        let from_top = self.rng.random_bool(0.5);
        let height = self.draw_height() as f32;
        let gap_y = if from_top {
            height - PILLAR_MAX_HEIGHT as f32
        } else {
            WORLD_HEIGHT - height
        };
        log::debug!("Spawning pillar (from_top={}, length={})", from_top, height);
        self.gates.push_back(Gate::new(WORLD_WIDTH, gap_y));
    }

    #[inline]
    fn draw_height(&mut self) -> u32 {
        self.rng.random_range(PILLAR_MIN_HEIGHT..=PILLAR_MAX_HEIGHT)
    }

    /// Gates from oldest to newest
    pub fn gates(&self) -> impl Iterator<Item = &Gate> {
        self.gates.iter()
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Current spawn threshold
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn front(&self) -> Option<&Gate> {
        self.gates.front()
    }

    pub fn back(&self) -> Option<&Gate> {
        self.gates.back()
    }

    /// First gate whose right edge is still past `x`
    pub fn next_gate_ahead(&self, x: f32) -> Option<&Gate> {
        self.gates.iter().find(|g| g.x + PILLAR_WIDTH > x)
    }

    #[cfg(test)]
    pub(crate) fn replace_gates(&mut self, gates: impl IntoIterator<Item = Gate>) {
        self.gates = gates.into_iter().collect();
    }
}
