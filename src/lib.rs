//! Flappy Bird - A side-scrolling arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pillar stream, collisions, game state)
//! - `renderer`: Draw list and sprite quads for an external renderer
//! - `platform`: Input mapping from raw keys to tick commands
//! - `ui`: HUD text (score label, overlays)
//! - `settings`: JSON-backed runtime settings

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical world width in pixels
    pub const WORLD_WIDTH: f32 = 400.0;
    /// Logical world height in pixels
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Fixed frame rate; one simulation tick per frame
    pub const FPS: u32 = 60;

    /// Bird sprite edge length (square)
    pub const BIRD_SIZE: f32 = WORLD_WIDTH / 10.0;
    /// Fixed horizontal screen position of the bird's left edge
    pub const BIRD_X: f32 = BIRD_SIZE;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.61;
    /// Upward speed set by a jump (applied as negative velocity)
    pub const JUMP_SPEED: f32 = 9.8;
    /// Number of animation frames
    pub const BIRD_FRAMES: usize = 4;
    /// Ticks between animation frame advances
    pub const IDLE_SPACE: u32 = FPS / 6;

    /// Pillar sprite width
    pub const PILLAR_WIDTH: f32 = WORLD_WIDTH / 10.0;
    /// Shortest pipe that pokes into the screen
    pub const PILLAR_MIN_HEIGHT: u32 = WORLD_HEIGHT as u32 / 4;
    /// Pipe sprite height (and longest pipe)
    pub const PILLAR_MAX_HEIGHT: u32 = WORLD_HEIGHT as u32 / 2;
    /// Scroll speed at the start of a run (pixels per tick)
    pub const PILLAR_INIT_SPEED: f32 = 1.0;
    /// Scroll speed added on every speed step
    pub const SPEED_STEP: f32 = 0.5;
    /// Score interval between speed steps
    pub const SPEED_STEP_EVERY: u64 = 10;
    /// Spacing before the second pillar of a run
    pub const INITIAL_SPACING: f32 = BIRD_SIZE * 1.5;

    /// Overlaps thinner than this are forgiven
    pub const COLLISION_TOLERANCE: f32 = 1.0;
}
