//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame)
//! - Seeded RNG only
//! - Stable iteration order (pillars oldest first)
//! - No rendering or platform dependencies

pub mod bird;
pub mod collision;
pub mod pillar;
pub mod state;
pub mod tick;

pub use bird::Bird;
pub use collision::{Rect, collides, overlap_1d};
pub use pillar::{Gate, Pillar};
pub use state::{CrashCause, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
