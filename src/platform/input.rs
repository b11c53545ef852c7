//! Keyboard mapping
//!
//! The frontend reports the keys pressed this frame (edge-triggered, not
//! held). One key does different things depending on the phase: Space starts
//! the game, flaps while running and restarts after a crash.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, TickInput};

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    Up,
    Escape,
    P,
    Q,
}

impl Key {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "space" | " " => Some(Key::Space),
            "up" | "arrowup" => Some(Key::Up),
            "escape" | "esc" => Some(Key::Escape),
            "p" => Some(Key::P),
            "q" => Some(Key::Q),
            _ => None,
        }
    }
}

/// Commands for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub tick: TickInput,
    /// Leave the frame loop
    pub quit: bool,
}

/// Map this frame's key presses to commands for the given phase
pub fn map_keys(phase: GamePhase, pressed: &[Key], autopilot: bool) -> FrameInput {
    let mut frame = FrameInput {
        tick: TickInput {
            autopilot,
            ..Default::default()
        },
        quit: false,
    };

    for key in pressed {
        match key {
            Key::Space | Key::Up => match phase {
                GamePhase::Pending => frame.tick.start = true,
                GamePhase::Running => frame.tick.jump = true,
                GamePhase::Ending => frame.tick.restart = true,
                GamePhase::Paused => {}
            },
            Key::Escape | Key::P => frame.tick.pause = true,
            Key::Q => frame.quit = true,
        }
    }

    frame
}
