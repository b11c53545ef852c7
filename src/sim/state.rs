//! Game state and core simulation types
//!
//! A single [`GameState`] owns everything a run needs: the phase, the score,
//! the bird and the pillar stream. The frontend reads it every frame and hands
//! it to [`tick`](super::tick::tick) together with that frame's input.

use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pillar::Pillar;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first start input
    #[default]
    Pending,
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
    /// Run ended, waiting for restart
    Ending,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Pending => "Pending",
            GamePhase::Running => "Running",
            GamePhase::Paused => "Paused",
            GamePhase::Ending => "Ending",
        }
    }
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Flew above the top of the screen
    Ceiling,
    /// Fell below the bottom of the screen
    Floor,
    /// Hit a pipe
    Pillar,
}

/// Things that happened during a tick, for sound/UI hooks and logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    Jumped,
    /// A pillar scrolled off-screen; `score` is the new total
    GateCleared { score: u64 },
    /// Scroll speed stepped up
    SpeedUp { speed: f32 },
    Crashed { cause: CrashCause },
}

impl GameEvent {
    /// Whether this event begins a new run (not a resume from pause)
    pub fn starts_run(&self) -> bool {
        matches!(
            self,
            GameEvent::PhaseChanged {
                from: GamePhase::Pending | GamePhase::Ending,
                to: GamePhase::Running,
            }
        )
    }
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Pillars cleared this run
    pub score: u64,
    /// Best score since the process started (not persisted)
    pub best_score: u64,
    /// Simulation tick counter (running ticks only)
    pub time_ticks: u64,
    pub bird: Bird,
    pub pillar: Pillar,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Pending,
            score: 0,
            best_score: 0,
            time_ticks: 0,
            bird: Bird::new(),
            pillar: Pillar::new(seed),
            events: Vec::new(),
        }
    }

    /// Move to `to`, recording the change
    pub fn set_phase(&mut self, to: GamePhase) {
        if self.phase == to {
            return;
        }
        let from = self.phase;
        self.phase = to;
        log::info!("Phase {} -> {}", from.as_str(), to.as_str());
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    /// Put bird, pillars and score back to their starting values
    ///
    /// The pillar generator is not reseeded, so consecutive runs see
    /// different pillars.
    pub fn restart(&mut self) {
        self.bird.reset();
        self.pillar.reset();
        self.score = 0;
        self.time_ticks = 0;
        log::info!("Run restarted (best so far: {})", self.best_score);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bird::BIRD_START_Y;

    #[test]
    fn test_new_state() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Pending);
        assert_eq!(state.score, 0);
        assert_eq!(state.pillar.len(), 1);
        assert_eq!(state.bird.y(), BIRD_START_Y);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_set_phase_records_event_once() {
        let mut state = GameState::new(1);
        state.set_phase(GamePhase::Running);
        state.set_phase(GamePhase::Running);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PhaseChanged {
                from: GamePhase::Pending,
                to: GamePhase::Running
            }]
        );
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_resume_is_not_a_new_run() {
        let change = |from, to| GameEvent::PhaseChanged { from, to };
        assert!(change(GamePhase::Pending, GamePhase::Running).starts_run());
        assert!(change(GamePhase::Ending, GamePhase::Running).starts_run());
        assert!(!change(GamePhase::Paused, GamePhase::Running).starts_run());
        assert!(!change(GamePhase::Running, GamePhase::Ending).starts_run());
        assert!(!GameEvent::Jumped.starts_run());
    }

    #[test]
    fn test_same_seed_same_pillars() {
        let a = GameState::new(99);
        let b = GameState::new(99);
        assert!(a.pillar.gates().eq(b.pillar.gates()));
    }

    #[test]
    fn test_phase_serializes_by_name() {
        let json = serde_json::to_string(&GamePhase::Paused).unwrap();
        assert_eq!(json, "\"Paused\"");
    }
}
