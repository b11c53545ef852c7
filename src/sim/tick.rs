//! Fixed timestep simulation tick
//!
//! The game state machine: one call per frame advances the session by one
//! tick, applying that frame's input first and physics second.

use super::collision::collides;
use super::state::{CrashCause, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Distance above the bottom of the open band at which the autopilot flaps
const AUTOPILOT_MARGIN: f32 = 10.0;

/// Input commands for a single tick (edge-triggered)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Leave the title screen
    pub start: bool,
    /// Flap
    pub jump: bool,
    /// Pause toggle
    pub pause: bool,
    /// Start a new run after a crash
    pub restart: bool,
    /// Idle/demo mode - the bird flies itself and runs restart automatically
    pub autopilot: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Pending => {
            if input.start || input.autopilot {
                state.set_phase(GamePhase::Running);
            }
        }
        GamePhase::Running => {
            step_running(state, input);
            // A crash on the same tick wins over the pause
            if input.pause && state.phase == GamePhase::Running {
                state.set_phase(GamePhase::Paused);
            }
        }
        GamePhase::Paused => {
            if input.pause {
                state.set_phase(GamePhase::Running);
            }
        }
        GamePhase::Ending => {
            if input.restart || input.autopilot {
                state.restart();
                state.set_phase(GamePhase::Running);
            }
        }
    }
}

/// Physics and crash checks for a running tick
fn step_running(state: &mut GameState, input: &TickInput) {
    if input.jump || (input.autopilot && autopilot_wants_jump(state)) {
        state.bird.jump();
        state.events.push(GameEvent::Jumped);
    }

    state.time_ticks += 1;
    state.bird.update();

    let score_before = state.score;
    let speed_before = state.pillar.speed();
    let retired = state.pillar.update(&mut state.score);
    if retired > 0 {
        for score in score_before + 1..=state.score {
            state.events.push(GameEvent::GateCleared { score });
        }
        if state.pillar.speed() > speed_before {
            let speed = state.pillar.speed();
            log::info!("Speed up to {} at score {}", speed, state.score);
            state.events.push(GameEvent::SpeedUp { speed });
        }
    }

    if let Some(cause) = crash_cause(state) {
        log::info!(
            "Crashed into {:?} after {} ticks with score {}",
            cause,
            state.time_ticks,
            state.score
        );
        state.best_score = state.best_score.max(state.score);
        state.events.push(GameEvent::Crashed { cause });
        state.set_phase(GamePhase::Ending);
    }
}

/// Check bounds first, then pipes
fn crash_cause(state: &GameState) -> Option<CrashCause> {
    if state.bird.hit_top() {
        Some(CrashCause::Ceiling)
    } else if state.bird.hit_bottom() {
        Some(CrashCause::Floor)
    } else if collides(&state.bird, &state.pillar) {
        Some(CrashCause::Pillar)
    } else {
        None
    }
}

/// Simple demo pilot: flap when about to drop below the next opening
///
/// Only flaps while falling, so a single flap plays out before the next one.
pub fn autopilot_wants_jump(state: &GameState) -> bool {
    let bird = &state.bird;
    if bird.velocity() < 0.0 {
        return false;
    }

    let floor = state
        .pillar
        .next_gate_ahead(BIRD_X)
        .map(|gate| gate.open_range().1)
        .unwrap_or(WORLD_HEIGHT)
        .min(WORLD_HEIGHT);

    let predicted_bottom = bird.y() + bird.velocity() + GRAVITY + BIRD_SIZE;
    predicted_bottom > floor - AUTOPILOT_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bird::BIRD_START_Y;
    use crate::sim::pillar::Gate;

    fn press(f: impl FnOnce(&mut TickInput)) -> TickInput {
        let mut input = TickInput::default();
        f(&mut input);
        input
    }

    /// Keep pipes far to the right so only the bounds matter
    fn clear_sky(state: &mut GameState) {
        state
            .pillar
            .replace_gates([Gate::new(WORLD_WIDTH * 10.0, WORLD_HEIGHT)]);
    }

    #[test]
    fn test_pending_waits_for_start() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Pending);

        // Tick without start - should stay in Pending and not move
        tick(&mut state, &TickInput::default());
        tick(&mut state, &press(|i| i.jump = true));
        assert_eq!(state.phase, GamePhase::Pending);
        assert_eq!(state.bird.y(), BIRD_START_Y);

        tick(&mut state, &press(|i| i.start = true));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_full_run_cycle() {
        let mut state = GameState::new(12345);
        clear_sky(&mut state);
        tick(&mut state, &press(|i| i.start = true));
        assert_eq!(state.phase, GamePhase::Running);

        // Fall until the floor ends the run
        let mut ticks = 0;
        while state.phase == GamePhase::Running {
            tick(&mut state, &TickInput::default());
            ticks += 1;
            assert!(ticks < 1_000, "bird never reached the floor");
        }
        assert_eq!(state.phase, GamePhase::Ending);
        assert!(state.bird.hit_bottom());
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::Crashed { cause: CrashCause::Floor })
        );

        // Frozen while ending
        let y = state.bird.y();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.bird.y(), y);

        tick(&mut state, &press(|i| i.restart = true));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.bird.y(), BIRD_START_Y);
        assert_eq!(state.bird.velocity(), 0.0);
        assert_eq!(state.pillar.len(), 1);
    }

    #[test]
    fn test_pause_toggle_freezes_physics() {
        let mut state = GameState::new(12345);
        tick(&mut state, &press(|i| i.start = true));
        tick(&mut state, &TickInput::default());

        let pause = press(|i| i.pause = true);
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);

        let y = state.bird.y();
        let x = state.pillar.front().map(|g| g.x);
        for _ in 0..10 {
            tick(&mut state, &press(|i| i.jump = true));
        }
        assert_eq!(state.bird.y(), y);
        assert_eq!(state.pillar.front().map(|g| g.x), x);

        // Unpause
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_pause_tick_still_steps_physics() {
        let mut state = GameState::new(12345);
        clear_sky(&mut state);
        tick(&mut state, &press(|i| i.start = true));
        tick(&mut state, &TickInput::default());

        let y = state.bird.y();
        let x = state.pillar.front().map(|g| g.x);
        tick(
            &mut state,
            &press(|i| {
                i.pause = true;
                i.jump = true;
            }),
        );
        assert_eq!(state.phase, GamePhase::Paused);
        assert!((state.bird.velocity() - (-JUMP_SPEED + GRAVITY)).abs() < 1e-5);
        assert!(state.bird.y() < y);
        assert_eq!(
            state.pillar.front().map(|g| g.x),
            x.map(|x| x - PILLAR_INIT_SPEED)
        );
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_crash_on_pause_tick_ends_run() {
        let mut state = GameState::new(3);
        state.pillar.replace_gates([Gate::new(BIRD_X + 5.0, BIRD_START_Y)]);
        tick(&mut state, &press(|i| i.start = true));
        tick(&mut state, &press(|i| i.pause = true));
        assert_eq!(state.phase, GamePhase::Ending);
    }

    #[test]
    fn test_jump_while_running() {
        let mut state = GameState::new(12345);
        clear_sky(&mut state);
        tick(&mut state, &press(|i| i.start = true));
        tick(&mut state, &press(|i| i.jump = true));
        assert!((state.bird.velocity() - (-JUMP_SPEED + GRAVITY)).abs() < 1e-5);
        assert!(state.bird.y() < BIRD_START_Y);
        assert!(state.events.contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_ceiling_ends_run() {
        let mut state = GameState::new(3);
        clear_sky(&mut state);
        tick(&mut state, &press(|i| i.start = true));
        let jump = press(|i| i.jump = true);
        let mut ticks = 0;
        while state.phase == GamePhase::Running {
            tick(&mut state, &jump);
            ticks += 1;
            assert!(ticks < 1_000);
        }
        assert!(state.bird.hit_top());
        assert!(
            state
                .events
                .contains(&GameEvent::Crashed { cause: CrashCause::Ceiling })
        );
    }

    #[test]
    fn test_pillar_ends_run() {
        let mut state = GameState::new(3);
        // Pipe rising from the bottom right in front of the bird
        state.pillar.replace_gates([Gate::new(BIRD_X + 5.0, BIRD_START_Y)]);
        tick(&mut state, &press(|i| i.start = true));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Ending);
        assert!(
            state
                .events
                .contains(&GameEvent::Crashed { cause: CrashCause::Pillar })
        );
    }

    #[test]
    fn test_score_events_and_best_score() {
        let mut state = GameState::new(8);
        state.pillar.replace_gates([
            Gate::new(-PILLAR_WIDTH - 0.5, 0.0),
            Gate::new(WORLD_WIDTH, WORLD_HEIGHT),
        ]);
        state.score = 9;
        tick(&mut state, &press(|i| i.start = true));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 10);

        let events = state.drain_events();
        assert!(events.contains(&GameEvent::GateCleared { score: 10 }));
        assert!(events.contains(&GameEvent::SpeedUp {
            speed: PILLAR_INIT_SPEED + SPEED_STEP
        }));

        // Fall out and check best score survives the restart
        while state.phase == GamePhase::Running {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.best_score, 10);
        tick(&mut state, &press(|i| i.restart = true));
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 10);
    }

    #[test]
    fn test_autopilot_flaps_only_when_low() {
        let mut state = GameState::new(1);
        clear_sky(&mut state);
        state.phase = GamePhase::Running;

        state.bird.set_y(100.0);
        state.bird.set_velocity(1.0);
        assert!(!autopilot_wants_jump(&state));

        state.bird.set_y(WORLD_HEIGHT - BIRD_SIZE - 5.0);
        assert!(autopilot_wants_jump(&state));

        // Already rising
        state.bird.set_velocity(-3.0);
        assert!(!autopilot_wants_jump(&state));
    }

    #[test]
    fn test_autopilot_starts_and_restarts() {
        let mut state = GameState::new(1);
        let auto = press(|i| i.autopilot = true);
        tick(&mut state, &auto);
        assert_eq!(state.phase, GamePhase::Running);

        state.phase = GamePhase::Ending;
        state.score = 4;
        tick(&mut state, &auto);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_autopilot_stays_off_the_floor() {
        let mut state = GameState::new(77);
        clear_sky(&mut state);
        let auto = press(|i| i.autopilot = true);
        for _ in 0..300 {
            tick(&mut state, &auto);
            // Keep the sky clear so only the bounds are in play
            clear_sky(&mut state);
        }
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            press(|i| i.start = true),
            TickInput::default(),
            press(|i| i.jump = true),
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.bird, state2.bird);
        assert!(state1.pillar.gates().eq(state2.pillar.gates()));
    }
}
