//! Flappy Bird entry point
//!
//! Native headless runner: drives the simulation at a fixed frame rate with
//! the autopilot at the controls and logs what happens. A windowed frontend
//! would feed real key presses into the same loop.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use flappy_bird::Settings;
use flappy_bird::platform::{Key, map_keys};
use flappy_bird::consts::BIRD_FRAMES;
use flappy_bird::renderer::{SpriteKind, draw_list, sprite_vertices};
use flappy_bird::sim::{GameEvent, GameState, tick};
use flappy_bird::ui::{overlay_lines, score_label};

/// One minute of play at the default rate
const DEFAULT_HEADLESS_TICKS: u64 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Flappy Bird (headless) starting...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Settings::FILE_NAME.to_string());
    let mut settings = Settings::load_from(&path);
    if !settings.autopilot {
        log::info!("No keyboard in headless mode, enabling autopilot");
        settings.autopilot = true;
    }

    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let seed = settings.resolve_seed(clock_seed);
    log::info!("Seed: {}", seed);

    let sprites = [SpriteKind::Background, SpriteKind::Pillar]
        .into_iter()
        .chain((0..BIRD_FRAMES).map(SpriteKind::Bird));
    for kind in sprites {
        let path = settings.asset_path(kind);
        log::debug!("Texture {}: {}", kind.texture_index(), path.display());
    }

    let mut state = GameState::new(seed);
    let max_ticks = settings.max_ticks.unwrap_or(DEFAULT_HEADLESS_TICKS);
    let frame_time = settings.frame_duration();
    let mut runs = 0u32;

    for frame in 0..max_ticks {
        let started = Instant::now();

        let keys: &[Key] = if frame + 1 == max_ticks { &[Key::Q] } else { &[] };
        let input = map_keys(state.phase, keys, settings.autopilot);
        if input.quit {
            break;
        }

        tick(&mut state, &input.tick);

        for event in state.drain_events() {
            match event {
                GameEvent::PhaseChanged { to, .. } => {
                    if event.starts_run() {
                        runs += 1;
                    }
                    for line in overlay_lines(to) {
                        log::debug!("[overlay] {}", line);
                    }
                }
                GameEvent::Crashed { cause } => {
                    log::info!("Run {} over ({:?}), {}", runs, cause, score_label(state.score));
                }
                GameEvent::SpeedUp { speed } => log::debug!("Scroll speed {}", speed),
                GameEvent::GateCleared { .. } | GameEvent::Jumped => {}
            }
        }

        let vertices = sprite_vertices(&draw_list(&state));
        log::trace!("Frame {}: {} vertices", frame, vertices.len());

        if settings.realtime {
            let elapsed = started.elapsed();
            if elapsed < frame_time {
                std::thread::sleep(frame_time - elapsed);
            }
        }
    }

    println!(
        "{} runs, best {}, current {}",
        runs,
        state.best_score.max(state.score),
        score_label(state.score)
    );
}
