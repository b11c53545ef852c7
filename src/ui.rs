//! HUD text and layout
//!
//! Text is drawn by the frontend; this module decides what to say and where.
//! Widths come from the frontend's font through a measuring callback.

use glam::Vec2;

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::GamePhase;

const PENDING_LINES: &[&str] = &[
    "<SPACE> -> JUMP",
    "<ESC> -> PAUSE",
    "<Q> -> QUIT",
    "press <SPACE> to start",
];

const PAUSED_LINES: &[&str] = &["PAUSED", "press <ESC> to resume"];

const ENDING_LINES: &[&str] = &["Game Over", "press <SPACE> to continue", "press <Q> to quit"];

/// Widest score label the HUD reserves room for
const SCORE_TEMPLATE: &str = "Score: xxxxxx";

/// Score label shown in the top-right corner
pub fn score_label(score: u64) -> String {
    format!("score: {}", score)
}

/// Centered overlay text for the phase (empty while running)
pub fn overlay_lines(phase: GamePhase) -> &'static [&'static str] {
    match phase {
        GamePhase::Pending => PENDING_LINES,
        GamePhase::Paused => PAUSED_LINES,
        GamePhase::Ending => ENDING_LINES,
        GamePhase::Running => &[],
    }
}

/// A line of text at its top-left position
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine<'a> {
    pub pos: Vec2,
    pub text: &'a str,
}

/// Stack lines vertically around the screen center, each centered horizontally
pub fn center_lines<'a>(
    lines: &[&'a str],
    line_height: f32,
    measure: impl Fn(&str) -> f32,
) -> Vec<TextLine<'a>> {
    let mut y = (WORLD_HEIGHT - line_height * lines.len() as f32) / 2.0;
    lines
        .iter()
        .map(|&text| {
            let x = (WORLD_WIDTH - measure(text)) / 2.0;
            let line = TextLine {
                pos: Vec2::new(x, y),
                text,
            };
            y += line_height;
            line
        })
        .collect()
}

/// Score label anchored to the top-right corner
pub fn score_line(label: &str, measure: impl Fn(&str) -> f32) -> TextLine<'_> {
    TextLine {
        pos: Vec2::new(WORLD_WIDTH - measure(SCORE_TEMPLATE), 0.0),
        text: label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(text: &str) -> f32 {
        text.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(0), "score: 0");
        assert_eq!(score_label(42), "score: 42");
    }

    #[test]
    fn test_overlay_per_phase() {
        assert!(overlay_lines(GamePhase::Running).is_empty());
        assert_eq!(overlay_lines(GamePhase::Ending)[0], "Game Over");
        assert_eq!(overlay_lines(GamePhase::Pending).len(), 4);
        assert_eq!(overlay_lines(GamePhase::Paused)[0], "PAUSED");
    }

    #[test]
    fn test_center_lines_layout() {
        let lines = center_lines(&["ab", "abcd"], 30.0, mono);
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0].pos,
            Vec2::new((WORLD_WIDTH - 20.0) / 2.0, (WORLD_HEIGHT - 60.0) / 2.0)
        );
        assert_eq!(lines[1].pos.y, lines[0].pos.y + 30.0);
        assert_eq!(lines[1].pos.x, (WORLD_WIDTH - 40.0) / 2.0);
    }

    #[test]
    fn test_score_line_reserves_width() {
        let label = score_label(7);
        let line = score_line(&label, mono);
        assert_eq!(line.pos, Vec2::new(WORLD_WIDTH - 130.0, 0.0));
        assert_eq!(line.text, "score: 7");
    }
}
