//! Sprite draw list for the current frame

use serde::{Deserialize, Serialize};

use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{GameState, Rect};

/// Which texture a sprite uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Background,
    /// Bird animation frame in `[0, BIRD_FRAMES)`
    Bird(usize),
    Pillar,
}

impl SpriteKind {
    /// Number of distinct textures the frontend must provide
    pub const TEXTURE_COUNT: u32 = 2 + BIRD_FRAMES as u32;

    /// Stable texture slot: background, bird frames, pillar
    pub fn texture_index(&self) -> u32 {
        match self {
            SpriteKind::Background => 0,
            SpriteKind::Bird(frame) => 1 + (*frame % BIRD_FRAMES) as u32,
            SpriteKind::Pillar => 1 + BIRD_FRAMES as u32,
        }
    }

    /// Asset path, relative to the resource directory
    pub fn asset_path(&self) -> String {
        match self {
            SpriteKind::Background => "background.png".to_string(),
            SpriteKind::Bird(frame) => format!("bird-{}.png", frame % BIRD_FRAMES),
            SpriteKind::Pillar => "pillar.png".to_string(),
        }
    }

    pub fn fallback_color(&self) -> [f32; 4] {
        match self {
            SpriteKind::Background => colors::BACKGROUND,
            SpriteKind::Bird(_) => colors::BIRD,
            SpriteKind::Pillar => colors::PILLAR,
        }
    }
}

/// A texture placed on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Rect,
}

/// Sprites for the frame: background, then pillars, then the bird
///
/// Positions are snapped to whole pixels.
pub fn draw_list(state: &GameState) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(state.pillar.len() + 2);
    sprites.push(Sprite {
        kind: SpriteKind::Background,
        rect: Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT),
    });

    for gate in state.pillar.gates() {
        sprites.push(Sprite {
            kind: SpriteKind::Pillar,
            rect: snapped(gate.rect()),
        });
    }

    sprites.push(Sprite {
        kind: SpriteKind::Bird(state.bird.frame()),
        rect: snapped(state.bird.bounds()),
    });

    sprites
}

fn snapped(rect: Rect) -> Rect {
    Rect::new(rect.min.x.round(), rect.min.y.round(), rect.width(), rect.height())
}

/// Expand sprites into textured quads (two triangles each)
pub fn sprite_vertices(sprites: &[Sprite]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(sprites.len() * 6);

    for sprite in sprites {
        let tex = sprite.kind.texture_index();
        let (x0, y0) = (sprite.rect.min.x, sprite.rect.min.y);
        let (x1, y1) = (sprite.rect.max.x, sprite.rect.max.y);

        vertices.push(Vertex::new(x0, y0, 0.0, 0.0, tex));
        vertices.push(Vertex::new(x1, y0, 1.0, 0.0, tex));
        vertices.push(Vertex::new(x0, y1, 0.0, 1.0, tex));

        vertices.push(Vertex::new(x0, y1, 0.0, 1.0, tex));
        vertices.push(Vertex::new(x1, y0, 1.0, 0.0, tex));
        vertices.push(Vertex::new(x1, y1, 1.0, 1.0, tex));
    }

    vertices
}
