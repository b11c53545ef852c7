//! Rendering glue
//!
//! The simulation never draws. It hands the frontend a list of sprites in
//! painter's order (and, for GPU frontends, the matching textured quads).

pub mod sprites;
pub mod vertex;

pub use sprites::{Sprite, SpriteKind, draw_list, sprite_vertices};
pub use vertex::Vertex;
