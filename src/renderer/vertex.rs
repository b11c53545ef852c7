//! Vertex types for 2D sprite rendering

use bytemuck::{Pod, Zeroable};

/// Textured 2D vertex; `texture` indexes the frontend's texture array
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub texture: u32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32, texture: u32) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            texture,
        }
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Fallback fill colors when a texture is missing
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const PILLAR: [f32; 4] = [0.18, 0.77, 0.25, 1.0];
    pub const BIRD: [f32; 4] = [0.95, 0.8, 0.2, 1.0];
}
