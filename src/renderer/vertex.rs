//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Bytes per vertex in a packed buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    /// #6fc3d4
    pub const SHIP: [f32; 4] = [0.435, 0.765, 0.831, 1.0];
    pub const SHIP_INVINCIBLE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const THRUST_FLAME: [f32; 4] = [1.0, 0.533, 0.0, 1.0];
    pub const BULLET: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    /// More than one hit left
    pub const ASTEROID_STURDY: [f32; 4] = [0.667, 0.667, 1.0, 1.0];
    /// One hit from breaking
    pub const ASTEROID_CRACKED: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    /// Scale the alpha channel
    pub fn faded(color: [f32; 4], alpha: f32) -> [f32; 4] {
        [color[0], color[1], color[2], color[3] * alpha]
    }
}
