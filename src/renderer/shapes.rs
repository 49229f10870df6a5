//! Shape generation for 2D primitives
//!
//! Strokes become line-list vertices, fills become triangle-list vertices,
//! ready to upload as two vertex buffers.

use glam::Vec2;
use std::f32::consts::TAU;

use super::scene::{DrawCmd, Scene};
use super::vertex::Vertex;

/// Segments used to approximate a circle
pub const CIRCLE_SEGMENTS: usize = 16;

/// Tessellated frame
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Pairs of vertices, one pair per line segment
    pub lines: Vec<Vertex>,
    /// Triples of vertices, one triple per triangle
    pub triangles: Vec<Vertex>,
}

impl Mesh {
    /// Line vertices as raw bytes for a vertex buffer
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }

    /// Triangle vertices as raw bytes for a vertex buffer
    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }
}

impl Scene {
    /// Tessellate every command into line and triangle lists
    pub fn to_mesh(&self) -> Mesh {
        let mut mesh = Mesh::default();
        for cmd in &self.commands {
            match cmd {
                DrawCmd::FillCircle {
                    center,
                    radius,
                    color,
                } => mesh.triangles.extend(disc(*center, *radius, *color)),
                DrawCmd::StrokeCircle {
                    center,
                    radius,
                    color,
                } => {
                    let ring = circle_points(*center, *radius);
                    mesh.lines.extend(closed_outline(&ring, *color));
                }
                DrawCmd::StrokePolygon { points, color } => {
                    mesh.lines.extend(closed_outline(points, *color));
                }
                DrawCmd::Line { from, to, color } => {
                    mesh.lines.push(Vertex::new(from.x, from.y, *color));
                    mesh.lines.push(Vertex::new(to.x, to.y, *color));
                }
            }
        }
        mesh
    }
}

fn circle_points(center: Vec2, radius: f32) -> Vec<Vec2> {
    (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let theta = i as f32 / CIRCLE_SEGMENTS as f32 * TAU;
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}

/// Line-list vertices for a closed polyline
pub fn closed_outline(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }
    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }
    vertices
}

/// Triangle-list vertices for a filled circle (fan around the center)
pub fn disc(center: Vec2, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let ring = circle_points(center, radius);
    let mut vertices = Vec::with_capacity(ring.len() * 3);
    for (i, p1) in ring.iter().enumerate() {
        let p2 = ring[(i + 1) % ring.len()];
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    #[test]
    fn test_closed_outline_wraps_to_start() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let verts = closed_outline(&square, colors::BULLET);
        assert_eq!(verts.len(), 8);
        assert_eq!(verts[7].position, [0.0, 0.0]);
    }

    #[test]
    fn test_mesh_counts() {
        let scene = Scene {
            commands: vec![
                DrawCmd::FillCircle {
                    center: Vec2::ZERO,
                    radius: 2.0,
                    color: colors::SHIP,
                },
                DrawCmd::StrokeCircle {
                    center: Vec2::ZERO,
                    radius: 2.0,
                    color: colors::BULLET,
                },
                DrawCmd::Line {
                    from: Vec2::ZERO,
                    to: Vec2::ONE,
                    color: colors::THRUST_FLAME,
                },
            ],
        };
        let mesh = scene.to_mesh();
        assert_eq!(mesh.triangles.len(), CIRCLE_SEGMENTS * 3);
        assert_eq!(mesh.lines.len(), CIRCLE_SEGMENTS * 2 + 2);
        assert_eq!(mesh.line_bytes().len(), mesh.lines.len() * Vertex::STRIDE);
    }

    #[test]
    fn test_degenerate_outline_is_empty() {
        assert!(closed_outline(&[Vec2::ONE], colors::SHIP).is_empty());
    }
}
