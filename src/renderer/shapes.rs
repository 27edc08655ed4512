//! Shape generation for 2D primitives
//!
//! All shapes are plain triangle lists in surface pixels.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Circle fading from `inner` color at the center to `outer` at the rim
pub fn radial_glow(
    center: Vec2,
    radius: f32,
    inner: [f32; 4],
    outer: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, inner));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            outer,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            outer,
        ));
    }

    vertices
}

/// Filled axis-aligned rectangle from its top-left corner
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Thick line segment as a quad
pub fn line(from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Hollow rectangle frame `weight` pixels thick, drawn inside `size`
pub fn frame(size: Vec2, weight: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(Vec2::ZERO, Vec2::new(size.x, weight), color));
    vertices.extend(rect(
        Vec2::new(0.0, size.y - weight),
        Vec2::new(size.x, weight),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(0.0, weight),
        Vec2::new(weight, size.y - 2.0 * weight),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(size.x - weight, weight),
        Vec2::new(weight, size.y - 2.0 * weight),
        color,
    ));
    vertices
}
