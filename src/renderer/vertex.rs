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

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Same color with a different alpha
pub const fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha]
}

/// Colors for game elements (cream paper, deep teal ink)
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.961, 0.937, 0.894, 1.0]; // #F5EFE4
    pub const MAIN_ACCENT: [f32; 4] = [0.043, 0.239, 0.259, 1.0]; // #0B3D42
    pub const SECONDARY_ACCENT: [f32; 4] = [0.553, 0.631, 0.678, 1.0]; // #8DA1AD
    pub const SUBTLE_GLOW: [f32; 4] = [0.659, 0.729, 0.769, 1.0]; // #A8BAC4
    pub const POLE_ACCENT: [f32; 4] = [0.753, 0.808, 0.843, 1.0]; // #C0CED7

    pub const BALL: [f32; 4] = MAIN_ACCENT;
    pub const BALL_GLOW: [f32; 4] = SECONDARY_ACCENT;
    pub const POLE: [f32; 4] = SECONDARY_ACCENT;
    pub const ELASTIC: [f32; 4] = MAIN_ACCENT;
    pub const TARGET: [f32; 4] = MAIN_ACCENT;
    pub const TARGET_GLOW: [f32; 4] = SECONDARY_ACCENT;
    pub const BURST: [f32; 4] = SECONDARY_ACCENT;
    pub const BORDER: [f32; 4] = MAIN_ACCENT;
}
