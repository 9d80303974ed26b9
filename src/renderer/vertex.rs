//! Vertex type for 2D line rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color. Positions are in game pixels;
/// the pipeline converts to NDC before upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
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

/// Wireframe palette
pub mod colors {
    pub const SHIP: [f32; 4] = [0.85, 1.0, 0.9, 1.0];
    pub const PROJECTILE: [f32; 4] = [1.0, 0.95, 0.4, 1.0];
    pub const ASTEROID: [f32; 4] = [0.7, 0.72, 0.78, 1.0];
    pub const HUD: [f32; 4] = [0.6, 1.0, 0.7, 1.0];
    pub const BANNER: [f32; 4] = [1.0, 0.35, 0.3, 1.0];
}
