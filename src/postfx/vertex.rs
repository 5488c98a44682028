use crate::error::{RenderError, Result};

/// Full-screen pass vertex. Never shares a buffer with geometry vertices.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PostEffectVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl PostEffectVertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,  // position
        1 => Float32x2,  // tex_coords
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PostEffectVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Fragment uniform for the background composite: how opaque the geometry
/// pass output is when blended over the frame.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BackgroundParams {
    pub alpha: f32,
    pub _padding: [f32; 3],
}

impl BackgroundParams {
    pub fn new(alpha: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            log::warn!("Rejecting background alpha {}", alpha);
            return Err(RenderError::InvalidParameter(format!(
                "background alpha must be within [0, 1], got {}",
                alpha
            )));
        }
        Ok(Self {
            alpha,
            _padding: [0.0; 3],
        })
    }
}

impl Default for BackgroundParams {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            _padding: [0.0; 3],
        }
    }
}
