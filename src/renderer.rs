use crate::error::{RenderError, Result};
use crate::geometry::Uniforms;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Upper bound on draws packed into one uniform pool per frame.
pub const MAX_DRAWS: usize = 10_000;

/// Largest `min_uniform_buffer_offset_alignment` any wgpu device reports.
pub const MAX_UNIFORM_ALIGNMENT: u32 = 256;

/// Straight-alpha "over" blending, shared by the geometry pipeline and the
/// background composite.
pub fn alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent::OVER,
    }
}

pub fn geometry_primitive_state(topology: wgpu::PrimitiveTopology) -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: Some(wgpu::Face::Back),
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    }
}

pub fn postfx_primitive_state() -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleStrip,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    }
}

pub fn depth_stencil_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Per-draw uniform blocks packed into one buffer, addressed with dynamic
/// offsets.
#[derive(Debug, Clone)]
pub struct UniformPool {
    bytes: Vec<u8>,
    stride: usize,
    len: usize,
}

impl UniformPool {
    /// Packs `blocks` at a stride of `size_of::<Uniforms>()` rounded up to
    /// `alignment` (the device's `min_uniform_buffer_offset_alignment`).
    pub fn pack(blocks: &[Uniforms], alignment: u32) -> Result<Self> {
        if alignment == 0 || !alignment.is_power_of_two() || alignment > MAX_UNIFORM_ALIGNMENT {
            return Err(RenderError::InvalidParameter(format!(
                "uniform offset alignment must be a power of two no larger than {}, got {}",
                MAX_UNIFORM_ALIGNMENT, alignment
            )));
        }
        if blocks.len() > MAX_DRAWS {
            log::warn!("Uniform pool overflow: {} draws requested", blocks.len());
            return Err(RenderError::InvalidParameter(format!(
                "{} draws exceed the uniform pool capacity of {}",
                blocks.len(),
                MAX_DRAWS
            )));
        }

        let size = std::mem::size_of::<Uniforms>();
        let align = alignment as usize;
        let stride = size.div_ceil(align) * align;

        let total = stride
            .checked_mul(blocks.len())
            .filter(|&total| u32::try_from(total).is_ok())
            .ok_or_else(|| {
                RenderError::InvalidParameter(format!(
                    "{} uniform blocks at stride {} overflow the pool",
                    blocks.len(),
                    stride
                ))
            })?;

        let mut bytes = vec![0u8; total];
        for (i, block) in blocks.iter().enumerate() {
            let start = i * stride;
            bytes[start..start + size].copy_from_slice(bytemuck::bytes_of(block));
        }

        log::debug!(
            "Packed {} uniform blocks at stride {} ({} bytes)",
            blocks.len(),
            stride,
            bytes.len()
        );

        Ok(Self {
            bytes,
            stride,
            len: blocks.len(),
        })
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Dynamic offset for draw `index`, or `None` past the end.
    pub fn offset(&self, index: usize) -> Option<wgpu::DynamicOffset> {
        if index >= self.len {
            return None;
        }
        index
            .checked_mul(self.stride)
            .and_then(|offset| wgpu::DynamicOffset::try_from(offset).ok())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `min_binding_size` for the dynamic-offset bind group layout entry.
    pub fn binding_size() -> Option<wgpu::BufferSize> {
        wgpu::BufferSize::new(std::mem::size_of::<Uniforms>() as u64)
    }
}
