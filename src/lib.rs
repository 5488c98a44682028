//! Host-side data preparation for a two-pass renderer: a geometry pass that
//! draws tinted meshes into an offscreen target, and a post-effect pass that
//! composites that target over the frame with a full-screen quad.
//!
//! Everything here produces byte layouts ready for `wgpu` buffers; device
//! setup, shaders and command submission belong to the caller.

pub mod demo;
pub mod error;
pub mod geometry;
pub mod postfx;
pub mod renderer;
pub mod scene;

pub use error::{RenderError, Result};
pub use geometry::{build_uniforms, build_vertices, CylinderMesh, Uniforms, Vertex};
pub use postfx::{build_quad, BackgroundParams, FrameHistory, PostEffectVertex};
pub use renderer::UniformPool;
pub use scene::{prepare_frame, Camera, Projection, RenderNode, Transform};

/// Inputs for building one frame's worth of layouts.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameConfig {
    pub width: u32,
    pub height: u32,
    pub fovy_degrees: f32,
    pub cylinder_radius: f32,
    pub cylinder_height: f32,
    pub cylinder_segments: u32,
    pub beam_count: usize,
    pub opacity: f32,
    pub background_alpha: f32,
    pub uniform_alignment: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fovy_degrees: 65.0,
            cylinder_radius: 1.0,
            cylinder_height: 1.0,
            cylinder_segments: 36,
            beam_count: 50,
            opacity: 1.0,
            background_alpha: 1.0,
            // wgpu::Limits::default().min_uniform_buffer_offset_alignment
            uniform_alignment: 256,
        }
    }
}

/// Everything the external driver uploads for a frame.
#[derive(Debug, Clone)]
pub struct FramePlan {
    pub mesh: CylinderMesh,
    pub nodes: Vec<RenderNode>,
    pub uniforms: UniformPool,
    pub quad: [PostEffectVertex; 4],
    pub background: BackgroundParams,
}

impl FramePlan {
    pub fn build(config: &FrameConfig) -> Result<Self> {
        let background = BackgroundParams::new(config.background_alpha)?;
        let mesh = CylinderMesh::new(
            config.cylinder_radius,
            config.cylinder_height,
            config.cylinder_segments,
        )?;

        let mut projection = Projection::new(config.width, config.height);
        projection.fovy_degrees = config.fovy_degrees;

        let nodes = demo::beam_nodes(config.beam_count, config.opacity);
        let blocks = prepare_frame(&nodes, &Camera::default(), &projection)?;
        let uniforms = UniformPool::pack(&blocks, config.uniform_alignment)?;

        log::info!(
            "Frame plan: {} draws, {} mesh vertices, {} uniform bytes",
            nodes.len(),
            mesh.side.vertices.len() + mesh.top.vertices.len(),
            uniforms.bytes().len()
        );

        Ok(Self {
            mesh,
            nodes,
            uniforms,
            quad: build_quad(),
            background,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_frame_plan_default() {
        let config = FrameConfig::default();
        let plan = FramePlan::build(&config).unwrap();

        assert_eq!(plan.nodes.len(), 50);
        assert_eq!(plan.uniforms.len(), 50);
        assert_eq!(plan.uniforms.stride(), 256);
        assert_eq!(plan.mesh.side.vertices.len(), 74);
        assert_eq!(plan.quad, build_quad());
        assert_eq!(plan.background.alpha, 1.0);
    }

    #[test]
    fn test_frame_plan_rejects_bad_mesh() {
        let config = FrameConfig {
            cylinder_segments: 0,
            ..FrameConfig::default()
        };
        assert!(matches!(
            FramePlan::build(&config),
            Err(RenderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_frame_plan_rejects_bad_opacity() {
        let config = FrameConfig {
            opacity: f32::NAN,
            ..FrameConfig::default()
        };
        assert_eq!(
            FramePlan::build(&config).unwrap_err(),
            RenderError::InvalidTransform("opacity")
        );
    }

    #[test]
    fn test_frame_plan_rejects_bad_background_alpha() {
        for background_alpha in [f32::NAN, 5.0, -0.5] {
            let config = FrameConfig {
                background_alpha,
                ..FrameConfig::default()
            };
            assert!(matches!(
                FramePlan::build(&config),
                Err(RenderError::InvalidParameter(_))
            ));
        }
    }
}
