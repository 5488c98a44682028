pub mod camera;
pub mod transform;
#[cfg(test)]
mod tests;

pub use camera::{Camera, Projection};
pub use transform::Transform;

use glam::Vec4;

use crate::error::Result;
use crate::geometry::{build_uniforms, Uniforms};

/// A single draw in the geometry pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderNode {
    pub transform: Transform,
    pub color: Vec4,
    pub alpha: f32,
}

impl RenderNode {
    pub fn new(transform: Transform) -> Self {
        Self {
            transform,
            color: Vec4::ONE,
            alpha: 1.0,
        }
    }
}

impl Default for RenderNode {
    fn default() -> Self {
        Self::new(Transform::new())
    }
}

/// Builds one uniform block per node, in node order, sharing the frame's
/// camera and projection. The first bad node fails the whole frame.
pub fn prepare_frame(nodes: &[RenderNode], camera: &Camera, projection: &Projection) -> Result<Vec<Uniforms>> {
    projection.validate()?;

    let view = camera.view_matrix();
    let proj = projection.to_matrix();

    let uniforms = nodes
        .iter()
        .map(|node| build_uniforms(node.transform.to_matrix(), view, proj, node.color, node.alpha))
        .collect::<Result<Vec<_>>>()?;

    log::debug!("Prepared uniforms for {} draws", uniforms.len());
    Ok(uniforms)
}
