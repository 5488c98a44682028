use glam::{Mat4, Vec4};

use super::{Uniforms, Vertex};
use crate::error::{RenderError, Result};

/// Interleaves mesh positions and normals into geometry pass vertices.
///
/// Output order matches input order exactly, since it carries the triangle
/// winding the pipeline culls against.
pub fn build_vertices(positions: &[[f32; 3]], normals: &[[f32; 3]]) -> Result<Vec<Vertex>> {
    if positions.len() != normals.len() {
        log::warn!(
            "Refusing to build vertices: {} positions vs {} normals",
            positions.len(),
            normals.len()
        );
        return Err(RenderError::ShapeMismatch {
            positions: positions.len(),
            normals: normals.len(),
        });
    }

    let vertices: Vec<Vertex> = positions
        .iter()
        .zip(normals)
        .map(|(&position, &normal)| Vertex { position, normal })
        .collect();

    log::debug!("Built {} geometry vertices", vertices.len());
    Ok(vertices)
}

/// Composes the per-draw transforms and packs them with the tint.
///
/// `mv = view * model`, `mvp = projection * mv`.
pub fn build_uniforms(
    model: Mat4,
    view: Mat4,
    projection: Mat4,
    tint: Vec4,
    opacity: f32,
) -> Result<Uniforms> {
    check_finite(model.is_finite(), "model matrix")?;
    check_finite(view.is_finite(), "view matrix")?;
    check_finite(projection.is_finite(), "projection matrix")?;
    check_finite(tint.is_finite(), "tint color")?;
    check_finite(opacity.is_finite(), "opacity")?;

    let mv = view * model;
    let mvp = projection * mv;

    Ok(Uniforms {
        mvp_matrix: mvp.to_cols_array_2d(),
        mv_matrix: mv.to_cols_array_2d(),
        color: tint.to_array(),
        alpha: opacity,
        _padding: [0.0; 3],
    })
}

fn check_finite(finite: bool, what: &'static str) -> Result<()> {
    if finite {
        Ok(())
    } else {
        log::warn!("Rejecting draw uniforms: non-finite {}", what);
        Err(RenderError::InvalidTransform(what))
    }
}
