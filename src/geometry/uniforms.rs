use glam::{Mat4, Vec4};

/// Per-draw uniform block for the geometry pass.
///
/// `color.a` and `alpha` are two independent opacity channels; the shader
/// decides how to combine them.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub mvp_matrix: [[f32; 4]; 4],
    pub mv_matrix: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub alpha: f32,
    pub _padding: [f32; 3], // uniform structs round up to 16 bytes
}

impl Uniforms {
    pub fn mvp(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.mvp_matrix)
    }

    pub fn mv(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.mv_matrix)
    }

    pub fn color(&self) -> Vec4 {
        Vec4::from_array(self.color)
    }
}
