use super::PostEffectVertex;

pub const QUAD_VERTEX_COUNT: u32 = 4;

/// Full-screen quad as a triangle strip: bottom-left, top-left, bottom-right,
/// top-right.
///
/// wgpu addresses textures with v growing downward while NDC y grows upward,
/// so the top edge samples v = 0. That keeps the sampled target upright.
pub const QUAD_VERTICES: [PostEffectVertex; 4] = [
    PostEffectVertex { position: [-1.0, -1.0, 0.0], tex_coords: [0.0, 1.0] },
    PostEffectVertex { position: [-1.0, 1.0, 0.0], tex_coords: [0.0, 0.0] },
    PostEffectVertex { position: [1.0, -1.0, 0.0], tex_coords: [1.0, 1.0] },
    PostEffectVertex { position: [1.0, 1.0, 0.0], tex_coords: [1.0, 0.0] },
];

pub fn build_quad() -> [PostEffectVertex; 4] {
    QUAD_VERTICES
}
