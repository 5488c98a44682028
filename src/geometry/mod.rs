mod builder;
mod cylinder;
mod uniforms;
mod vertex;

pub use builder::{build_uniforms, build_vertices};
pub use cylinder::{CylinderMesh, MeshPart, Primitive, MAX_CYLINDER_SEGMENTS};
pub use uniforms::Uniforms;
pub use vertex::Vertex;
