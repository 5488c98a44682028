mod history;
mod quad;
mod vertex;

pub use history::FrameHistory;
pub use quad::{build_quad, QUAD_VERTEX_COUNT, QUAD_VERTICES};
pub use vertex::{BackgroundParams, PostEffectVertex};
