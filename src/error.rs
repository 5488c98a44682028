use thiserror::Error;

/// Failures raised while preparing host-side layouts for a draw.
///
/// None of these are fatal to the process; the caller decides whether to
/// skip the draw or abort the frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("mesh shape mismatch: {positions} positions but {normals} normals")]
    ShapeMismatch { positions: usize, normals: usize },

    #[error("invalid transform: {0} contains a non-finite value")]
    InvalidTransform(&'static str),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
