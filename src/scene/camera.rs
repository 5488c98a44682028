use glam::{Mat4, Vec3};

use crate::error::{RenderError, Result};

/// A look-at camera. The default sits at the origin looking down -Z, which
/// yields an identity view matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::NEG_Z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fovy_degrees: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        let mut projection = Self::default();
        projection.resize(width, height);
        projection
    }

    /// Tracks the surface aspect ratio. Zero-sized surfaces (minimized
    /// windows) keep the previous ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.aspect.is_finite() && self.aspect > 0.0) {
            return Err(RenderError::InvalidParameter(format!(
                "aspect ratio must be positive, got {}",
                self.aspect
            )));
        }
        if !(self.fovy_degrees > 0.0 && self.fovy_degrees < 180.0) {
            return Err(RenderError::InvalidParameter(format!(
                "vertical field of view must be in (0, 180) degrees, got {}",
                self.fovy_degrees
            )));
        }
        if !(self.znear > 0.0 && self.zfar > self.znear) {
            return Err(RenderError::InvalidParameter(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                self.znear, self.zfar
            )));
        }
        Ok(())
    }

    /// Right-handed perspective with wgpu's [0, 1] depth range.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_degrees.to_radians(), self.aspect, self.znear, self.zfar)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy_degrees: 65.0,
            aspect: 1.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}
