use glam::{Mat4, Vec3};

/// Model transform of a render node, applied as scale, then rotation, then
/// translation.
///
/// Rotation is Euler XYZ. Beams only ever pitch about X, where this reduces
/// to `T * Rx * S`; the other axes are kept so nodes can be oriented freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3, // euler angles, radians
    pub scale: Vec3,
}

impl Transform {
    pub fn new() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        let translation = Mat4::from_translation(self.translation);
        let rotation = Mat4::from_euler(glam::EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        let scale = Mat4::from_scale(self.scale);
        translation * rotation * scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
