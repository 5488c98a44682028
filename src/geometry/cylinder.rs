use super::{build_vertices, Vertex};
use crate::error::{RenderError, Result};

pub const MAX_CYLINDER_SEGMENTS: u32 = 65_536;

/// How a vertex range is meant to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    TriangleStrip,
    TriangleList,
}

impl Primitive {
    pub fn topology(self) -> wgpu::PrimitiveTopology {
        match self {
            Primitive::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
            Primitive::TriangleList => wgpu::PrimitiveTopology::TriangleList,
        }
    }
}

/// One contiguous draw over a vertex sequence.
#[derive(Debug, Clone)]
pub struct MeshPart {
    pub name: &'static str,
    pub primitive: Primitive,
    pub vertices: Vec<Vertex>,
}

impl MeshPart {
    pub fn vertex_count(&self) -> Result<u32> {
        u32::try_from(self.vertices.len()).map_err(|_| {
            RenderError::InvalidParameter(format!(
                "{} has too many vertices for one draw: {}",
                self.name,
                self.vertices.len()
            ))
        })
    }
}

/// An open-bottomed cylinder: the side wall and the top cap only, since the
/// bottom cap is never visible in the beam tunnel this was built for.
#[derive(Debug, Clone)]
pub struct CylinderMesh {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
    pub side: MeshPart,
    pub top: MeshPart,
}

impl CylinderMesh {
    pub fn new(radius: f32, height: f32, segments: u32) -> Result<Self> {
        if segments == 0 || segments > MAX_CYLINDER_SEGMENTS {
            return Err(RenderError::InvalidParameter(format!(
                "cylinder segments must be within 1..={}, got {}",
                MAX_CYLINDER_SEGMENTS, segments
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RenderError::InvalidParameter(format!(
                "cylinder radius must be positive, got {}",
                radius
            )));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(RenderError::InvalidParameter(format!(
                "cylinder height must be positive, got {}",
                height
            )));
        }

        let angle_step = std::f32::consts::TAU / segments as f32;
        let ring: Vec<(f32, f32)> = (0..segments)
            .map(|i| (angle_step * i as f32).sin_cos())
            .map(|(sin, cos)| (cos, sin))
            .collect();

        let top_y = height / 2.0;
        let bottom_y = -top_y;

        // Side wall: top/bottom pairs around the ring, seam closed by
        // revisiting ring index 0.
        let side_count = (ring.len() + 1) * 2;
        let mut positions = Vec::with_capacity(side_count);
        let mut normals = Vec::with_capacity(side_count);
        for i in 0..=ring.len() {
            let (cos, sin) = ring[i % ring.len()];
            let normal = [cos, 0.0, sin];
            positions.push([cos * radius, top_y, sin * radius]);
            normals.push(normal);
            positions.push([cos * radius, bottom_y, sin * radius]);
            normals.push(normal);
        }
        let side = MeshPart {
            name: "cylinder side",
            primitive: Primitive::TriangleStrip,
            vertices: build_vertices(&positions, &normals)?,
        };

        // Top cap: a fan unrolled into a triangle list.
        let up = [0.0, 1.0, 0.0];
        let mut positions = Vec::with_capacity(ring.len() * 3);
        for i in 0..ring.len() {
            let (cos_a, sin_a) = ring[i];
            let (cos_b, sin_b) = ring[(i + 1) % ring.len()];
            positions.push([0.0, top_y, 0.0]);
            positions.push([cos_a * radius, top_y, sin_a * radius]);
            positions.push([cos_b * radius, top_y, sin_b * radius]);
        }
        let normals = vec![up; positions.len()];
        let top = MeshPart {
            name: "cylinder top",
            primitive: Primitive::TriangleList,
            vertices: build_vertices(&positions, &normals)?,
        };

        log::debug!(
            "Built cylinder r={} h={} with {} segments ({} side, {} top vertices)",
            radius,
            height,
            segments,
            side.vertices.len(),
            top.vertices.len()
        );

        Ok(Self {
            radius,
            height,
            segments,
            side,
            top,
        })
    }

    pub fn parts(&self) -> [&MeshPart; 2] {
        [&self.side, &self.top]
    }
}
