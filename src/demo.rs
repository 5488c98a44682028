use glam::{Vec3, Vec4};

use crate::scene::{RenderNode, Transform};

pub const BEAM_COLORS: [Vec4; 7] = [
    Vec4::new(169.0 / 255.0, 0.0, 27.0 / 255.0, 1.0),            // Red
    Vec4::new(207.0 / 255.0, 225.0 / 255.0, 37.0 / 255.0, 1.0),  // Yellow
    Vec4::new(0.0, 219.0 / 255.0, 34.0 / 255.0, 1.0),            // Green
    Vec4::new(180.0 / 255.0, 0.0, 180.0 / 255.0, 1.0),           // Purple
    Vec4::new(0.0, 207.0 / 255.0, 183.0 / 255.0, 1.0),           // Cyan
    Vec4::new(92.0 / 255.0, 92.0 / 255.0, 92.0 / 255.0, 1.0),    // Gray
    Vec4::new(16.0 / 255.0, 16.0 / 255.0, 16.0 / 255.0, 1.0),    // Matt black
];

const GOLDEN_ANGLE: f32 = 2.399_963;

/// Lays out `count` beams in a tunnel down -Z: cylinders tipped onto their
/// side (rotated a quarter turn about X), spread around the view axis on
/// rings 20 to 50 units out, 100 to 120 units away.
///
/// Placement is deterministic so a frame can be rebuilt bit-for-bit.
pub fn beam_nodes(count: usize, opacity: f32) -> Vec<RenderNode> {
    (0..count)
        .map(|i| {
            let angle = GOLDEN_ANGLE * i as f32;
            let radius = (4 + i % 7) as f32 * 5.0;
            let depth = -100.0 - (i * 7 % 21) as f32;
            let length = 0.5 + (i * 13 % 96) as f32 / 10.0;

            let transform = Transform {
                translation: Vec3::new(angle.sin() * radius, angle.cos() * radius, depth),
                rotation: Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0),
                scale: Vec3::new(1.2, length, 1.2),
            };

            let mut node = RenderNode::new(transform);
            node.color = BEAM_COLORS[i % BEAM_COLORS.len()];
            node.alpha = opacity;
            node
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beam_nodes_are_deterministic() {
        assert_eq!(beam_nodes(32, 0.5), beam_nodes(32, 0.5));
    }

    #[test]
    fn test_beam_nodes_stay_in_tunnel() {
        for node in beam_nodes(100, 1.0) {
            let t = node.transform.translation;
            let ring = (t.x * t.x + t.y * t.y).sqrt();
            assert!((19.9..=50.1).contains(&ring), "ring radius {}", ring);
            assert!((-120.0..=-100.0).contains(&t.z), "depth {}", t.z);
            assert!(node.transform.scale.y >= 0.5 && node.transform.scale.y <= 10.0);
            assert_eq!(node.alpha, 1.0);
        }
    }

    #[test]
    fn test_beam_colors_cycle() {
        let nodes = beam_nodes(BEAM_COLORS.len() + 1, 1.0);
        assert_eq!(nodes[0].color, BEAM_COLORS[0]);
        assert_eq!(nodes[BEAM_COLORS.len()].color, BEAM_COLORS[0]);
    }
}
