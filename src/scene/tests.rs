use super::*;
use crate::error::RenderError;
use glam::{Mat4, Vec3, Vec4Swizzles};

#[test]
fn test_transform_new() {
    let transform = Transform::new();
    assert_eq!(transform.translation, Vec3::ZERO);
    assert_eq!(transform.rotation, Vec3::ZERO);
    assert_eq!(transform.scale, Vec3::ONE);
    assert_eq!(transform.to_matrix(), Mat4::IDENTITY);
}

#[test]
fn test_transform_matrix() {
    let mut transform = Transform::new();

    // Test translation
    transform.translation = Vec3::new(1.0, 2.0, 3.0);
    let matrix = transform.to_matrix();
    assert_eq!(matrix.col(3).xyz(), Vec3::new(1.0, 2.0, 3.0));

    // Test scale
    transform = Transform::new();
    transform.scale = Vec3::new(2.0, 2.0, 2.0);
    let matrix = transform.to_matrix();
    assert_eq!(matrix.col(0).x, 2.0);
    assert_eq!(matrix.col(1).y, 2.0);
    assert_eq!(matrix.col(2).z, 2.0);
}

#[test]
fn test_transform_scales_before_translating() {
    let mut transform = Transform::new();
    transform.translation = Vec3::new(0.0, 0.0, -10.0);
    transform.scale = Vec3::splat(3.0);

    let point = transform.to_matrix().transform_point3(Vec3::X);
    assert!(point.abs_diff_eq(Vec3::new(3.0, 0.0, -10.0), 1e-6));
}

#[test]
fn test_transform_pitch_only_matches_x_rotation() {
    let transform = Transform {
        translation: Vec3::new(5.0, -3.0, -110.0),
        rotation: Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0),
        scale: Vec3::new(1.2, 4.0, 1.2),
    };
    let expected = Mat4::from_translation(transform.translation)
        * Mat4::from_rotation_x(std::f32::consts::FRAC_PI_2)
        * Mat4::from_scale(transform.scale);
    assert!(transform.to_matrix().abs_diff_eq(expected, 1e-5));

    // A quarter pitch lays the cylinder axis along +Z, down the tunnel.
    let axis = transform.to_matrix().transform_vector3(Vec3::Y).normalize();
    assert!(axis.abs_diff_eq(Vec3::Z, 1e-5));
}

#[test]
fn test_render_node_defaults() {
    let node = RenderNode::default();
    assert_eq!(node.color, glam::Vec4::ONE);
    assert_eq!(node.alpha, 1.0);
    assert_eq!(node.transform, Transform::new());
}

#[test_log::test]
fn test_prepare_frame_one_block_per_node() {
    let camera = Camera::default();
    let projection = Projection::new(1280, 720);

    let nodes: Vec<RenderNode> = (0..5)
        .map(|i| {
            let mut transform = Transform::new();
            transform.translation = Vec3::new(i as f32, 0.0, -20.0);
            let mut node = RenderNode::new(transform);
            node.alpha = i as f32 / 4.0;
            node
        })
        .collect();

    let uniforms = prepare_frame(&nodes, &camera, &projection).unwrap();
    assert_eq!(uniforms.len(), nodes.len());

    for (node, block) in nodes.iter().zip(&uniforms) {
        assert_eq!(block.alpha, node.alpha);
        let expected_mv = camera.view_matrix() * node.transform.to_matrix();
        assert!(block.mv().abs_diff_eq(expected_mv, 1e-5));
        let expected_mvp = projection.to_matrix() * expected_mv;
        assert!(block.mvp().abs_diff_eq(expected_mvp, 1e-4));
    }
}

#[test]
fn test_prepare_frame_empty() {
    let uniforms = prepare_frame(&[], &Camera::default(), &Projection::default()).unwrap();
    assert!(uniforms.is_empty());
}

#[test_log::test]
fn test_prepare_frame_fails_on_bad_node() {
    let mut bad = RenderNode::default();
    bad.transform.translation = Vec3::new(f32::NAN, 0.0, 0.0);
    let nodes = [RenderNode::default(), bad];

    let result = prepare_frame(&nodes, &Camera::default(), &Projection::default());
    assert_eq!(result, Err(RenderError::InvalidTransform("model matrix")));
}

#[test]
fn test_prepare_frame_rejects_degenerate_projection() {
    let mut projection = Projection::default();
    projection.aspect = -1.0;

    let result = prepare_frame(&[RenderNode::default()], &Camera::default(), &projection);
    assert!(matches!(result, Err(RenderError::InvalidParameter(_))));
}
