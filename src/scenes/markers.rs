use std::sync::Arc;

use glam::Vec3;

use crate::geometry;
use crate::scene::{Material, MeshObject, MeshStyle, Scene, SceneObject};

pub const MARKER_RADIUS: f32 = 5.0;
pub const MARKER_SEGMENTS: u32 = 32;
pub const MARKER_OPACITY: f32 = 0.6;

/// Places one small sphere marker on every shell vertex.
///
/// `vertices` must be the shell vertex list from the orb step. An empty
/// list means the shell was never built; that is a caller bug, not a
/// runtime condition.
pub fn place(scene: &mut Scene, vertices: &[Vec3]) {
    assert!(
        !vertices.is_empty(),
        "marker field requires the wireframe shell's vertex list"
    );

    let geometry = Arc::new(geometry::uv_sphere(
        MARKER_RADIUS,
        MARKER_SEGMENTS,
        MARKER_SEGMENTS,
    ));
    let material = Arc::new(Material::unlit(0xFFFFFF, MARKER_OPACITY));

    for i in 0..vertices.len() {
        scene.add(SceneObject::Mesh(
            MeshObject::new(geometry.clone(), material.clone(), MeshStyle::Fill)
                .placed_at(vertices[i]),
        ));
    }
}
