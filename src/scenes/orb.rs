use std::sync::Arc;

use glam::Vec3;

use crate::geometry;
use crate::scene::{Material, MeshObject, MeshStyle, Scene, SceneObject, ACCENT_COLOR};

pub const ORB_RADIUS: f32 = 350.0;
pub const SHELL_RADIUS: f32 = 400.0;
/// Subdivision level shared by orb and shell.
pub const SUBDIVISION: u32 = 2;
pub const SHELL_OPACITY: f32 = 0.2;

/// Welded vertex count of a level-2 subdivided octahedron.
pub const SHELL_VERTEX_COUNT: usize = 38;

/// Builds the faceted orb and its concentric wireframe shell.
///
/// Returns the shell's vertex list; the marker field depends on it.
pub fn build(scene: &mut Scene) -> Vec<Vec3> {
    let orb = geometry::octahedron(ORB_RADIUS, SUBDIVISION);
    scene.add(SceneObject::Mesh(MeshObject::new(
        Arc::new(orb),
        Arc::new(Material::shaded(ACCENT_COLOR)),
        MeshStyle::Fill,
    )));

    let shell = geometry::octahedron(SHELL_RADIUS, SUBDIVISION);
    let vertices = shell.positions.clone();
    scene.add(SceneObject::Mesh(MeshObject::new(
        Arc::new(shell),
        Arc::new(Material::unlit(0xFFFFFF, SHELL_OPACITY)),
        MeshStyle::Wireframe,
    )));

    vertices
}
