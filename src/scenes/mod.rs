//! Procedural generation steps.
//!
//! Each step runs once at startup and only appends to the scene. The
//! marker field consumes the shell vertex list produced by the orb step;
//! the other steps are independent.

pub mod debris;
pub mod lines;
pub mod markers;
pub mod orb;

use rand::Rng;

use crate::scene::Scene;

/// Drawable count after a full `populate` pass, any seed.
pub const TOTAL_OBJECTS: usize =
    lines::LINE_COUNT + 2 + orb::SHELL_VERTEX_COUNT + debris::RUBBLE_COUNT + debris::CUBE_COUNT;

/// Runs all four generation steps in dependency order.
pub fn populate(scene: &mut Scene, rng: &mut impl Rng) {
    lines::scatter(scene, rng);
    let shell_vertices = orb::build(scene);
    markers::place(scene, &shell_vertices);
    debris::scatter(scene, rng);

    log::info!(
        "scene populated: {} objects, {} lights",
        scene.object_count(),
        scene.light_count()
    );
}
