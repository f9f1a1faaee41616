use std::sync::Arc;

use glam::Vec3;
use rand::Rng;

use crate::geometry;
use crate::scene::{Material, MeshObject, MeshStyle, Scene, SceneObject};

pub const RUBBLE_COUNT: usize = 100;
pub const CUBE_COUNT: usize = 255;
/// Positions are drawn per-coordinate from `[-SPREAD, SPREAD]`.
pub const SPREAD: f32 = 500.0;

pub const RUBBLE_BASE_RADIUS: f32 = 10.0;
pub const RUBBLE_HEIGHT: f32 = 20.0;
pub const RUBBLE_SEGMENTS: u32 = 4;

pub const CUBE_SIZE: f32 = 15.0;
pub const CUBE_SHININESS: f32 = 20.0;

/// Fixed palette sampled uniformly for cube colors.
pub const PALETTE: [u32; 5] = [0xECF0F1, 0x7877F9, 0x3498DB, 0xFFA446, 0x7AA8FF];

/// Scatters the debris field: shared-geometry rubble pyramids and
/// individually colored cubes.
pub fn scatter(scene: &mut Scene, rng: &mut impl Rng) {
    // Every rubble instance shares one geometry and one material; only
    // the baked placement differs.
    let rubble_geometry = Arc::new(geometry::cone(
        RUBBLE_BASE_RADIUS,
        RUBBLE_HEIGHT,
        RUBBLE_SEGMENTS,
    ));
    let rubble_material = Arc::new(Material::shaded(0xFFFFFF));
    for _ in 0..RUBBLE_COUNT {
        scene.add(SceneObject::Mesh(
            MeshObject::new(
                rubble_geometry.clone(),
                rubble_material.clone(),
                MeshStyle::Fill,
            )
            .placed_at(random_position(rng)),
        ));
    }

    let cube_geometry = Arc::new(geometry::cuboid(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE));
    for _ in 0..CUBE_COUNT {
        let color = PALETTE[rng.gen_range(0..PALETTE.len())];
        let material = Material::shaded(color).with_specular(1.0, CUBE_SHININESS);
        scene.add(SceneObject::Mesh(
            MeshObject::new(cube_geometry.clone(), Arc::new(material), MeshStyle::Fill)
                .placed_at(random_position(rng)),
        ));
    }
}

fn random_position(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-SPREAD..=SPREAD),
        rng.gen_range(-SPREAD..=SPREAD),
        rng.gen_range(-SPREAD..=SPREAD),
    )
}
