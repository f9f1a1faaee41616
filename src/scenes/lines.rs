use glam::Vec3;
use rand::Rng;

use crate::scene::{LineSegment, Scene, SceneObject};

pub const LINE_COUNT: usize = 300;
/// Every segment starts on this sphere shell.
pub const INNER_RADIUS: f32 = 500.0;
/// Outer endpoint stretch factor is drawn from `[1.0, 1.0 + MAX_STRETCH)`.
pub const MAX_STRETCH: f32 = 0.3;
pub const LINE_OPACITY: f32 = 0.25;

/// Scatters the radial line field.
///
/// Segments are independent; calling this again appends another batch.
pub fn scatter(scene: &mut Scene, rng: &mut impl Rng) {
    for _ in 0..LINE_COUNT {
        let start = random_direction(rng) * INNER_RADIUS;
        let end = start * (1.0 + rng.gen_range(0.0..MAX_STRETCH));
        scene.add(SceneObject::Line(LineSegment {
            start,
            end,
            color: [1.0, 1.0, 1.0],
            opacity: LINE_OPACITY,
        }));
    }
}

/// Direction from uniform cube samples, rejecting the degenerate
/// near-zero draw before normalizing.
fn random_direction(rng: &mut impl Rng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if let Some(dir) = v.try_normalize() {
            return dir;
        }
    }
}
