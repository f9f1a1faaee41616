use glam::Vec3;
use orbfield::camera::{FAR_PLANE, NEAR_PLANE};
use orbfield::math::rgb;
use orbfield::renderer::{lights_uniform, pack_scene};
use orbfield::scene::{
    bootstrap, Light, BACKDROP_COLOR, FOG_DENSITY, POINT_LIGHT_INTENSITY, POINT_LIGHT_RANGE,
};
use orbfield::scenes::{self, debris, lines, orb};
use orbfield::{geometry, populate};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn populated_stage(seed: u64) -> orbfield::Stage {
    let mut stage = bootstrap(1920.0, 1080.0);
    let mut rng = StdRng::seed_from_u64(seed);
    populate(&mut stage.scene, &mut rng);
    stage
}

#[cfg(test)]
mod bootstrap_tests {
    use super::*;

    #[test]
    fn test_camera_starts_at_viewport_offset() {
        let stage = bootstrap(1920.0, 1080.0);
        assert_eq!(stage.camera.position, Vec3::new(960.0, 540.0, 1000.0));
        assert_eq!(stage.camera.target, Vec3::ZERO);
        assert_eq!(stage.camera.near, NEAR_PLANE);
        assert_eq!(stage.camera.far, FAR_PLANE);
        assert!((stage.camera.fov_y - 75.0_f32.to_radians()).abs() < 1.0e-6);
    }

    #[test]
    fn test_scene_atmosphere() {
        let stage = bootstrap(800.0, 600.0);
        assert_eq!(stage.scene.fog.density, FOG_DENSITY);
        assert_eq!(stage.scene.fog.color, rgb(BACKDROP_COLOR));
        assert_eq!(stage.scene.background, rgb(BACKDROP_COLOR));
        assert_eq!(stage.scene.anchor, Vec3::ZERO);
    }

    #[test]
    fn test_light_rig() {
        let stage = bootstrap(800.0, 600.0);
        assert_eq!(stage.scene.light_count(), 3);

        let lights = stage.scene.lights();
        assert!(matches!(lights[0], Light::Directional { .. }));
        assert!(matches!(lights[1], Light::Directional { .. }));
        match lights[2] {
            Light::Point {
                intensity, range, ..
            } => {
                assert_eq!(intensity, POINT_LIGHT_INTENSITY);
                assert_eq!(range, POINT_LIGHT_RANGE);
            }
            _ => panic!("third light should be the point light"),
        }
    }

    #[test]
    fn test_resize_only_touches_aspect() {
        let mut stage = bootstrap(1920.0, 1080.0);
        let position = stage.camera.position;
        stage.camera.set_viewport(640.0, 480.0);
        assert_eq!(stage.camera.position, position);
        assert!((stage.camera.aspect - 640.0 / 480.0).abs() < 1.0e-6);
    }

    #[test]
    fn test_lights_uniform_packs_rig() {
        let stage = bootstrap(800.0, 600.0);
        let uniform = lights_uniform(&stage.scene);
        assert_eq!(uniform.dir0_color, rgb(0xFFFFFF));
        assert_eq!(uniform.dir1_direction, [-5.0, -1.0, -10.0]);
        assert_eq!(uniform.point_position, [100.0, 100.0, 100.0]);
        assert_eq!(uniform.point_intensity, POINT_LIGHT_INTENSITY);
        assert_eq!(uniform.point_range, POINT_LIGHT_RANGE);
    }
}

#[cfg(test)]
mod end_to_end_tests {
    use super::*;

    #[test]
    fn test_total_object_count() {
        let stage = populated_stage(7);
        assert_eq!(stage.scene.object_count(), scenes::TOTAL_OBJECTS);
        assert_eq!(
            scenes::TOTAL_OBJECTS,
            300 + 2 + 38 + 100 + 255,
            "line field + orb pair + markers + debris"
        );
        assert_eq!(stage.scene.light_count(), 3);
    }

    #[test]
    fn test_count_is_seed_independent() {
        for seed in [0, 1, 99, u64::MAX] {
            let stage = populated_stage(seed);
            assert_eq!(stage.scene.object_count(), scenes::TOTAL_OBJECTS);
        }
    }

    #[test]
    fn test_fixed_seed_reproduces_the_scene() {
        let a = populated_stage(1234);
        let b = populated_stage(1234);

        for (x, y) in a.scene.objects().iter().zip(b.scene.objects()) {
            match (x, y) {
                (
                    orbfield::scene::SceneObject::Line(la),
                    orbfield::scene::SceneObject::Line(lb),
                ) => {
                    assert_eq!(la.start, lb.start);
                    assert_eq!(la.end, lb.end);
                }
                (
                    orbfield::scene::SceneObject::Mesh(ma),
                    orbfield::scene::SceneObject::Mesh(mb),
                ) => {
                    assert_eq!(ma.position, mb.position);
                    assert_eq!(ma.material.color, mb.material.color);
                }
                _ => panic!("object kinds diverged between identical seeds"),
            }
        }
    }

    #[test]
    fn test_pack_scene_vertex_counts() {
        let stage = populated_stage(11);
        let packed = pack_scene(&stage.scene);

        // 300 segments plus the shell's unique edges, two vertices each.
        let shell_edges = geometry::octahedron(orb::SHELL_RADIUS, orb::SUBDIVISION)
            .edges()
            .len();
        assert_eq!(packed.lines.len(), (lines::LINE_COUNT + shell_edges) * 2);

        // Solid orb, rubble and cubes are the opaque triangles.
        let rubble_faces = geometry::cone(
            debris::RUBBLE_BASE_RADIUS,
            debris::RUBBLE_HEIGHT,
            debris::RUBBLE_SEGMENTS,
        )
        .face_count();
        let cube_faces =
            geometry::cuboid(debris::CUBE_SIZE, debris::CUBE_SIZE, debris::CUBE_SIZE).face_count();
        let orb_faces = geometry::octahedron(orb::ORB_RADIUS, orb::SUBDIVISION).face_count();
        let expected_opaque = (orb_faces
            + debris::RUBBLE_COUNT * rubble_faces
            + debris::CUBE_COUNT * cube_faces)
            * 3;
        assert_eq!(packed.opaque.len(), expected_opaque);

        // Markers are the only transparent fill geometry.
        let marker_faces = geometry::uv_sphere(
            orbfield::scenes::markers::MARKER_RADIUS,
            orbfield::scenes::markers::MARKER_SEGMENTS,
            orbfield::scenes::markers::MARKER_SEGMENTS,
        )
        .face_count();
        assert_eq!(
            packed.transparent.len(),
            orb::SHELL_VERTEX_COUNT * marker_faces * 3
        );
    }

    #[test]
    fn test_packed_debris_positions_are_transformed() {
        let stage = populated_stage(13);
        let packed = pack_scene(&stage.scene);

        // Placements reach out to the debris spread; half-extents only
        // add the rubble height beyond it.
        let limit = debris::SPREAD + debris::RUBBLE_HEIGHT;
        let mut max_coord: f32 = 0.0;
        for vertex in &packed.opaque {
            for coord in vertex.position {
                assert!(
                    coord.abs() <= limit,
                    "opaque vertex escaped the debris volume: {:?}",
                    vertex.position
                );
                max_coord = max_coord.max(coord.abs());
            }
        }
        assert!(
            max_coord > debris::SPREAD * 0.9,
            "baked transforms should spread debris well past the orb, got {}",
            max_coord
        );
    }
}
