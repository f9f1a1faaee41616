use orbfield::scene::{Scene, SceneObject};
use orbfield::scenes::lines::{self, INNER_RADIUS, LINE_COUNT, LINE_OPACITY, MAX_STRETCH};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn build_field(seed: u64) -> Scene {
    let mut scene = Scene::new();
    let mut rng = StdRng::seed_from_u64(seed);
    lines::scatter(&mut scene, &mut rng);
    scene
}

fn segments(scene: &Scene) -> Vec<&orbfield::scene::LineSegment> {
    scene
        .objects()
        .iter()
        .map(|object| match object {
            SceneObject::Line(line) => line,
            other => panic!("line field should only add segments, got {:?}", other),
        })
        .collect()
}

#[cfg(test)]
mod line_field_tests {
    use super::*;

    #[test]
    fn test_produces_exactly_300_segments() {
        let scene = build_field(1);
        assert_eq!(scene.object_count(), LINE_COUNT);
    }

    #[test]
    fn test_inner_endpoints_on_shell() {
        let scene = build_field(2);
        for line in segments(&scene) {
            assert!(
                (line.start.length() - INNER_RADIUS).abs() < 0.01,
                "inner endpoint should sit on the {} shell, got {}",
                INNER_RADIUS,
                line.start.length()
            );
        }
    }

    #[test]
    fn test_outer_endpoint_strictly_farther() {
        let scene = build_field(3);
        for line in segments(&scene) {
            let inner = line.start.length();
            let outer = line.end.length();
            assert!(
                outer > inner,
                "outer endpoint must be farther out: {} vs {}",
                outer,
                inner
            );
            assert!(
                outer <= inner * (1.0 + MAX_STRETCH) + 0.01,
                "stretch factor bounded by {}",
                1.0 + MAX_STRETCH
            );
        }
    }

    #[test]
    fn test_endpoints_are_collinear_with_origin() {
        let scene = build_field(4);
        for line in segments(&scene) {
            let cross = line.start.cross(line.end);
            assert!(
                cross.length() < 1.0,
                "segment should radiate from the origin, cross product {:?}",
                cross
            );
        }
    }

    #[test]
    fn test_translucent_white_material() {
        let scene = build_field(5);
        for line in segments(&scene) {
            assert_eq!(line.color, [1.0, 1.0, 1.0]);
            assert_eq!(line.opacity, LINE_OPACITY);
        }
    }

    #[test]
    fn test_repeated_invocation_appends() {
        let mut scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(6);
        lines::scatter(&mut scene, &mut rng);
        lines::scatter(&mut scene, &mut rng);
        assert_eq!(
            scene.object_count(),
            2 * LINE_COUNT,
            "a second pass adds another unrelated batch"
        );
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let a = build_field(42);
        let b = build_field(42);
        for (x, y) in segments(&a).iter().zip(segments(&b).iter()) {
            assert_eq!(x.start, y.start);
            assert_eq!(x.end, y.end);
        }
    }

    #[test]
    fn test_seeds_change_the_field() {
        let a = build_field(42);
        let b = build_field(43);
        let differs = segments(&a)
            .iter()
            .zip(segments(&b).iter())
            .any(|(x, y)| x.start != y.start);
        assert!(differs, "different seeds should produce different fields");
    }
}
