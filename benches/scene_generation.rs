use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orbfield::renderer::pack_scene;
use orbfield::scene::Scene;
use orbfield::{geometry, populate};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark: welded octahedron subdivision at the shell's level
fn bench_octahedron_subdivision(c: &mut Criterion) {
    c.bench_function("octahedron_level_2", |b| {
        b.iter(|| geometry::octahedron(black_box(400.0), black_box(2)))
    });
}

/// Benchmark: marker sphere tessellation
fn bench_marker_sphere(c: &mut Criterion) {
    c.bench_function("uv_sphere_32x32", |b| {
        b.iter(|| geometry::uv_sphere(black_box(5.0), black_box(32), black_box(32)))
    });
}

/// Benchmark: all four generation steps into a fresh scene
fn bench_populate(c: &mut Criterion) {
    c.bench_function("populate_scene", |b| {
        b.iter(|| {
            let mut scene = Scene::new();
            let mut rng = StdRng::seed_from_u64(7);
            populate(&mut scene, &mut rng);
            black_box(scene.object_count())
        })
    });
}

/// Benchmark: flattening the populated scene into vertex streams
fn bench_pack_scene(c: &mut Criterion) {
    let mut scene = Scene::new();
    let mut rng = StdRng::seed_from_u64(7);
    populate(&mut scene, &mut rng);

    c.bench_function("pack_scene", |b| {
        b.iter(|| black_box(pack_scene(black_box(&scene))))
    });
}

criterion_group!(
    benches,
    bench_octahedron_subdivision,
    bench_marker_sphere,
    bench_populate,
    bench_pack_scene
);
criterion_main!(benches);
