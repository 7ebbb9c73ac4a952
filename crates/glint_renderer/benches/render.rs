//! Parallel vs sequential rendering of the reference scene at 16:9 sizes.

use std::f32::consts::FRAC_PI_4;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glint_core::cube;
use glint_renderer::{
    render, CancelToken, Color, MeshObject, OpaqueMaterial, RectCamera, RenderConfig, Scene, SphereObject,
    SphericalLight, Vec3,
};

const WIDTHS: [usize; 4] = [100, 200, 500, 1000];

/// Tilted red mesh behind a reflective yellow sphere, lit by one point light.
fn reference_scene() -> (Scene, RectCamera) {
    let mut scene = Scene::new(RenderConfig::default().with_background(Color::DARK_CYAN).with_ambient(0.3));

    let mut mesh = cube(1.0);
    mesh.normalize();
    mesh.rotate(FRAC_PI_4, FRAC_PI_4, 0.0);
    scene.add_object(MeshObject::new(mesh, OpaqueMaterial::new(1.2, Color::RED, 0.8)));
    scene.add_object(SphereObject::new(
        Vec3::new(0.0, 0.0, 3.5),
        1.5,
        OpaqueMaterial::new(1.2, Color::YELLOW, 0.8).reflective(),
    ));
    scene.add_light(SphericalLight::new(Vec3::new(5.0, -5.0, -5.0), 1.0));

    let camera = RectCamera::new(
        Vec3::new(-2.0, -1.0, -5.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 2.25, 0.0),
        -4.0,
    );

    (scene, camera)
}

fn bench_render(c: &mut Criterion) {
    let (scene, camera) = reference_scene();
    let cancel = CancelToken::none();

    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    for width in WIDTHS {
        let height = width * 9 / 16;
        let mut buffer = vec![0u32; width * height];
        group.throughput(Throughput::Elements((width * height) as u64));

        for (name, parallel) in [("parallel", true), ("sequential", false)] {
            group.bench_with_input(BenchmarkId::new(name, width), &width, |b, &width| {
                b.iter(|| render(&scene, &camera, &mut buffer, width, height, parallel, &cancel))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
