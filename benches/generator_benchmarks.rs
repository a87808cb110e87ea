use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use polyhash::{Config, GeohashGenerator, GridStepping, encode, point_in_polygon};
use polyhash::{Polygon, Vertex};

fn city_block() -> Vec<(f64, f64)> {
    vec![
        (40.7000, -74.0100),
        (40.7000, -74.0000),
        (40.7060, -73.9980),
        (40.7100, -74.0050),
        (40.7060, -74.0100),
    ]
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for precision in [5usize, 8, 12] {
        group.bench_with_input(
            BenchmarkId::from_parameter(precision),
            &precision,
            |b, &precision| b.iter(|| encode(black_box(40.7128), black_box(-74.0060), precision)),
        );
    }

    group.finish();
}

fn benchmark_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let block: Vec<Vertex> = city_block().into_iter().map(Vertex::from).collect();
    group.bench_function("five_vertices", |b| {
        b.iter(|| point_in_polygon(black_box(40.7050), black_box(-74.0040), &block))
    });

    // 256-gon approximating a circle
    let circle: Polygon = (0..256)
        .map(|i| {
            let theta = i as f64 / 256.0 * std::f64::consts::TAU;
            (40.0 + 0.01 * theta.sin(), -74.0 + 0.01 * theta.cos())
        })
        .collect();
    group.bench_function("256_vertices", |b| {
        b.iter(|| point_in_polygon(black_box(40.002), black_box(-74.003), circle.vertices()))
    });

    group.finish();
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(20);

    for stepping in [GridStepping::Indexed, GridStepping::Accumulate] {
        let config = Config::default().with_stepping(stepping);
        let generator = GeohashGenerator::with_config(city_block(), config).unwrap();

        group.bench_function(format!("city_block_{:?}", stepping).to_lowercase(), |b| {
            b.iter(|| generator.generate().count())
        });
    }

    let generator = GeohashGenerator::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    group.bench_function("unit_square_first_1000", |b| {
        b.iter(|| generator.generate().take(1000).count())
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_classify,
    benchmark_generate
);
criterion_main!(benches);
