use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use grayscale_converter::image_pipeline::{
    comparison, conversion, ConversionMethod, PixelGrid, RgbColor,
};

fn generate_mock_grid(width: usize, height: usize) -> PixelGrid {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            pixels.push(RgbColor::new((x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8));
        }
    }
    PixelGrid::from_pixels(width, height, pixels).expect("mock grid dimensions")
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let grid = generate_mock_grid(width, height);

        group.bench_with_input(BenchmarkId::new("sequential", label), &grid, |b, grid| {
            b.iter(|| conversion::convert_grid(black_box(grid), ConversionMethod::LuminanceBt709));
        });
        group.bench_with_input(BenchmarkId::new("parallel", label), &grid, |b, grid| {
            b.iter(|| {
                conversion::convert_grid_parallel(black_box(grid), ConversionMethod::LuminanceBt709)
            });
        });
    }

    group.finish();
}

fn benchmark_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_methods");
    let grid = generate_mock_grid(500, 500);

    for method in ConversionMethod::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(method), &grid, |b, grid| {
            b.iter(|| conversion::convert_grid(black_box(grid), method));
        });
    }

    group.finish();
}

fn benchmark_comparison(c: &mut Criterion) {
    let grid = generate_mock_grid(500, 500);
    let gray_a = conversion::convert_grid(&grid, ConversionMethod::Average);
    let gray_b = conversion::convert_grid(&grid, ConversionMethod::LuminanceBt601);

    c.bench_function("compare_500x500", |b| {
        b.iter(|| comparison::compare(black_box(&gray_a), black_box(&gray_b)));
    });
}

criterion_group!(
    benches,
    benchmark_conversion_sizes,
    benchmark_methods,
    benchmark_comparison
);
criterion_main!(benches);
