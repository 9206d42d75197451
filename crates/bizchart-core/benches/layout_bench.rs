use bizchart_core::{BarLayout, ChartConfig, ChartLayout, Dataset, HitTester, LineLayout, Offsets, Point, Rect, Series};
use criterion::{criterion_group, criterion_main, black_box, BenchmarkId, Criterion};

fn gen_dataset(n: usize, series: usize) -> Dataset {
    let mut d = Dataset::new();
    d.set_absciss((0..n).map(|i| i as f64).collect());
    for s in 0..series {
        let phase = s as f64;
        // waveform with drift, kept positive
        let values: Series = (0..n)
            .map(|i| (i as f64 * 0.01 + phase).sin() * 10.0 + 20.0 + i as f64 * 0.0001)
            .collect();
        let _ = d.append(values);
    }
    d
}

fn bench_layout(c: &mut Criterion) {
    let config = ChartConfig::default();
    let plot = Rect::from_xywh(0.0, 0.0, 780.0, 580.0);
    let mut group = c.benchmark_group("layout");
    for &n in &[1_000usize, 10_000usize, 50_000usize] {
        let data = gen_dataset(n, 3);
        group.bench_with_input(BenchmarkId::new("line", n), &data, |b, d| {
            let layout = LineLayout::new();
            b.iter(|| black_box(layout.compute(d, &config, plot)));
        });
        let mut area = data.clone();
        area.set_area(true);
        group.bench_with_input(BenchmarkId::new("line_area", n), &area, |b, d| {
            let layout = LineLayout::new();
            b.iter(|| black_box(layout.compute(d, &config, plot)));
        });
    }
    for &n in &[100usize, 1_000usize] {
        let data = gen_dataset(n, 4);
        group.bench_with_input(BenchmarkId::new("bar", n), &data, |b, d| {
            let layout = BarLayout::new();
            b.iter(|| black_box(layout.compute(d, &config, plot)));
        });
    }
    group.finish();
}

fn bench_hit(c: &mut Criterion) {
    let config = ChartConfig::default();
    let data = gen_dataset(10_000, 3);
    let tester = HitTester::new();
    c.bench_function("hit_miss_10k", |b| {
        b.iter(|| black_box(tester.find(&data, &config, Offsets::default(), Point::new(400.0, -50.0))));
    });
}

criterion_group!(benches, bench_layout, bench_hit);
criterion_main!(benches);
