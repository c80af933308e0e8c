use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use num_complex::{Complex32, Complex64};
use simple_radix2_fft::{fft_transform, generate_twiddle_table};

fn benchmark_fft_32(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft_f32");

    for k in 8..16 {
        let n = 1 << k;
        let table = generate_twiddle_table::<f32>(n).unwrap();
        let input: Vec<Complex32> = (0..n).map(|i| Complex32::new(i as f32, 0.0)).collect();

        group.bench_with_input(BenchmarkId::new("radix2", n), &n, |b, &n| {
            b.iter_batched(
                || input.clone(),
                |mut buffer| fft_transform(n, black_box(&mut buffer), black_box(&table)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn benchmark_fft_64(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft_f64");

    for k in 8..16 {
        let n = 1 << k;
        let table = generate_twiddle_table::<f64>(n).unwrap();
        let input: Vec<Complex64> = (0..n).map(|i| Complex64::new(i as f64, 0.0)).collect();

        group.bench_with_input(BenchmarkId::new("radix2", n), &n, |b, &n| {
            b.iter_batched(
                || input.clone(),
                |mut buffer| fft_transform(n, black_box(&mut buffer), black_box(&table)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn benchmark_twiddles(c: &mut Criterion) {
    c.bench_function("twiddles_f32_4096", |b| {
        b.iter(|| generate_twiddle_table::<f32>(black_box(4096)))
    });
}

criterion_group!(benches, benchmark_fft_32, benchmark_fft_64, benchmark_twiddles);
criterion_main!(benches);
