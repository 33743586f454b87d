use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fourier_engine::{Direction, Engine, Plan};
use num_complex::Complex;
use rand::distributions::Standard;
use rand::Rng;

fn bench_f32(c: &mut Criterion, title: &str, sizes: &mut dyn std::iter::Iterator<Item = usize>) {
    let mut group = c.benchmark_group(title);
    for size in sizes {
        let input = rand::thread_rng()
            .sample_iter(&Standard)
            .zip(rand::thread_rng().sample_iter(&Standard))
            .take(size)
            .map(|(x, y)| Complex::new(x, y))
            .collect::<Vec<_>>();

        // Plan construction
        group.bench_with_input(BenchmarkId::new("Plan", size), &size, |b, s| {
            b.iter(|| Plan::<f32>::new(*s, Direction::Forward).unwrap())
        });

        // Execution
        let plan = Plan::<f32>::new(size, Direction::Forward).unwrap();
        group.bench_with_input(BenchmarkId::new("Execute", size), &input, |b, i| {
            let mut output = vec![Complex::default(); i.len()];
            b.iter(|| plan.execute_in_place(i, &mut output).unwrap())
        });

        // Interleaved engine round trip
        let engine = Engine::<f32>::with_size(size).unwrap();
        let interleaved = fourier_engine::interleaved::to_interleaved(&input);
        group.bench_with_input(BenchmarkId::new("Engine", size), &interleaved, |b, i| {
            let mut output = vec![0f32; i.len()];
            b.iter(|| engine.transform_in_place(i, &mut output, false).unwrap())
        });

        // RustFFT
        let rustfft = rustfft::FftPlanner::<f32>::new().plan_fft_forward(size);
        group.bench_with_input(BenchmarkId::new("RustFFT", size), &input, |b, i| {
            let mut buffer = Vec::new();
            buffer.extend_from_slice(i);
            b.iter(|| rustfft.process(buffer.as_mut()))
        });
    }
    group.finish();
}

fn bench_f32_pow2(c: &mut Criterion) {
    bench_f32(
        c,
        "FFT, f32, powers of two",
        &mut (6..11).map(|x| 2usize.pow(x)),
    );
}

fn bench_f32_mixed(c: &mut Criterion) {
    bench_f32(
        c,
        "FFT, f32, mixed radix",
        &mut [60, 360, 1000, 2310].iter().copied(),
    );
}

fn bench_f32_prime(c: &mut Criterion) {
    bench_f32(
        c,
        "FFT, f32, primes",
        &mut [191, 439, 1013].iter().copied(),
    );
}

criterion_group!(benches, bench_f32_pow2, bench_f32_mixed, bench_f32_prime);
criterion_main!(benches);
