/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use num_complex::Complex;
use paft::Paft;
use rand::Rng;

fn random_signal(n: usize) -> Vec<Complex<f64>> {
    let mut signal = vec![Complex::<f64>::default(); n];
    for z in signal.iter_mut() {
        *z = Complex {
            re: rand::rng().random(),
            im: 0.0,
        };
    }
    signal
}

pub fn bench_thread_sweep(c: &mut Criterion) {
    let n = 1 << 16;
    let input = random_signal(n);

    for threads in [1usize, 2, 4, 8] {
        let plan = Paft::make_forward_fft_f64(n, threads).unwrap();
        let mut scratch = vec![Complex::<f64>::default(); plan.scratch_length()];

        c.bench_function(format!("paft radix2 {n} x{threads}").as_str(), |b| {
            b.iter_batched(
                || input.to_vec(),
                |mut working| {
                    plan.execute_with_scratch(&mut working, &mut scratch).unwrap();
                },
                BatchSize::LargeInput,
            );
        });
    }
}

pub fn bench_reference_dft(c: &mut Criterion) {
    let n = 1500;
    let input = random_signal(n);
    let plan = Paft::make_forward_fft_f64(n, 4).unwrap();

    c.bench_function(format!("paft dft {n} x4").as_str(), |b| {
        b.iter_batched(
            || input.to_vec(),
            |mut working| {
                plan.execute(&mut working).unwrap();
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_thread_sweep, bench_reference_dft);
criterion_main!(benches);
