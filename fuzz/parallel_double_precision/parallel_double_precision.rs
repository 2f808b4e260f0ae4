#![no_main]

use libfuzzer_sys::fuzz_target;
use num_complex::Complex;
use paft::Paft;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    size_log2: u8,
    threads_log2: u8,
    re: f64,
    im: f64,
}

fuzz_target!(|data: Target| {
    if data.size_log2 > 12 {
        return;
    }
    let size = 1usize << data.size_log2;
    let threads = 1usize << (data.threads_log2 % (data.size_log2 + 1));

    let executor = Paft::make_forward_fft_f64(size, threads).unwrap();
    let mut chunk = vec![Complex::new(data.re, data.im); size];
    executor.execute(&mut chunk).unwrap();

    let mut scratch = vec![Complex::default(); executor.scratch_length()];
    let mut with_scratch = vec![Complex::new(data.re, data.im); size];
    executor
        .execute_with_scratch(&mut with_scratch, &mut scratch)
        .unwrap();
});
