/*
 * // Copyright (c) Radzivon Bartoshyk 6/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use num_complex::Complex;

use crate::completion::complete;
use crate::err::try_vec;
use crate::partition::{run_workers, SharedSamples};
use crate::util::compute_twiddle;
use crate::{FftExecutor, PaftError};

/// Recursive decimation-in-time over the ping-pong pair.
///
/// Splits `src` into even and odd strides with the buffer roles swapped and
/// the stride doubled, then combines the halves into `dst`:
///
/// ```text
/// t                     = w[i] * src[offset + i + step]
/// dst[offset + i/2]     = src[offset + i] + t
/// dst[offset + (i+n)/2] = src[offset + i] - t
/// ```
///
/// with `w[i] = exp(-i*PI*i/n)` taken from the precomputed table. The merge
/// loop writes `dst` only; `src` is written solely inside the sub-calls.
///
/// # Safety
///
/// `dst` and `src` must view distinct buffers of the same power-of-two length
/// `n`, `offset < step`, and `step` must be a power of two. Concurrent callers
/// must hold distinct residues `offset mod step` of the same stride, so that
/// every index touched here stays inside the caller's residue class.
pub(crate) unsafe fn decimate(
    dst: SharedSamples,
    src: SharedSamples,
    twiddles: &[Complex<f64>],
    offset: usize,
    step: usize,
) {
    let n = dst.len();
    debug_assert_eq!(n, src.len());
    debug_assert!(offset < step && step.is_power_of_two());

    if step >= n {
        return;
    }

    unsafe {
        decimate(src, dst, twiddles, offset, step * 2);
        decimate(src, dst, twiddles, offset + step, step * 2);

        let mut i = 0;
        while i < n {
            let t = *twiddles.get_unchecked(i) * src.load(offset + i + step);
            let even = src.load(offset + i);
            dst.store(offset + i / 2, even + t);
            dst.store(offset + (i + n) / 2, even - t);
            i += 2 * step;
        }
    }
}

/// Radix-2 decimation-in-time plan with the recursion tree split across a
/// fixed set of worker threads.
///
/// Each of the `threads` workers owns one leaf of the split: worker `t` runs
/// the sequential recursion over indices congruent to `t` modulo `threads`.
/// The `log2(threads)` merge levels above the split run single-threaded after
/// the join.
pub(crate) struct ParallelRadix2 {
    twiddles: Vec<Complex<f64>>,
    execution_length: usize,
    threads: usize,
}

impl ParallelRadix2 {
    pub fn new(size: usize, threads: usize) -> Result<ParallelRadix2, PaftError> {
        assert!(size.is_power_of_two(), "Input length must be a power of 2");

        if !threads.is_power_of_two() {
            return Err(PaftError::ThreadCountNotPowerOfTwo(threads));
        }
        if threads > size {
            return Err(PaftError::ThreadCountExceedsLength(threads, size));
        }

        // w[k] = exp(-i*PI*k/size); the half-angle convention the recursion
        // expects, since its stride already encodes the per-level doubling.
        let mut twiddles = try_vec![Complex::<f64>::default(); size];
        for (k, dst) in twiddles.iter_mut().enumerate() {
            *dst = compute_twiddle(k, size * 2);
        }

        Ok(ParallelRadix2 {
            twiddles,
            execution_length: size,
            threads,
        })
    }
}

impl FftExecutor for ParallelRadix2 {
    fn execute(&self, in_place: &mut [Complex<f64>]) -> Result<(), PaftError> {
        let mut scratch = try_vec![Complex::<f64>::default(); self.execution_length];
        self.execute_with_scratch(in_place, &mut scratch)
    }

    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<f64>],
        scratch: &mut [Complex<f64>],
    ) -> Result<(), PaftError> {
        if self.execution_length != in_place.len() {
            return Err(PaftError::InvalidInPlaceLength(
                self.execution_length,
                in_place.len(),
            ));
        }
        if scratch.len() < self.execution_length {
            return Err(PaftError::ScratchBufferIsTooSmall(
                scratch.len(),
                self.execution_length,
            ));
        }

        let scratch = &mut scratch[..self.execution_length];
        // Both buffers must start as the input: the deepest merge level reads
        // whichever buffer holds the source role at leaf depth, and that
        // parity flips with log2(n).
        scratch.copy_from_slice(in_place);

        run_workers(in_place, scratch, &self.twiddles, self.threads);
        complete(in_place, scratch, &self.twiddles, self.threads);

        Ok(())
    }

    fn length(&self) -> usize {
        self.execution_length
    }

    fn scratch_length(&self) -> usize {
        self.execution_length
    }
}
