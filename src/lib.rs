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
mod completion;
mod dft;
mod err;
mod partition;
mod radix2;
mod util;

pub use err::PaftError;

use crate::dft::Dft;
use crate::radix2::ParallelRadix2;
use num_complex::Complex;

/// A planned forward transform over double-precision complex samples.
pub trait FftExecutor {
    /// Transforms `in_place`, allocating the ping-pong scratch internally.
    fn execute(&self, in_place: &mut [Complex<f64>]) -> Result<(), PaftError>;
    /// Transforms `in_place` using a caller-provided scratch of at least
    /// [`FftExecutor::scratch_length`] elements.
    fn execute_with_scratch(
        &self,
        in_place: &mut [Complex<f64>],
        scratch: &mut [Complex<f64>],
    ) -> Result<(), PaftError>;
    fn length(&self) -> usize;
    fn scratch_length(&self) -> usize;
}

pub struct Paft {}

impl Paft {
    /// Plans a forward FFT of `n` samples computed by `threads` workers.
    ///
    /// Powers of two run the thread-partitioned recursive radix-2 engine;
    /// `threads` must then be a power of two no greater than `n`. Any other
    /// size falls back to the direct DFT, which accepts any worker count and
    /// clamps it to `1..=n`.
    pub fn make_forward_fft_f64(
        n: usize,
        threads: usize,
    ) -> Result<Box<dyn FftExecutor + Send + Sync>, PaftError> {
        if n == 0 {
            return Err(PaftError::ZeroSizedFft);
        }
        if n.is_power_of_two() {
            ParallelRadix2::new(n, threads)
                .map(|x| Box::new(x) as Box<dyn FftExecutor + Send + Sync>)
        } else {
            Dft::new(n, threads).map(|x| Box::new(x) as Box<dyn FftExecutor + Send + Sync>)
        }
    }
}
