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

use crate::err::try_vec;
use crate::util::compute_twiddle;
use crate::{FftExecutor, PaftError};

/// Direct O(n^2) transform.
///
/// Serves the sizes the recursive engine cannot take, and doubles as the
/// accuracy reference in tests. Output rows are independent, so they are
/// split into contiguous bands of `ceil(n/threads)` rows, one scoped thread
/// per band.
pub(crate) struct Dft {
    execution_length: usize,
    twiddles: Vec<Complex<f64>>,
    threads: usize,
}

impl Dft {
    pub fn new(size: usize, threads: usize) -> Result<Dft, PaftError> {
        Ok(Dft {
            execution_length: size,
            twiddles: generate_twiddles_dft(size)?,
            threads: threads.clamp(1, size.max(1)),
        })
    }
}

pub(crate) fn generate_twiddles_dft(size: usize) -> Result<Vec<Complex<f64>>, PaftError> {
    let mut twiddles = try_vec![Complex::<f64>::default(); size];
    for (k, dst) in twiddles.iter_mut().enumerate() {
        *dst = compute_twiddle(k, size);
    }
    Ok(twiddles)
}

impl FftExecutor for Dft {
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

        let n = self.execution_length;
        let rows_per_band = n.div_ceil(self.threads);
        let (rows, _) = scratch.split_at_mut(n);

        let signal = &*in_place;
        let twiddles = self.twiddles.as_slice();

        std::thread::scope(|scope| {
            for (band, band_rows) in rows.chunks_mut(rows_per_band).enumerate() {
                let base = band * rows_per_band;
                scope.spawn(move || {
                    for (row, dst) in band_rows.iter_mut().enumerate() {
                        let k = base + row;
                        let mut sum = Complex::new(0.0, 0.0);
                        let mut twiddle_idx = 0usize;
                        for src in signal.iter() {
                            let w = unsafe { *twiddles.get_unchecked(twiddle_idx) };
                            sum += *src * w;
                            twiddle_idx += k;
                            if twiddle_idx >= n {
                                twiddle_idx -= n;
                            }
                        }
                        *dst = sum;
                    }
                });
            }
        });

        in_place.copy_from_slice(rows);
        Ok(())
    }

    fn length(&self) -> usize {
        self.execution_length
    }

    fn scratch_length(&self) -> usize {
        self.execution_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dft_impulse() {
        let dft = Dft::new(5, 1).unwrap();
        let mut input = vec![Complex::new(0.0, 0.0); 5];
        input[0] = Complex::new(1.0, 0.0);
        dft.execute(&mut input).unwrap();

        for bin in input.iter() {
            assert!((bin.re - 1.0).abs() < 1e-12);
            assert!(bin.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_dft_constant_signal() {
        let dft = Dft::new(6, 2).unwrap();
        let mut input = vec![Complex::new(0.5, 0.0); 6];
        dft.execute(&mut input).unwrap();

        assert!((input[0].re - 3.0).abs() < 1e-12);
        assert!(input[0].im.abs() < 1e-12);
        for bin in input.iter().skip(1) {
            assert!(bin.re.abs() < 1e-12 && bin.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_dft_band_split_is_invariant() {
        let size = 7;
        let source: Vec<Complex<f64>> = (0..size)
            .map(|i| Complex::new(i as f64 * 0.25 - 0.5, (i as f64).sin()))
            .collect();

        let mut sequential = source.to_vec();
        Dft::new(size, 1).unwrap().execute(&mut sequential).unwrap();

        for threads in 2..=size {
            let mut banded = source.to_vec();
            Dft::new(size, threads).unwrap().execute(&mut banded).unwrap();
            sequential.iter().zip(banded.iter()).for_each(|(a, b)| {
                assert!((a.re - b.re).abs() < 1e-12);
                assert!((a.im - b.im).abs() < 1e-12);
            });
        }
    }
}
