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

/// One merge pass of a block family rooted at `offset`, stride `step`.
///
/// Mirrors the merge loop of the recursion, shifted by the offset of the
/// recursion-tree node being reconstructed.
fn merge_level(
    dst: &mut [Complex<f64>],
    src: &[Complex<f64>],
    twiddles: &[Complex<f64>],
    step: usize,
    offset: usize,
) {
    let n = dst.len();

    let mut i = 0;
    while i < n {
        let t = twiddles[i] * src[i + step + offset];
        let even = src[i + offset];
        dst[i / 2 + offset] = even + t;
        dst[(i + n) / 2 + offset] = even - t;
        i += 2 * step;
    }
}

/// Performs the `log2(threads)` merge levels the workers never reached.
///
/// Level strides descend `threads/2, threads/4, .., 1`; a level of stride `s`
/// consists of `s` independent passes, one per offset in `0..s`. Buffer roles
/// flip once per level by recursion-depth parity, so the final level
/// (stride 1, even depth) always lands in `data` no matter the worker count.
pub(crate) fn complete(
    data: &mut [Complex<f64>],
    scratch: &mut [Complex<f64>],
    twiddles: &[Complex<f64>],
    threads: usize,
) {
    let mut step = threads / 2;
    while step >= 1 {
        let depth = step.trailing_zeros();
        let (dst, src): (&mut [Complex<f64>], &[Complex<f64>]) = if depth % 2 == 0 {
            (&mut *data, &*scratch)
        } else {
            (&mut *scratch, &*data)
        };

        for offset in 0..step {
            merge_level(dst, src, twiddles, step, offset);
        }

        step /= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::compute_twiddle;

    // Rebuilding an n=4 transform entirely from leaf level (as if every
    // recursion level had been skipped) must produce the plain DFT.
    #[test]
    fn test_full_reconstruction_from_leaves() {
        let input = [
            Complex::new(1.0, 0.0),
            Complex::new(2.0, 0.0),
            Complex::new(3.0, 0.0),
            Complex::new(4.0, 0.0),
        ];
        let mut data = input;
        let mut scratch = input;

        let twiddles: Vec<Complex<f64>> =
            (0..4).map(|k| compute_twiddle(k, 8)).collect();

        complete(&mut data, &mut scratch, &twiddles, 4);

        let expected = [
            Complex::new(10.0, 0.0),
            Complex::new(-2.0, 2.0),
            Complex::new(-2.0, 0.0),
            Complex::new(-2.0, -2.0),
        ];
        data.iter().zip(expected.iter()).for_each(|(a, b)| {
            assert!((a.re - b.re).abs() < 1e-12, "re {} != {}", a.re, b.re);
            assert!((a.im - b.im).abs() < 1e-12, "im {} != {}", a.im, b.im);
        });
    }
}
