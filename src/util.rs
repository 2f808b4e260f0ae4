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

pub(crate) fn compute_twiddle(index: usize, fft_len: usize) -> Complex<f64> {
    let angle = -2.0 * std::f64::consts::PI * index as f64 / fft_len as f64;
    let (v_sin, v_cos) = angle.sin_cos();

    Complex {
        re: v_cos,
        im: v_sin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twiddle_unit_circle() {
        let w0 = compute_twiddle(0, 16);
        assert!((w0.re - 1.0).abs() < 1e-15 && w0.im.abs() < 1e-15);

        // Half a turn lands on -1.
        let w_half = compute_twiddle(8, 16);
        assert!((w_half.re + 1.0).abs() < 1e-15 && w_half.im.abs() < 1e-15);

        // A quarter turn forward lands on -i.
        let w_quarter = compute_twiddle(4, 16);
        assert!(w_quarter.re.abs() < 1e-15 && (w_quarter.im + 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_twiddle_conjugate_symmetry() {
        for k in 1..8 {
            let w = compute_twiddle(k, 16);
            let mirrored = compute_twiddle(16 - k, 16);
            assert!((w.re - mirrored.re).abs() < 1e-15);
            assert!((w.im + mirrored.im).abs() < 1e-15);
        }
    }
}
