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
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use num_complex::Complex;

/// Reads a sample count followed by that many real samples, all
/// whitespace-separated.
pub fn read_samples(path: &Path) -> anyhow::Result<Vec<Complex<f64>>> {
    let text = fs::read_to_string(path)?;
    let mut tokens = text.split_whitespace();

    let count: usize = tokens
        .next()
        .context("missing sample count")?
        .parse()
        .context("invalid sample count")?;

    let mut samples = Vec::new();
    samples
        .try_reserve_exact(count)
        .with_context(|| format!("allocating {count} samples"))?;

    for index in 0..count {
        let token = tokens
            .next()
            .with_context(|| format!("missing sample {index} of {count}"))?;
        let value: f64 = token
            .parse()
            .with_context(|| format!("invalid sample {index}: `{token}`"))?;
        samples.push(Complex::new(value, 0.0));
    }

    Ok(samples)
}

/// Writes the bin count, then one `"<real> <imag>"` line per bin with six
/// fractional digits.
pub fn write_spectrum(path: &Path, spectrum: &[Complex<f64>]) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", spectrum.len())?;
    for bin in spectrum.iter() {
        writeln!(writer, "{:.6} {:.6}", bin.re, bin.im)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("paft-io-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_read_samples() {
        let path = temp_path("read");
        fs::write(&path, "4\n1.0 2.5\n-3 4e-1\n").unwrap();

        let samples = read_samples(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], Complex::new(1.0, 0.0));
        assert_eq!(samples[1], Complex::new(2.5, 0.0));
        assert_eq!(samples[2], Complex::new(-3.0, 0.0));
        assert_eq!(samples[3], Complex::new(0.4, 0.0));
    }

    #[test]
    fn test_read_samples_truncated_input() {
        let path = temp_path("truncated");
        fs::write(&path, "3\n1.0 2.0\n").unwrap();

        let result = read_samples(&path);
        fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_preserves_printed_precision() {
        let path = temp_path("roundtrip");
        let spectrum = [
            Complex::new(0.123456789, -2.5),
            Complex::new(-7.0, 0.000001),
        ];
        write_spectrum(&path, &spectrum).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let mut tokens = text.split_whitespace();
        let count: usize = tokens.next().unwrap().parse().unwrap();
        assert_eq!(count, spectrum.len());

        for bin in spectrum.iter() {
            let re: f64 = tokens.next().unwrap().parse().unwrap();
            let im: f64 = tokens.next().unwrap().parse().unwrap();
            assert!((re - bin.re).abs() < 1e-6);
            assert!((im - bin.im).abs() < 1e-6);
        }
    }
}
