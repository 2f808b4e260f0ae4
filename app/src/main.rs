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
mod io;

use std::env;
use std::path::Path;
use std::process;

use anyhow::Context;
use paft::Paft;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 4 {
        println!(
            "Run as: {} <input_file> <output_file> <no_of_threads>",
            args[0]
        );
        process::exit(1);
    }

    if let Err(err) = run(&args[1], &args[2], &args[3]) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(input_path: &str, output_path: &str, threads_arg: &str) -> anyhow::Result<()> {
    let threads: usize = threads_arg
        .parse()
        .with_context(|| format!("invalid thread count `{threads_arg}`"))?;

    let mut samples =
        io::read_samples(Path::new(input_path)).with_context(|| format!("reading {input_path}"))?;

    let fft = Paft::make_forward_fft_f64(samples.len(), threads)?;
    fft.execute(&mut samples)?;

    io::write_spectrum(Path::new(output_path), &samples)
        .with_context(|| format!("writing {output_path}"))?;

    Ok(())
}
