/*
 * // Copyright (c) Radzivon Bartoshyk 9/2025. All rights reserved.
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
use std::error::Error;
use std::fmt::Formatter;

#[derive(Clone, Debug)]
pub enum PaftError {
    OutOfMemory(usize),
    InvalidInPlaceLength(usize, usize),
    ScratchBufferIsTooSmall(usize, usize),
    ZeroSizedFft,
    ThreadCountNotPowerOfTwo(usize),
    ThreadCountExceedsLength(usize, usize),
}

impl Error for PaftError {}

impl std::fmt::Display for PaftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PaftError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} bytes to vector",))
            }
            PaftError::InvalidInPlaceLength(s0, s1) => f.write_fmt(format_args!(
                "In-place length expected to be {s0}, but it was {s1}"
            )),
            PaftError::ScratchBufferIsTooSmall(current, required) => f.write_fmt(format_args!(
                "Scratch buffer size must be at least {required} but it is {current}"
            )),
            PaftError::ZeroSizedFft => f.write_str("Cannot execute FFT on zero-sized buffers"),
            PaftError::ThreadCountNotPowerOfTwo(threads) => f.write_fmt(format_args!(
                "Worker count must be a power of two, but it was {threads}"
            )),
            PaftError::ThreadCountExceedsLength(threads, length) => f.write_fmt(format_args!(
                "Worker count {threads} cannot exceed the transform length {length}"
            )),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::PaftError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
