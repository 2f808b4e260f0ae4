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
use std::marker::PhantomData;

use num_complex::Complex;

use crate::radix2::decimate;

/// Raw view of a sample buffer shared between workers.
///
/// Workers address disjoint index classes: worker `t` of `P` only ever touches
/// indices congruent to `t` modulo `P`, so no two workers alias the same slot.
#[derive(Clone, Copy)]
pub(crate) struct SharedSamples<'a> {
    ptr: *mut Complex<f64>,
    len: usize,
    _buffer: PhantomData<&'a mut [Complex<f64>]>,
}

// Safety: index disjointness across workers is structural, see `decimate`.
unsafe impl Send for SharedSamples<'_> {}
unsafe impl Sync for SharedSamples<'_> {}

impl<'a> SharedSamples<'a> {
    pub(crate) fn new(samples: &'a mut [Complex<f64>]) -> Self {
        SharedSamples {
            ptr: samples.as_mut_ptr(),
            len: samples.len(),
            _buffer: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) unsafe fn load(&self, index: usize) -> Complex<f64> {
        debug_assert!(index < self.len);
        unsafe { *self.ptr.add(index) }
    }

    #[inline]
    pub(crate) unsafe fn store(&self, index: usize, value: Complex<f64>) {
        debug_assert!(index < self.len);
        unsafe { self.ptr.add(index).write(value) }
    }
}

/// Runs the recursion leaves owned by each worker and joins them all.
///
/// Worker `t` starts the engine at offset `t` with stride `threads`. The
/// buffer acting as merge destination at split depth `log2(threads)` follows
/// the ping-pong parity of that depth, the same rule the completion pass
/// applies on its way back up.
pub(crate) fn run_workers(
    data: &mut [Complex<f64>],
    scratch: &mut [Complex<f64>],
    twiddles: &[Complex<f64>],
    threads: usize,
) {
    let split_depth = threads.trailing_zeros();

    let data = SharedSamples::new(data);
    let scratch = SharedSamples::new(scratch);

    let (dst, src) = if split_depth % 2 == 0 {
        (data, scratch)
    } else {
        (scratch, data)
    };

    std::thread::scope(|scope| {
        for worker_id in 0..threads {
            scope.spawn(move || unsafe { decimate(dst, src, twiddles, worker_id, threads) });
        }
    });
}
