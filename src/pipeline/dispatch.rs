//! Group dispatch and shared output views
//!
//! A dispatch runs one kernel closure per group, in parallel when the
//! `rayon` feature is enabled and serially otherwise. The call returning
//! is the pipeline's global barrier: the next stage is only launched once
//! every group of the previous dispatch has finished.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Run `kernel(group, state)` once per element of `states`.
pub(crate) fn dispatch<S, F>(states: &mut [S], kernel: F)
where
    S: Send,
    F: Fn(usize, &mut S) + Sync,
{
    #[cfg(feature = "rayon")]
    {
        states
            .par_iter_mut()
            .enumerate()
            .for_each(|(group, state)| kernel(group, state));
    }

    #[cfg(not(feature = "rayon"))]
    {
        for (group, state) in states.iter_mut().enumerate() {
            kernel(group, state);
        }
    }
}

/// Output buffer view that permute groups scatter into concurrently.
///
/// The offset table partitions the output: no two groups ever produce the
/// same destination index within one dispatch, so unsynchronized writes
/// through the raw pointer are sound. This mirrors how the rest of the
/// pipeline treats the histogram matrix: write-exclusive per cell, with
/// the stage boundary as the only synchronization.
pub(crate) struct ScatterBuf {
    ptr: *mut u32,
    len: usize,
}

unsafe impl Send for ScatterBuf {}
unsafe impl Sync for ScatterBuf {}

impl ScatterBuf {
    pub(crate) fn new(buf: &mut [u32]) -> Self {
        Self {
            ptr: buf.as_mut_ptr(),
            len: buf.len(),
        }
    }

    /// Write one word.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and not written by any other group during
    /// the current dispatch.
    #[inline]
    pub(crate) unsafe fn write(&self, index: usize, value: u32) {
        debug_assert!(index < self.len);
        unsafe { *self.ptr.add(index) = value }
    }
}
