//! The four-stage digit-sort pipeline
//!
//! One radix pass is three grouped dispatches over the same data:
//! histogram (per-group digit counts), offset scan (counts to global write
//! bases, single group), and permute (stable local sort plus global
//! scatter). Float keys additionally get a whole-array bit-flip dispatch
//! before the first pass and after the last.
//!
//! # Execution model
//!
//! Groups are the unit of parallelism; each group's kernel runs its lanes
//! sequentially, with the GPU's intra-group barriers realized as phase
//! boundaries inside the kernel (every read of one phase completes before
//! any write of the next). The global barrier between stages is the return
//! of the dispatch call: a stage function does not return until every
//! group has finished.

pub(crate) mod block;
pub(crate) mod dispatch;
pub(crate) mod flip;
pub(crate) mod histogram;
pub(crate) mod offsets;
pub(crate) mod permute;
pub(crate) mod scan;

use crate::key::{digit_signed, digit_unsigned};

/// Number of thread groups executing the histogram and permute stages.
pub(crate) const WORKGROUP_COUNT: usize = 48;
/// Lanes per group in the source compute model; blocks are sized off it.
pub(crate) const WORKGROUP_SIZE: usize = 256;
/// Elements a group consumes per block iteration (4 per lane).
pub(crate) const BLOCK_SIZE: usize = 4 * WORKGROUP_SIZE;
/// Key bits consumed per pass.
pub(crate) const BITS_PER_PASS: u32 = 4;
/// Radix bucket count per pass.
pub(crate) const RADICES: usize = 1 << BITS_PER_PASS;
/// Mask over a single digit.
pub(crate) const RADIX_MASK: u32 = RADICES as u32 - 1;
/// Fixed pass count: 32 key bits at 4 bits per pass.
pub(crate) const PASS_COUNT: u32 = 32 / BITS_PER_PASS;

/// Per-pass scalar state, read-only for the duration of one pass.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PassConfig {
    /// Bit offset of this pass's digit (0, 4, .., 28).
    pub shift: u32,
    /// Sort high-to-low instead of low-to-high.
    pub descending: bool,
    /// Sign-aware digit extraction; true only on the shift-28 pass of a
    /// signed (non-float) sort.
    pub signed_pass: bool,
    /// Whether a payload buffer is carried alongside the keys.
    pub has_values: bool,
}

impl PassConfig {
    /// Radix bucket for `bits` on this pass.
    ///
    /// Both the histogram and permute stages classify through this one
    /// function; the descending order is implemented here by reflecting
    /// the digit rather than by reversing output anywhere downstream.
    #[inline]
    pub fn bucket(&self, bits: u32) -> u32 {
        let digit = if self.signed_pass {
            digit_signed(bits, self.shift)
        } else {
            digit_unsigned(bits, self.shift)
        };
        if self.descending != self.signed_pass {
            RADIX_MASK - digit
        } else {
            digit
        }
    }

    /// Padding key for lanes past the end of the array: always lands in
    /// the highest bucket of this pass, after every real element.
    #[inline]
    pub fn sentinel(&self) -> u32 {
        let base = if self.descending { 0 } else { u32::MAX };
        if self.signed_pass {
            base ^ 0x8000_0000
        } else {
            base
        }
    }
}

/// Run one complete radix pass: histogram, offset scan, permute.
///
/// `src`/`dst` are the ping-pong buffer pair for this pass; the permute
/// stage writes only into `dst`. `src_values`/`dst_values` are empty
/// slices when no payload is carried.
pub(crate) fn execute_pass(
    src: &[u32],
    src_values: &[u32],
    dst: &mut [u32],
    dst_values: &mut [u32],
    histogram: &mut [u32],
    scratch: &mut [permute::GroupScratch],
    cfg: &PassConfig,
) {
    histogram::histogram_pass(src, cfg, histogram);
    offsets::offset_scan(histogram);

    let keys_out = dispatch::ScatterBuf::new(dst);
    let values_out = dispatch::ScatterBuf::new(dst_values);
    permute::permute_pass(
        src,
        src_values,
        &keys_out,
        &values_out,
        histogram,
        cfg,
        scratch,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(shift: u32, descending: bool, signed_pass: bool) -> PassConfig {
        PassConfig {
            shift,
            descending,
            signed_pass,
            has_values: false,
        }
    }

    #[test]
    fn bucket_ascending_unsigned() {
        let c = cfg(4, false, false);
        assert_eq!(c.bucket(0x0000_00a0), 0xa);
        assert_eq!(c.bucket(0xffff_ff0f), 0x0);
    }

    #[test]
    fn bucket_descending_reflects_digit() {
        let c = cfg(0, true, false);
        assert_eq!(c.bucket(0x0), 0xf);
        assert_eq!(c.bucket(0xf), 0x0);
    }

    #[test]
    fn sentinel_lands_in_top_bucket() {
        for descending in [false, true] {
            for signed_pass in [false, true] {
                let c = cfg(28, descending, signed_pass);
                assert_eq!(c.bucket(c.sentinel()), RADIX_MASK);
            }
        }
    }
}
