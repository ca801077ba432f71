//! Histogram stage: per-group digit frequency rows
//!
//! Each group walks its block assignment and counts how many of its
//! elements fall into each radix bucket for this pass. The rows land in
//! the digit-major global matrix `histogram[digit * WORKGROUP_COUNT +
//! group]`, which the offset-scan stage consumes in place. Cells are
//! write-exclusive per (digit, group), so no synchronization beyond the
//! stage boundary is needed.

use super::block::{block_bounds, group_blocks};
use super::dispatch::dispatch;
use super::{PassConfig, RADICES, WORKGROUP_COUNT};

/// Build the digit-major histogram matrix for one pass.
pub(crate) fn histogram_pass(keys: &[u32], cfg: &PassConfig, histogram: &mut [u32]) {
    debug_assert_eq!(histogram.len(), RADICES * WORKGROUP_COUNT);

    let mut rows = [[0u32; RADICES]; WORKGROUP_COUNT];
    dispatch(&mut rows, |group, row| {
        for block in group_blocks(keys.len(), group) {
            for &key in &keys[block_bounds(keys.len(), block)] {
                row[cfg.bucket(key) as usize] += 1;
            }
        }
    });

    for (group, row) in rows.iter().enumerate() {
        for (digit, &count) in row.iter().enumerate() {
            histogram[digit * WORKGROUP_COUNT + group] = count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_counts(keys: &[u32], cfg: &PassConfig) -> [u32; RADICES] {
        let mut counts = [0u32; RADICES];
        for &k in keys {
            counts[cfg.bucket(k) as usize] += 1;
        }
        counts
    }

    fn column_sums(histogram: &[u32]) -> [u32; RADICES] {
        let mut sums = [0u32; RADICES];
        for digit in 0..RADICES {
            for group in 0..WORKGROUP_COUNT {
                sums[digit] += histogram[digit * WORKGROUP_COUNT + group];
            }
        }
        sums
    }

    #[test]
    fn totals_match_naive_counts() {
        let cfg = PassConfig {
            shift: 4,
            descending: false,
            signed_pass: false,
            has_values: false,
        };
        let keys: Vec<u32> = (0..10_000u32).map(|i| i.wrapping_mul(2_654_435_761)).collect();
        let mut histogram = vec![0u32; RADICES * WORKGROUP_COUNT];
        histogram_pass(&keys, &cfg, &mut histogram);
        assert_eq!(column_sums(&histogram), naive_counts(&keys, &cfg));
    }

    #[test]
    fn tail_elements_not_counted_twice() {
        // Non-multiple of BLOCK_SIZE: total count must still equal n.
        let cfg = PassConfig {
            shift: 0,
            descending: true,
            signed_pass: false,
            has_values: false,
        };
        let keys = vec![0xabcd_1234u32; 5003];
        let mut histogram = vec![0u32; RADICES * WORKGROUP_COUNT];
        histogram_pass(&keys, &cfg, &mut histogram);
        let total: u32 = histogram.iter().sum();
        assert_eq!(total as usize, keys.len());
    }

    #[test]
    fn empty_input_yields_zero_matrix() {
        let cfg = PassConfig {
            shift: 0,
            descending: false,
            signed_pass: false,
            has_values: false,
        };
        let mut histogram = vec![1u32; RADICES * WORKGROUP_COUNT];
        histogram_pass(&[], &cfg, &mut histogram);
        assert!(histogram.iter().all(|&c| c == 0));
    }
}
