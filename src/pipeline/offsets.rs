//! Offset-scan stage: histogram counts to global write bases
//!
//! Runs as a single group so one running carry (`seed`) can be threaded
//! across digit rows without any cross-group communication. Digits must be
//! processed in strictly increasing order: that order is what lays buckets
//! out contiguously 0..15 in the pass output and therefore defines the
//! sort order of the pass.

use super::scan::exclusive_scan;
use super::{RADICES, WORKGROUP_COUNT};

/// Convert the digit-major histogram in place into exclusive global write
/// offsets: afterwards `histogram[d * WORKGROUP_COUNT + g]` is the output
/// index at which group `g` writes its first element of bucket `d`.
pub(crate) fn offset_scan(histogram: &mut [u32]) {
    debug_assert_eq!(histogram.len(), RADICES * WORKGROUP_COUNT);

    let mut seed = 0u32;
    for digit in 0..RADICES {
        let row = &mut histogram[digit * WORKGROUP_COUNT..(digit + 1) * WORKGROUP_COUNT];
        let total = exclusive_scan(row);
        for offset in row.iter_mut() {
            *offset += seed;
        }
        seed += total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_counting_sort_bases() {
        // Two groups with counts, remaining groups empty.
        let mut histogram = vec![0u32; RADICES * WORKGROUP_COUNT];
        // digit 0: group 0 has 3, group 1 has 2
        histogram[0] = 3;
        histogram[1] = 2;
        // digit 1: group 0 has 1
        histogram[WORKGROUP_COUNT] = 1;
        // digit 3: group 1 has 4
        histogram[3 * WORKGROUP_COUNT + 1] = 4;

        offset_scan(&mut histogram);

        assert_eq!(histogram[0], 0); // digit 0, group 0
        assert_eq!(histogram[1], 3); // digit 0, group 1
        assert_eq!(histogram[WORKGROUP_COUNT], 5); // digit 1, group 0
        assert_eq!(histogram[3 * WORKGROUP_COUNT + 1], 6); // digit 3, group 1
        // Later groups of digit 3 sit past the whole digit-3 run.
        assert_eq!(histogram[3 * WORKGROUP_COUNT + 2], 10);
    }

    #[test]
    fn offsets_are_monotone_in_scan_order() {
        let mut histogram: Vec<u32> = (0..RADICES * WORKGROUP_COUNT)
            .map(|i| (i as u32).wrapping_mul(7) % 5)
            .collect();
        let counts = histogram.clone();
        offset_scan(&mut histogram);

        let mut expected = 0u32;
        for digit in 0..RADICES {
            for group in 0..WORKGROUP_COUNT {
                let cell = digit * WORKGROUP_COUNT + group;
                assert_eq!(histogram[cell], expected);
                expected += counts[cell];
            }
        }
    }
}
