//! Randomized integration tests
//!
//! Multiset preservation and sortedness over random inputs, including the
//! large non-block-aligned descending scenario.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use radixr::{RadixSorter, SortOrder};

fn multiset_fingerprint(keys: &[u32]) -> (usize, u64, u64) {
    let sum = keys.iter().map(|&k| k as u64).sum();
    let xor = keys
        .iter()
        .map(|&k| (k as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15))
        .fold(0u64, u64::wrapping_add);
    (keys.len(), sum, xor)
}

#[test]
fn test_random_u32_multiset_preserved() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut sorter = RadixSorter::new();
    for _ in 0..10 {
        let n = rng.gen_range(0..20_000);
        let mut keys: Vec<u32> = (0..n).map(|_| rng.gen()).collect();
        let fingerprint = multiset_fingerprint(&keys);
        sorter.sort(&mut keys, SortOrder::Ascending).unwrap();
        assert_eq!(multiset_fingerprint(&keys), fingerprint);
        for pair in keys.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}

#[test]
fn test_random_i32_sorted() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut sorter = RadixSorter::new();
    let mut keys: Vec<i32> = (0..50_000).map(|_| rng.gen()).collect();
    let mut expected = keys.clone();
    sorter.sort(&mut keys, SortOrder::Ascending).unwrap();
    expected.sort_unstable();
    assert_eq!(keys, expected);
}

#[test]
fn test_random_low_entropy_keys() {
    // Heavily duplicated digits stress the carry accumulation.
    let mut rng = StdRng::seed_from_u64(1234);
    let mut sorter = RadixSorter::new();
    let mut keys: Vec<u32> = (0..30_000).map(|_| rng.gen_range(0..16)).collect();
    let mut expected = keys.clone();
    sorter.sort(&mut keys, SortOrder::Ascending).unwrap();
    expected.sort_unstable();
    assert_eq!(keys, expected);
}

#[test]
fn test_large_descending_non_aligned() {
    // N = 1,000,003: prime, far from any block multiple.
    let mut rng = StdRng::seed_from_u64(0xdead_beef);
    let mut sorter = RadixSorter::with_capacity(1_000_003);
    let mut keys: Vec<u32> = (0..1_000_003).map(|_| rng.gen()).collect();
    let fingerprint = multiset_fingerprint(&keys);
    sorter.sort(&mut keys, SortOrder::Descending).unwrap();
    assert_eq!(multiset_fingerprint(&keys), fingerprint);
    for pair in keys.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}
