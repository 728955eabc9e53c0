// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-place quicksort of weighted edges.
//!
//! Hoare partitioning with the midpoint element's weight as pivot. The pivot
//! choice is fixed, so the output order is a deterministic function of the
//! input order; sorted, reversed and constant inputs all stay O(n log n),
//! though a crafted weight sequence can still force O(n^2). Not stable.

use crate::WeightedEdge;

/// Sort `edges` ascending by weight.
pub fn quicksort<L>(edges: &mut [WeightedEdge<L>]) {
    if edges.len() > 1 {
        #[allow(clippy::cast_possible_wrap)] // slices never exceed isize::MAX elements
        sort_range(edges, 0, edges.len() as isize - 1);
    }
}

/// Sort the inclusive range `lo0..=hi0`.
///
/// Indices are signed because the right scan may step one past `lo0`.
#[allow(clippy::cast_sign_loss)]
fn sort_range<L>(a: &mut [WeightedEdge<L>], lo0: isize, hi0: isize) {
    if hi0 <= lo0 {
        return;
    }
    let pivot = a[((lo0 + hi0) / 2) as usize].weight;
    let mut lo = lo0;
    let mut hi = hi0;

    while lo <= hi {
        while lo < hi0 && a[lo as usize].weight < pivot {
            lo += 1;
        }
        while hi > lo0 && a[hi as usize].weight > pivot {
            hi -= 1;
        }
        if lo <= hi {
            a.swap(lo as usize, hi as usize);
            lo += 1;
            hi -= 1;
        }
    }

    if lo0 < hi {
        sort_range(a, lo0, hi);
    }
    if lo < hi0 {
        sort_range(a, lo, hi0);
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn edges(weights: &[i32]) -> Vec<WeightedEdge<usize>> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| WeightedEdge::new(i, i + 1, w))
            .collect()
    }

    fn weights<L>(edges: &[WeightedEdge<L>]) -> Vec<i32> {
        edges.iter().map(|e| e.weight).collect()
    }

    #[test]
    fn test_sorts_mixed_weights() {
        let mut e = edges(&[5, 1, 4, 1, 5, 9, 2, 6]);
        quicksort(&mut e);
        assert_eq!(weights(&e), vec![1, 1, 2, 4, 5, 5, 6, 9]);
    }

    #[test]
    fn test_keeps_edge_payload_with_weight() {
        let mut e = edges(&[30, 10, 20]);
        quicksort(&mut e);
        let from: Vec<usize> = e.iter().map(|e| e.from).collect();
        assert_eq!(from, vec![1, 2, 0]);
    }

    #[test]
    fn test_already_sorted() {
        let mut e = edges(&(0..100).collect::<Vec<_>>());
        quicksort(&mut e);
        assert_eq!(weights(&e), (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_reverse_sorted() {
        let mut e = edges(&(0..100).rev().collect::<Vec<_>>());
        quicksort(&mut e);
        assert_eq!(weights(&e), (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_all_equal() {
        let mut e = edges(&[7; 64]);
        quicksort(&mut e);
        assert_eq!(weights(&e), vec![7; 64]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<WeightedEdge<usize>> = Vec::new();
        quicksort(&mut empty);
        assert!(empty.is_empty());

        let mut one = edges(&[3]);
        quicksort(&mut one);
        assert_eq!(weights(&one), vec![3]);
    }

    #[test]
    fn test_negative_and_extreme_weights() {
        let mut e = edges(&[0, i32::MIN, -3, i32::MAX, -3, 2]);
        quicksort(&mut e);
        assert_eq!(weights(&e), vec![i32::MIN, -3, -3, 0, 2, i32::MAX]);
    }

    #[test]
    fn test_matches_std_sort_on_random_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x2545_f491);
        let raw: Vec<i32> = (0..500).map(|_| rng.gen_range(0..50)).collect();
        let mut e = edges(&raw);
        quicksort(&mut e);
        let mut expected = raw;
        expected.sort_unstable();
        assert_eq!(weights(&e), expected);
    }
}
