use crate::sort::insertion::insertion_sort;
use crate::sort::merge::merge;

/// Top-down merge sort.
///
/// Allocates one scratch vector sized to the input and threads it through
/// the recursion; every merge reuses the same allocation.
pub fn merge_sort<T: Ord + Copy>(a: &mut [T]) {
    let mut buf = Vec::with_capacity(a.len());
    merge_sort_rec(a, &mut buf);
}

fn merge_sort_rec<T: Ord + Copy>(a: &mut [T], buf: &mut Vec<T>) {
    if a.len() <= 1 {
        return;
    }
    let mid = a.len() / 2;
    merge_sort_rec(&mut a[..mid], buf);
    merge_sort_rec(&mut a[mid..], buf);
    merge(a, mid, buf);
}

/// Merge sort that hands any sub-slice of length at most `threshold` to
/// insertion sort instead of recursing further.
///
/// Threshold 0 never matches a sub-slice longer than the base case, so it
/// behaves exactly like [`merge_sort`]. Both delegate strategies are stable,
/// so the hybrid is stable at every threshold.
pub fn hybrid_merge_sort<T: Ord + Copy>(a: &mut [T], threshold: usize) {
    let mut buf = Vec::with_capacity(a.len());
    hybrid_merge_sort_rec(a, threshold, &mut buf);
}

fn hybrid_merge_sort_rec<T: Ord + Copy>(a: &mut [T], threshold: usize, buf: &mut Vec<T>) {
    if a.len() <= 1 {
        return;
    }
    if a.len() <= threshold {
        insertion_sort(a);
        return;
    }
    let mid = a.len() / 2;
    hybrid_merge_sort_rec(&mut a[..mid], threshold, buf);
    hybrid_merge_sort_rec(&mut a[mid..], threshold, buf);
    merge(a, mid, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn merge_sort_basic() {
        let mut data = [5, 3, 1, 4, 2];
        merge_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn hybrid_above_len_delegates_to_insertion() {
        // Threshold >= len sorts the whole slice in the insertion base case.
        let mut data = [5, 3, 1, 4, 2];
        hybrid_merge_sort(&mut data, 5);
        assert_eq!(data, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn boundary_lengths() {
        let mut empty: Vec<i32> = vec![];
        merge_sort(&mut empty);
        hybrid_merge_sort(&mut empty, 10);
        assert!(empty.is_empty());

        let mut one = vec![3];
        merge_sort(&mut one);
        hybrid_merge_sort(&mut one, 10);
        assert_eq!(one, vec![3]);
    }

    #[test]
    fn threshold_zero_matches_plain_merge_sort() {
        let mut rng = StdRng::seed_from_u64(17);
        for len in [0, 1, 2, 7, 100, 1023] {
            let data: Vec<i32> = (0..len).map(|_| rng.random_range(-50..=50)).collect();

            let mut plain = data.clone();
            merge_sort(&mut plain);

            let mut hybrid = data;
            hybrid_merge_sort(&mut hybrid, 0);

            assert_eq!(plain, hybrid);
        }
    }

    #[test]
    fn sorts_random_data_at_every_threshold() {
        let mut rng = StdRng::seed_from_u64(99);
        let data: Vec<i32> = (0..500).map(|_| rng.random_range(0..=6000)).collect();

        let mut expected = data.clone();
        expected.sort();

        for threshold in [0, 1, 5, 10, 20, 30, 50, 499, 500, 10_000] {
            let mut sorted = data.clone();
            hybrid_merge_sort(&mut sorted, threshold);
            assert_eq!(sorted, expected, "threshold {}", threshold);
        }

        let mut sorted = data.clone();
        merge_sort(&mut sorted);
        assert_eq!(sorted, expected);
    }

    #[test]
    fn idempotent() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut data: Vec<i32> = (0..200).map(|_| rng.random_range(0..=100)).collect();
        merge_sort(&mut data);
        let once = data.clone();
        merge_sort(&mut data);
        assert_eq!(data, once);
    }
}
