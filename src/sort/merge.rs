/// Merges the two sorted halves `a[..mid]` and `a[mid..]` through the
/// scratch vector, then copies the result back into `a`.
///
/// Two-pointer merge; on ties the left element wins, which keeps the merge
/// stable. The scratch vector is cleared and refilled, never reallocated as
/// long as its capacity covers `a.len()`.
pub fn merge<T: Ord + Copy>(a: &mut [T], mid: usize, buf: &mut Vec<T>) {
    debug_assert!(mid <= a.len());

    buf.clear();
    let (left, right) = a.split_at(mid);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            buf.push(left[i]);
            i += 1;
        } else {
            buf.push(right[j]);
            j += 1;
        }
    }
    buf.extend_from_slice(&left[i..]);
    buf.extend_from_slice(&right[j..]);

    a.copy_from_slice(buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_two_sorted_halves() {
        let mut data = [1, 4, 7, 2, 3, 9];
        let mut buf = Vec::with_capacity(data.len());
        merge(&mut data, 3, &mut buf);
        assert_eq!(data, [1, 2, 3, 4, 7, 9]);
    }

    #[test]
    fn empty_halves_are_fine() {
        let mut buf = Vec::new();

        let mut left_only = [1, 2, 3];
        merge(&mut left_only, 3, &mut buf);
        assert_eq!(left_only, [1, 2, 3]);

        let mut right_only = [1, 2, 3];
        merge(&mut right_only, 0, &mut buf);
        assert_eq!(right_only, [1, 2, 3]);
    }

    #[test]
    fn left_wins_ties() {
        // Equal keys tagged by origin half; the left tag must come first.
        #[derive(Clone, Copy, Debug)]
        struct Keyed(i32, u8);
        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Keyed {}
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut data = [Keyed(1, 0), Keyed(5, 0), Keyed(1, 1), Keyed(5, 1)];
        let mut buf = Vec::with_capacity(data.len());
        merge(&mut data, 2, &mut buf);
        let tagged: Vec<(i32, u8)> = data.iter().map(|k| (k.0, k.1)).collect();
        assert_eq!(tagged, vec![(1, 0), (1, 1), (5, 0), (5, 1)]);
    }
}
