/// In-place insertion sort over the whole slice.
///
/// Stable: an element is shifted only while its left neighbor is strictly
/// greater, so equal elements keep their relative order. Quadratic in the
/// worst case, linear when the slice is already sorted. Callers hand in a
/// sub-slice to sort a range; everything outside the borrow is untouched.
pub fn insertion_sort<T: Ord + Copy>(a: &mut [T]) {
    for i in 1..a.len() {
        let key = a[i];
        let mut j = i;
        while j > 0 && a[j - 1] > key {
            a[j] = a[j - 1];
            j -= 1;
        }
        a[j] = key;
    }
}
