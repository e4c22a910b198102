/// Checks that `output` is non-decreasing and holds exactly the values of
/// `input`.
///
/// Since a non-decreasing permutation of `input` is unique, the multiset
/// comparison reduces to an element-wise comparison against a sorted copy.
pub fn verify_sorted(input: &[i32], output: &[i32]) -> Result<(), String> {
    if output.len() != input.len() {
        return Err(format!(
            "length changed: {} in, {} out",
            input.len(),
            output.len()
        ));
    }

    for (i, pair) in output.windows(2).enumerate() {
        if pair[0] > pair[1] {
            return Err(format!(
                "sort order violation at index {}: {} > {}",
                i, pair[0], pair[1]
            ));
        }
    }

    let mut expected = input.to_vec();
    expected.sort();
    if output != expected.as_slice() {
        return Err("output is not a permutation of the input".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_correct_output() {
        assert!(verify_sorted(&[3, 1, 2], &[1, 2, 3]).is_ok());
        assert!(verify_sorted(&[], &[]).is_ok());
    }

    #[test]
    fn rejects_unsorted_output() {
        let err = verify_sorted(&[3, 1, 2], &[2, 1, 3]).unwrap_err();
        assert!(err.contains("sort order violation"));
    }

    #[test]
    fn rejects_value_changes() {
        let err = verify_sorted(&[3, 1, 2], &[1, 2, 4]).unwrap_err();
        assert!(err.contains("not a permutation"));
    }

    #[test]
    fn rejects_length_changes() {
        let err = verify_sorted(&[3, 1], &[1, 2, 3]).unwrap_err();
        assert!(err.contains("length changed"));
    }
}
