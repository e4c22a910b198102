pub mod insertion;
pub mod merge;
pub mod mergesort;

pub use insertion::insertion_sort;
pub use merge::merge;
pub use mergesort::{hybrid_merge_sort, merge_sort};

/// The sort variants the benchmark compares.
///
/// Closed enum so the sweep loop dispatches exhaustively instead of on
/// string labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Merge,
    Hybrid { threshold: usize },
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Merge => "merge",
            Algorithm::Hybrid { .. } => "hybrid",
        }
    }

    /// Threshold as reported: plain merge sort reports the literal 0.
    pub fn threshold(&self) -> usize {
        match self {
            Algorithm::Merge => 0,
            Algorithm::Hybrid { threshold } => *threshold,
        }
    }

    pub fn sort_in_place(&self, a: &mut [i32]) {
        match self {
            Algorithm::Merge => merge_sort(a),
            Algorithm::Hybrid { threshold } => hybrid_merge_sort(a, *threshold),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Algorithm::Merge => write!(f, "merge"),
            Algorithm::Hybrid { threshold } => write!(f, "hybrid(t={})", threshold),
        }
    }
}
