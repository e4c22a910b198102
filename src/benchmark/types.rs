use crate::generator::{Distribution, DEFAULT_SEED};
use crate::sort::Algorithm;

/// Full parameterization of one benchmark invocation.
///
/// `Default` reproduces the fixed sweep: sizes 500..=100000 step 100 over
/// values in [0, 6000], thresholds {5, 10, 20, 30, 50}, 5 repeats.
#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    /// Maximum array size; also the length of the precomputed bases.
    pub max_n: usize,
    pub min_value: i32,
    pub max_value: i32,
    pub seed: u64,
    pub start_size: usize,
    pub size_step: usize,
    /// Hybrid crossover thresholds, benchmarked in the order given.
    pub thresholds: Vec<usize>,
    /// Timed executions per sweep tuple; the reported time is their average.
    pub repeats: usize,
    /// Untimed executions before the timed repeats of each tuple.
    pub warmup_runs: usize,
    /// Check the first timed run of each tuple for sortedness and
    /// permutation preservation.
    pub verify: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            max_n: 100_000,
            min_value: 0,
            max_value: 6000,
            seed: DEFAULT_SEED,
            start_size: 500,
            size_step: 100,
            thresholds: vec![5, 10, 20, 30, 50],
            repeats: 5,
            warmup_runs: 0,
            verify: false,
        }
    }
}

/// One line of the report: the averaged timing for a single sweep tuple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub distribution: Distribution,
    pub n: usize,
    pub algorithm: Algorithm,
    pub avg_ms: u128,
}
