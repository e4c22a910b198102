use super::types::BenchmarkConfig;
use crate::generator::Distribution;
use crate::sort::Algorithm;

/// One (distribution, size, algorithm) combination to benchmark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepPoint {
    pub distribution: Distribution,
    pub n: usize,
    pub algorithm: Algorithm,
}

/// The exhaustive parameter sweep, decoupled from execution so the tuple
/// set can be inspected without timing anything.
#[derive(Clone, Debug)]
pub struct SweepPlan {
    pub start_size: usize,
    pub max_size: usize,
    pub size_step: usize,
    pub thresholds: Vec<usize>,
}

impl SweepPlan {
    pub fn from_config(config: &BenchmarkConfig) -> Self {
        Self {
            start_size: config.start_size,
            max_size: config.max_n,
            size_step: config.size_step,
            thresholds: config.thresholds.clone(),
        }
    }

    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.start_size..=self.max_size).step_by(self.size_step)
    }

    /// Plain merge sort first, then one hybrid per threshold in list order.
    pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
        std::iter::once(Algorithm::Merge).chain(
            self.thresholds
                .iter()
                .map(|&threshold| Algorithm::Hybrid { threshold }),
        )
    }

    /// Lazy enumeration of every sweep tuple in report order:
    /// distribution-major, then algorithm, then size.
    pub fn points(&self) -> impl Iterator<Item = SweepPoint> + '_ {
        Distribution::ALL.into_iter().flat_map(move |distribution| {
            self.algorithms().flat_map(move |algorithm| {
                self.sizes().map(move |n| SweepPoint {
                    distribution,
                    n,
                    algorithm,
                })
            })
        })
    }

    /// Number of report rows the sweep will produce.
    pub fn row_count(&self) -> usize {
        Distribution::ALL.len() * (1 + self.thresholds.len()) * self.sizes().count()
    }
}
