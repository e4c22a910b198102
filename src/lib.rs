// Merge sort crossover benchmark library
//
// Compares plain top-down merge sort against a hybrid that hands small
// sub-ranges to insertion sort, across synthetic input distributions, and
// reports the averaged wall-clock cost per configuration.

pub mod benchmark;
pub mod generator;
pub mod sort;

// Export the main types
pub use benchmark::{
    BenchmarkConfig, BenchmarkRunner, ReportRow, SweepPlan, SweepPoint, REPORT_HEADER,
};
pub use generator::{ArrayGenerator, Distribution, DEFAULT_SEED};
pub use sort::{hybrid_merge_sort, insertion_sort, merge_sort, Algorithm};
