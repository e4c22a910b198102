pub mod reporting;
pub mod runner;
pub mod sweep;
pub mod types;
pub mod verification;

pub use reporting::{format_row, report_to_text, write_report, REPORT_HEADER};
pub use runner::BenchmarkRunner;
pub use sweep::{SweepPlan, SweepPoint};
pub use types::{BenchmarkConfig, ReportRow};
pub use verification::verify_sorted;
