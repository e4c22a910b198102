use super::reporting::{format_row, REPORT_HEADER};
use super::sweep::{SweepPlan, SweepPoint};
use super::types::{BenchmarkConfig, ReportRow};
use super::verification::verify_sorted;
use crate::generator::ArrayGenerator;
use std::io::{self, Write};
use std::time::Instant;

/// Drives the full parameter sweep: one fresh sample array per repeat, one
/// averaged report row per sweep tuple.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    generator: ArrayGenerator,
}

impl BenchmarkRunner {
    /// Builds the generator bases up front; sampling during the sweep is
    /// then just a prefix copy.
    pub fn new(config: BenchmarkConfig) -> Self {
        let generator = ArrayGenerator::new(
            config.max_n,
            config.min_value,
            config.max_value,
            config.seed,
        );
        Self { config, generator }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn plan(&self) -> SweepPlan {
        SweepPlan::from_config(&self.config)
    }

    /// Runs the sweep and collects all rows without streaming them anywhere.
    pub fn run(&self) -> Result<Vec<ReportRow>, Box<dyn std::error::Error>> {
        self.run_to(&mut io::sink())
    }

    /// Runs the sweep, streaming the header and each row to `out` as it is
    /// produced. Rows are emitted in sweep order, never reordered.
    pub fn run_to<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<Vec<ReportRow>, Box<dyn std::error::Error>> {
        let plan = self.plan();
        let mut rows = Vec::with_capacity(plan.row_count());

        writeln!(out, "{}", REPORT_HEADER)?;
        for point in plan.points() {
            let avg_ms = self.measure_one(&point)?;
            let row = ReportRow {
                distribution: point.distribution,
                n: point.n,
                algorithm: point.algorithm,
                avg_ms,
            };
            writeln!(out, "{}", format_row(&row))?;
            rows.push(row);
        }

        Ok(rows)
    }

    /// Times `repeats` executions of one sweep tuple and averages them.
    ///
    /// Each repeat sorts a fresh prefix copy, so timing never includes
    /// generation cost and one repeat cannot contaminate the next. Elapsed
    /// time is truncated to whole milliseconds per repeat before summing,
    /// matching the historical report format.
    fn measure_one(&self, point: &SweepPoint) -> Result<u128, Box<dyn std::error::Error>> {
        for _ in 0..self.config.warmup_runs {
            let mut a = self.generator.sample(point.distribution, point.n);
            point.algorithm.sort_in_place(&mut a);
        }

        let mut total_ms: u128 = 0;
        for rep in 0..self.config.repeats {
            let mut a = self.generator.sample(point.distribution, point.n);
            let reference = if self.config.verify && rep == 0 {
                Some(a.clone())
            } else {
                None
            };

            let start = Instant::now();
            point.algorithm.sort_in_place(&mut a);
            total_ms += start.elapsed().as_millis();

            if let Some(input) = reference {
                verify_sorted(&input, &a).map_err(|e| {
                    format!(
                        "verification failed for {};{};{}: {}",
                        point.distribution, point.n, point.algorithm, e
                    )
                })?;
            }
        }

        Ok(total_ms / self.config.repeats.max(1) as u128)
    }
}
