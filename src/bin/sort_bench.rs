use clap::Parser;
use msbench::generator::DEFAULT_SEED;
use msbench::{BenchmarkConfig, BenchmarkRunner};
use std::io::{self, Write};

#[derive(Parser)]
#[command(about = "Benchmark plain merge sort against a hybrid merge/insertion sort")]
struct BenchArgs {
    /// Maximum array size (also the length of the precomputed bases)
    #[arg(long, default_value = "100000")]
    max_n: usize,

    /// Smallest generated value
    #[arg(long, default_value = "0")]
    min_value: i32,

    /// Largest generated value
    #[arg(long, default_value = "6000")]
    max_value: i32,

    /// RNG seed for the array generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// First array size of the sweep
    #[arg(long, default_value = "500")]
    start_size: usize,

    /// Size increment between sweep steps
    #[arg(long, default_value = "100")]
    size_step: usize,

    /// Hybrid crossover thresholds, benchmarked in order
    #[arg(long, value_delimiter = ',', default_value = "5,10,20,30,50")]
    thresholds: Vec<usize>,

    /// Timed repeats per configuration
    #[arg(long, default_value = "5")]
    repeats: usize,

    /// Untimed warmup runs before the timed repeats (not included in results)
    #[arg(long, default_value = "0")]
    warmup_runs: usize,

    /// Verify sorted output on the first repeat of each configuration
    #[arg(short, long)]
    verify: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = BenchArgs::parse();

    let config = BenchmarkConfig {
        max_n: args.max_n,
        min_value: args.min_value,
        max_value: args.max_value,
        seed: args.seed,
        start_size: args.start_size,
        size_step: args.size_step,
        thresholds: args.thresholds,
        repeats: args.repeats,
        warmup_runs: args.warmup_runs,
        verify: args.verify,
    };

    let runner = BenchmarkRunner::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner.run_to(&mut out)?;
    out.flush()?;

    Ok(())
}
