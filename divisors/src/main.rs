use std::num::NonZeroUsize;
use std::process::ExitCode;

use clap::Parser;
use divisors::{count_all_parallel, HarnessConfig, HarnessError};
use rand::{distributions::Uniform, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Count divisors of random numbers on a pool of threads.
#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    /// Number of values to process.
    #[clap(long, default_value_t = 100)]
    jobs: usize,

    /// Worker threads, one per hardware thread if omitted.
    #[clap(long)]
    threads: Option<NonZeroUsize>,

    /// Seed of the input generator.
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Smallest value to draw.
    #[clap(long, default_value_t = 100_000_000_000_000_000)]
    min: u64,

    /// Largest value to draw.
    #[clap(long, default_value_t = 1_000_000_000_000_000_000)]
    max: u64,

    /// Print every value with its divisor count.
    #[clap(long)]
    print: bool,
}

fn generate_input(args: &Args) -> Result<Vec<u64>, HarnessError> {
    if args.min == 0 || args.min > args.max {
        return Err(HarnessError::InvalidRange {
            min: args.min,
            max: args.max,
        });
    }
    let distr = Uniform::new_inclusive(args.min, args.max);
    let rng = ChaCha8Rng::seed_from_u64(args.seed);
    Ok(rng.sample_iter(distr).take(args.jobs).collect())
}

fn run(args: &Args) -> Result<(), HarnessError> {
    let input = generate_input(args)?;
    let config = HarnessConfig {
        threads: args.threads,
    };
    log::info!("running {} jobs on {} threads", input.len(), config.pool().threads());

    let (output, report) = count_all_parallel(&config, &input)?;

    for worker in &report.workers {
        log::info!(
            "thread {}: {} items, {} iterations",
            worker.worker,
            worker.items,
            worker.cost
        );
    }
    if args.print {
        for (x, count) in input.iter().zip(&output) {
            println!("{x} {count}");
        }
    }
    println!("All threads have been finished!");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
