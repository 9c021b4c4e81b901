//! `vectra-bench`: compare push throughput of `Vec` and `DynamicArray`.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use vectra_bench::{run_comparison, BenchConfig};

/// Time appending owned strings to `Vec` and `DynamicArray`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Elements appended per trial
    #[arg(long, default_value_t = BenchConfig::DEFAULT_COUNT)]
    count: usize,

    /// Trials per container
    #[arg(long, default_value_t = BenchConfig::DEFAULT_TRIALS)]
    trials: usize,

    /// String cloned into every slot
    #[arg(long, default_value = BenchConfig::DEFAULT_VALUE)]
    value: String,

    /// Skip reserving capacity before each fill
    #[arg(long, default_value_t = false)]
    no_reserve: bool,
}

impl From<Cli> for BenchConfig {
    fn from(cli: Cli) -> Self {
        Self {
            count: cli.count,
            trials: cli.trials,
            value: cli.value,
            reserve: !cli.no_reserve,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = BenchConfig::from(Cli::parse());
    match run_comparison(&config) {
        Ok(reports) => {
            for report in &reports {
                println!(
                    "{:<12} {:>10.3} ms average over {} trials",
                    report.target,
                    report.mean_ms(),
                    report.trials.len()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
