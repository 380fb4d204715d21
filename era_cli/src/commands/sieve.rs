use crate::{commands::common_args::*, utils::parse_size};
use anyhow::Context;
use clap::Parser;
use era_sieve::{DEFAULT_THREADS, Sieve, SieveConfig};
use std::{io::Write, path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(
    name = "era",
    author,
    version,
    about = "Calculates the number of prime numbers from [2, UPPERBOUND] using the sieve of Eratosthenes",
    long_about = None
)]
pub struct SieveCmd {
    /// Upper bound of the search, must be at least 10
    #[arg(value_name = "UPPERBOUND", allow_negative_numbers = true)]
    upper_bound: i64,
    /// Number of threads used
    #[arg(short, long, default_value_t = DEFAULT_THREADS as i64, allow_negative_numbers = true)]
    threads: i64,
    /// Write primes to FILE
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Number of flags a marking thread processes at a time
    #[arg(long, default_value = "128K", value_parser = parse_size)]
    chunk_size: usize,
    #[clap(flatten, next_help_heading = "Log Options")]
    log_options: LogOptions,
}

impl SieveCmd {
    pub fn run<W: Write>(self, out: &mut W) -> anyhow::Result<()> {
        self.log_options.try_setup_logger();
        let config = SieveConfig::new(self.upper_bound, self.threads)
            .and_then(|config| config.with_chunk_size(self.chunk_size))
            .context("invalid sieve configuration")?;

        tracing::info!(
            "sieving [2, {}] on {} threads",
            config.upper_bound(),
            config.threads()
        );
        let start = Instant::now();
        let sieve = Sieve::build(&config);
        writeln!(out, "Time to make sieve: {:?}", start.elapsed())?;

        let start = Instant::now();
        let count = sieve.count();
        tracing::debug!(
            "count done in {:?} on {} threads",
            start.elapsed(),
            sieve.threads()
        );
        writeln!(out, "Primes between 1 and {}: {}", sieve.upper_bound(), count)?;

        if let Some(output) = &self.output {
            let start = Instant::now();
            sieve
                .write_file(output)
                .with_context(|| format!("failed to write primes to {}", output.display()))?;
            tracing::debug!("write done in {:?}", start.elapsed());
        }
        Ok(())
    }
}
