use crate::{
    bootstrap::{BasePrimes, bootstrap, isqrt},
    config::SieveConfig,
    count::{IMPLICIT_PRIMES, collect_primes, count_primes},
    error::SieveError,
    segment::mark_segments,
    sink::{ListWriter, PrimeSink},
    wheel::{Wheel, on_wheel},
};
use std::{fs::File, io::BufWriter, num::NonZeroUsize, path::Path};

/// A fully marked sieve over `[0, N]`.
///
/// Building runs the sequential bootstrap up to `⌊√N⌋`, then the parallel
/// marking pass over `[⌊√N⌋, N]`, and only returns after every marking worker
/// has joined. Every reading method therefore observes the final flags.
#[derive(Clone, Debug)]
pub struct Sieve {
    composite: Vec<bool>,
    base_primes: BasePrimes,
    threads: NonZeroUsize,
}

impl Sieve {
    /// Validates `upper_bound` and `threads`, then builds the sieve.
    pub fn new(upper_bound: i64, threads: i64) -> Result<Self, SieveError> {
        let config = SieveConfig::new(upper_bound, threads)?;
        Ok(Self::build(&config))
    }

    #[tracing::instrument(
        skip_all,
        name = "era_sieve::build",
        level = "trace",
        fields(profiling_1, upper_bound = config.upper_bound(), threads = config.threads().get())
    )]
    pub fn build(config: &SieveConfig) -> Self {
        let upper_bound = config.upper_bound();
        let threads = config.threads();

        let mut composite = vec![false; upper_bound + 1];
        let bound = isqrt(upper_bound);
        let base_primes = bootstrap(&mut composite[..=bound]);
        mark_segments(&mut composite, bound, &base_primes, threads, config.chunk_size());
        tracing::debug!(
            "sieved [0, {upper_bound}] with {} base primes on {threads} threads",
            base_primes.len()
        );

        Self {
            composite,
            base_primes,
            threads,
        }
    }

    pub fn upper_bound(&self) -> usize {
        self.composite.len() - 1
    }

    pub fn threads(&self) -> usize {
        self.threads.get()
    }

    /// The primes `7 <= p <= ⌊√N⌋` found by the bootstrap pass.
    pub fn base_primes(&self) -> &[usize] {
        &self.base_primes
    }

    /// Raw flags, `true` meaning composite. Only indices coprime to 30 carry
    /// meaning.
    pub fn as_flags(&self) -> &[bool] {
        &self.composite
    }

    /// Number of primes in `[2, N]`.
    pub fn count(&self) -> usize {
        count_primes(&self.composite, self.threads)
    }

    /// All primes in `[2, N]`, ascending, collected in parallel.
    pub fn primes(&self) -> Vec<usize> {
        collect_primes(&self.composite, self.threads)
    }

    /// All primes in `[2, N]`, ascending, on the calling thread.
    pub fn iter_primes(&self) -> impl Iterator<Item = usize> + '_ {
        IMPLICIT_PRIMES
            .into_iter()
            .chain(Wheel::new(0, self.composite.len()).filter(|&i| !self.composite[i]))
    }

    /// Primality of `n`; `None` when `n` lies beyond the sieve.
    pub fn is_prime(&self, n: usize) -> Option<bool> {
        let composite = *self.composite.get(n)?;
        Some(if IMPLICIT_PRIMES.contains(&n) {
            true
        } else {
            n > 1 && on_wheel(n) && !composite
        })
    }

    /// Streams the primes into `sink`. The sieve itself is left untouched, so
    /// a failed sink can simply be retried.
    pub fn persist<S: PrimeSink + ?Sized>(&self, sink: &mut S) -> Result<(), SieveError> {
        sink.accept(&mut self.iter_primes())?;
        Ok(())
    }

    /// Writes the primes to `path` as a bracketed list, creating or truncating
    /// the file.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SieveError> {
        let path = path.as_ref();
        tracing::info!("writing primes to {}", path.display());
        let file = File::create(path)?;
        self.persist(&mut ListWriter::new(BufWriter::new(file)))
    }
}

/// Counts the primes in `[2, upper_bound]` using `threads` workers.
pub fn count_primes_up_to(upper_bound: i64, threads: i64) -> Result<usize, SieveError> {
    Ok(Sieve::new(upper_bound, threads)?.count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_sieve_ten() {
        let sieve = Sieve::new(10, 2).unwrap();
        assert_eq!(sieve.count(), 4);
        assert_eq!(sieve.primes(), [2, 3, 5, 7]);
        assert!(sieve.base_primes().is_empty());
    }

    #[test]
    fn test_sieve_thirty() {
        let sieve = Sieve::new(30, 3).unwrap();
        assert_eq!(sieve.count(), 10);
        assert_eq!(sieve.primes(), [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_sieve_upper_bound_is_inclusive() {
        // 49 = 7 * 7 sits exactly on the bound
        let sieve = Sieve::new(49, 4).unwrap();
        assert_eq!(sieve.is_prime(49), Some(false));
        assert_eq!(sieve.count(), 15);
        // 53 is prime and sits on the bound
        let sieve = Sieve::new(53, 4).unwrap();
        assert_eq!(sieve.primes().last(), Some(&53));
    }

    #[test]
    fn test_sieve_is_prime() {
        let sieve = Sieve::new(100, 2).unwrap();
        let primes = (0..=100)
            .filter(|&n| sieve.is_prime(n) == Some(true))
            .collect::<Vec<_>>();
        assert_eq!(primes, sieve.primes());
        assert_eq!(sieve.is_prime(101), None);
    }

    #[test]
    fn test_sieve_iter_matches_parallel() {
        let sieve = Sieve::new(100_000, 5).unwrap();
        assert_eq!(sieve.iter_primes().collect::<Vec<_>>(), sieve.primes());
        assert_eq!(sieve.count(), 9_592);
    }

    #[test]
    fn test_sieve_rejects_before_building() {
        assert!(matches!(
            Sieve::new(100, 0),
            Err(SieveError::InvalidConfiguration(ConfigError::NonPositiveThreads(0)))
        ));
        assert!(matches!(
            count_primes_up_to(9, 1),
            Err(SieveError::InvalidConfiguration(ConfigError::UpperBoundTooSmall { .. }))
        ));
    }

    #[test]
    fn test_sieve_thread_limit() {
        let sieve = Sieve::new(100, crate::MAX_THREADS as i64).unwrap();
        assert_eq!(sieve.threads(), crate::MAX_THREADS);
        assert_eq!(sieve.upper_bound(), 100);
        assert_eq!(sieve.count(), 25);
        assert_eq!(sieve.primes().len(), 25);
        assert!(matches!(
            Sieve::new(100, 50_000),
            Err(SieveError::InvalidConfiguration(ConfigError::TooManyThreads {
                threads: 50_000,
                ..
            }))
        ));
    }

    #[test]
    fn test_persist_to_vec() {
        let sieve = Sieve::new(30, 2).unwrap();
        let mut primes: Vec<usize> = Vec::new();
        sieve.persist(&mut primes).unwrap();
        assert_eq!(primes, sieve.primes());
    }
}
