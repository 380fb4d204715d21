use crate::{error::ConfigError, segment::DEFAULT_CHUNK_SIZE};
use std::num::NonZeroUsize;

/// Smallest upper bound the sieve accepts.
pub const MIN_UPPER_BOUND: usize = 10;

/// Thread count used when the caller has no preference.
pub const DEFAULT_THREADS: usize = 2;

/// Largest thread count accepted; every phase spawns up to this many OS threads.
pub const MAX_THREADS: usize = 1 << 12;

const DEFAULT_CHUNK: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CHUNK_SIZE) {
    Some(chunk) => chunk,
    None => panic!("DEFAULT_CHUNK_SIZE must be non-zero"),
};

/// Validated sieve parameters.
///
/// Construction is the only place where inputs are checked, so holding a
/// `SieveConfig` means nothing has been allocated for an invalid request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SieveConfig {
    upper_bound: usize,
    threads: NonZeroUsize,
    chunk_size: NonZeroUsize,
}

impl SieveConfig {
    /// Inputs are signed so that out-of-range values coming from a caller are
    /// rejected here rather than wrapped.
    pub fn new(upper_bound: i64, threads: i64) -> Result<Self, ConfigError> {
        if threads <= 0 {
            return Err(ConfigError::NonPositiveThreads(threads));
        }
        if threads > MAX_THREADS as i64 {
            return Err(ConfigError::TooManyThreads {
                threads,
                maximum: MAX_THREADS,
            });
        }
        if upper_bound < MIN_UPPER_BOUND as i64 {
            return Err(ConfigError::UpperBoundTooSmall {
                upper_bound,
                minimum: MIN_UPPER_BOUND,
            });
        }
        // the flag array holds `upper_bound + 1` entries
        let upper_bound = usize::try_from(upper_bound)
            .ok()
            .filter(|n| *n < isize::MAX as usize)
            .ok_or(ConfigError::UpperBoundTooLarge(upper_bound))?;
        let threads = usize::try_from(threads)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ConfigError::NonPositiveThreads(threads))?;
        Ok(Self {
            upper_bound,
            threads,
            chunk_size: DEFAULT_CHUNK,
        })
    }

    /// Overrides the sub-chunk size each marking worker tiles its block with.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Result<Self, ConfigError> {
        self.chunk_size = NonZeroUsize::new(chunk_size).ok_or(ConfigError::ZeroChunkSize)?;
        Ok(self)
    }

    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    pub fn threads(&self) -> NonZeroUsize {
        self.threads
    }

    pub fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_accepts_minimum() {
        let config = SieveConfig::new(10, 1).unwrap();
        assert_eq!(config.upper_bound(), 10);
        assert_eq!(config.threads().get(), 1);
        assert_eq!(config.chunk_size().get(), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_config_rejects_threads() {
        assert_eq!(
            SieveConfig::new(100, 0),
            Err(ConfigError::NonPositiveThreads(0))
        );
        assert_eq!(
            SieveConfig::new(100, -3),
            Err(ConfigError::NonPositiveThreads(-3))
        );
    }

    #[test]
    fn test_config_rejects_upper_bound() {
        assert_eq!(
            SieveConfig::new(9, 2),
            Err(ConfigError::UpperBoundTooSmall {
                upper_bound: 9,
                minimum: MIN_UPPER_BOUND,
            })
        );
        assert!(matches!(
            SieveConfig::new(-1, 2),
            Err(ConfigError::UpperBoundTooSmall { .. })
        ));
    }

    #[test]
    fn test_config_rejects_too_many_threads() {
        assert!(SieveConfig::new(100, MAX_THREADS as i64).is_ok());
        assert_eq!(
            SieveConfig::new(100, 50_000),
            Err(ConfigError::TooManyThreads {
                threads: 50_000,
                maximum: MAX_THREADS,
            })
        );
    }

    #[test]
    fn test_config_threads_checked_first() {
        assert_eq!(SieveConfig::new(3, 0), Err(ConfigError::NonPositiveThreads(0)));
    }

    #[test]
    fn test_config_chunk_size() {
        let config = SieveConfig::new(100, 2).unwrap();
        assert_eq!(config.with_chunk_size(0), Err(ConfigError::ZeroChunkSize));
        assert_eq!(config.with_chunk_size(64).unwrap().chunk_size().get(), 64);
    }
}
