use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("upper bound must be at least {minimum}, got {upper_bound}")]
    UpperBoundTooSmall { upper_bound: i64, minimum: usize },
    #[error("upper bound {0} does not fit in memory addressable by this platform")]
    UpperBoundTooLarge(i64),
    #[error("number of threads must be greater than zero, got {0}")]
    NonPositiveThreads(i64),
    #[error("number of threads must be at most {maximum}, got {threads}")]
    TooManyThreads { threads: i64, maximum: usize },
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,
}

#[derive(Debug, Error)]
pub enum SieveError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("failed to persist primes: {0}")]
    PersistenceFailure(#[from] std::io::Error),
}
