//! Segmented, multithreaded sieve of Eratosthenes over a mod-30 wheel.
//!
//! ```
//! use era_sieve::Sieve;
//!
//! let sieve = Sieve::new(30, 2)?;
//! assert_eq!(sieve.count(), 10);
//! assert_eq!(sieve.primes(), [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//! # Ok::<(), era_sieve::SieveError>(())
//! ```

mod bootstrap;
pub use bootstrap::{BasePrimes, bootstrap, isqrt, prime_estimate};

mod config;
pub use config::{DEFAULT_THREADS, MAX_THREADS, MIN_UPPER_BOUND, SieveConfig};

mod count;
pub use count::{IMPLICIT_PRIMES, collect_primes, count_primes};

mod error;
pub use error::{ConfigError, SieveError};

mod partition;
pub use partition::blocks;

mod segment;
pub use segment::{DEFAULT_CHUNK_SIZE, mark_block, mark_segments};

mod sieve;
pub use sieve::{Sieve, count_primes_up_to};

mod sink;
pub use sink::{ListWriter, PrimeSink};

pub mod wheel;
pub use wheel::Wheel;
