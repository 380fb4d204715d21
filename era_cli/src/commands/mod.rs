mod common_args;

mod sieve;
pub use sieve::*;
