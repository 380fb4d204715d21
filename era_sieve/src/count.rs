use crate::{partition::blocks, wheel::Wheel};
use std::num::NonZeroUsize;

/// 2, 3 and 5 are prime but never stored in the flag array.
pub const IMPLICIT_PRIMES: [usize; 3] = [2, 3, 5];

/// Runs `work` on every non-empty block of `[0, sieve.len())` on its own scoped
/// thread and returns the per-block results in block order. Empty blocks are
/// handled inline with an exhausted wheel.
fn for_each_block<T, F>(sieve: &[bool], threads: NonZeroUsize, work: F) -> Vec<T>
where
    T: Send,
    F: Fn(Wheel) -> T + Sync,
{
    let work = &work;
    std::thread::scope(|s| {
        let handles = blocks(0..sieve.len(), threads)
            .map(|range| {
                (!range.is_empty())
                    .then(|| s.spawn(move || work(Wheel::new(range.start, range.end))))
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| match handle.map(|handle| handle.join()) {
                Some(Ok(result)) => result,
                Some(Err(panic)) => std::panic::resume_unwind(panic),
                None => work(Wheel::new(0, 0)),
            })
            .collect()
    })
}

/// Counts the primes in `[2, sieve.len() - 1]` of a fully marked sieve.
///
/// Each worker walks its own wheel over its block and keeps a private count;
/// the counts are only summed after every worker has joined.
#[tracing::instrument(
    skip_all,
    name = "era_sieve::count_primes",
    level = "trace",
    fields(profiling_2)
)]
pub fn count_primes(sieve: &[bool], threads: NonZeroUsize) -> usize {
    let partial = for_each_block(sieve, threads, |wheel| {
        wheel.filter(|&i| !sieve[i]).count()
    });
    tracing::debug!("partial counts {partial:?}");
    IMPLICIT_PRIMES.len() + partial.into_iter().sum::<usize>()
}

/// Collects the primes in `[2, sieve.len() - 1]` in ascending order.
#[tracing::instrument(
    skip_all,
    name = "era_sieve::collect_primes",
    level = "trace",
    fields(profiling_2)
)]
pub fn collect_primes(sieve: &[bool], threads: NonZeroUsize) -> Vec<usize> {
    let parts = for_each_block(sieve, threads, |wheel| {
        wheel.filter(|&i| !sieve[i]).collect::<Vec<_>>()
    });
    let total = IMPLICIT_PRIMES.len() + parts.iter().map(Vec::len).sum::<usize>();
    let mut primes = Vec::with_capacity(total);
    primes.extend(IMPLICIT_PRIMES);
    parts.into_iter().for_each(|part| primes.extend(part));
    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    // the first wheel composite is 49, so an untouched array over [0, 30] is exact
    fn sieve_to_30() -> Vec<bool> {
        vec![false; 31]
    }

    #[test]
    fn test_count_primes_to_30() {
        for threads in [1, 2, 3, 7, 31, 100] {
            assert_eq!(count_primes(&sieve_to_30(), nz(threads)), 10);
        }
    }

    #[test]
    fn test_count_skips_flagged() {
        let mut sieve = vec![false; 50];
        sieve[49] = true;
        // 2 3 5 7 11 13 17 19 23 29 31 37 41 43 47
        assert_eq!(count_primes(&sieve, nz(4)), 15);
    }

    #[test]
    fn test_collect_primes_order() {
        let expected = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        for threads in [1, 4, 31] {
            assert_eq!(collect_primes(&sieve_to_30(), nz(threads)), expected);
        }
    }
}
