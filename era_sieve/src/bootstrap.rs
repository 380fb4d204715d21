use crate::wheel::Wheel;
use std::ops::Deref;

/// Integer square root, `⌊√n⌋`.
pub fn isqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    // the float estimate can be off by one in either direction for large n
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}

/// Rough upper estimate of π(n), used to pre-size prime lists.
pub fn prime_estimate(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    let n = n as f64;
    ((n / n.ln()) * 1.072) as usize
}

/// The ascending primes `7 <= p <= ⌊√N⌋` used to mark the upper segment.
///
/// 2, 3 and 5 are never listed; the wheel already excludes their multiples.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BasePrimes(Vec<usize>);

impl BasePrimes {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Deref for BasePrimes {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

/// Sequentially sieves `low`, which covers `[0, B]` with `B = low.len() - 1`,
/// and returns every wheel prime up to `B`.
///
/// Every multiple of a found prime from its square through `B` is flagged in
/// `low`, so afterwards `low[i]` is exact for every wheel index `i <= B`.
#[tracing::instrument(
    skip_all,
    name = "era_sieve::bootstrap",
    level = "trace",
    fields(profiling_2)
)]
pub fn bootstrap(low: &mut [bool]) -> BasePrimes {
    let Some(bound) = low.len().checked_sub(1) else {
        return BasePrimes::default();
    };
    let mut primes = Vec::with_capacity(prime_estimate(bound));
    for i in Wheel::new(1, bound + 1) {
        if low[i] {
            continue;
        }
        primes.push(i);
        // i <= B = ⌊√N⌋, so i * i cannot overflow
        low.iter_mut().skip(i * i).step_by(i).for_each(|flag| *flag = true);
    }
    tracing::debug!("bootstrap found {} base primes up to {bound}", primes.len());
    BasePrimes(primes)
}
