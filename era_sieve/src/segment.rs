use crate::partition::blocks;
use std::num::NonZeroUsize;

/// Number of flags a marking worker touches before moving to the next tile.
pub const DEFAULT_CHUNK_SIZE: usize = 1 << 17;

/// First odd multiple of the odd prime `p` that is `>= from`.
#[inline]
fn first_odd_multiple(p: usize, from: usize) -> usize {
    let m = from.div_ceil(p) * p;
    if m % 2 == 0 { m + p } else { m }
}

/// Flags the odd multiples of every prime in `primes` inside `block`, whose
/// first element is the flag for the integer `offset`.
///
/// The block is tiled into `chunk_size` pieces and every tile restarts from the
/// full prime list, so no state carries over between tiles. Marking for `p`
/// starts at `p²`; smaller multiples have a smaller factor.
pub fn mark_block(block: &mut [bool], offset: usize, primes: &[usize], chunk_size: usize) {
    for (k, tile) in block.chunks_mut(chunk_size).enumerate() {
        let lo = offset + k * chunk_size;
        let hi = lo + tile.len();
        for &p in primes {
            let square = p * p;
            if square >= hi {
                break;
            }
            let step = 2 * p;
            let mut j = first_odd_multiple(p, lo.max(square));
            while j < hi {
                tile[j - lo] = true;
                j += step;
            }
        }
    }
}

/// Marks composites in `sieve[from..]` using `threads` scoped workers.
///
/// The tail of the array is carved into disjoint `&mut` blocks before any
/// worker starts; each worker only ever sees its own block. Empty blocks get no
/// worker. Returns once every worker has joined.
#[tracing::instrument(
    skip_all,
    name = "era_sieve::mark_segments",
    level = "trace",
    fields(profiling_2)
)]
pub fn mark_segments(
    sieve: &mut [bool],
    from: usize,
    primes: &[usize],
    threads: NonZeroUsize,
    chunk_size: NonZeroUsize,
) {
    let len = sieve.len();
    let from = from.min(len);
    let chunk_size = chunk_size.get();
    std::thread::scope(|s| {
        let mut rest = &mut sieve[from..];
        for (worker, range) in blocks(from..len, threads).enumerate() {
            let (block, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            rest = tail;
            if block.is_empty() {
                continue;
            }
            s.spawn(move || {
                tracing::trace!("worker {worker} marking [{}, {})", range.start, range.end);
                mark_block(block, range.start, primes, chunk_size);
            });
        }
    });
}
