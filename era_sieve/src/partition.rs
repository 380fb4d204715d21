use std::{num::NonZeroUsize, ops::Range};

/// Splits `range` into `parts` contiguous blocks of `len / parts` elements.
/// The last block absorbs the remainder, so the blocks cover `range` exactly.
/// Blocks may be empty when `parts` exceeds the length of `range`.
pub fn blocks(
    range: Range<usize>,
    parts: NonZeroUsize,
) -> impl ExactSizeIterator<Item = Range<usize>> {
    let parts = parts.get();
    let len = range.end.saturating_sub(range.start);
    let size = len / parts;
    let start = range.start;
    let end = start + len;
    (0..parts).map(move |i| {
        let lo = start + size * i;
        let hi = if i == parts - 1 { end } else { lo + size };
        lo..hi
    })
}
