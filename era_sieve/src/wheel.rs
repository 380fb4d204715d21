use std::iter::FusedIterator;

/// Gaps between consecutive integers coprime to 30, starting from 1.
pub const WHEEL: [usize; 8] = [6, 4, 2, 4, 2, 4, 6, 2];

/// Residues mod 30 of the integers coprime to 30.
pub const RESIDUES: [usize; 8] = [1, 7, 11, 13, 17, 19, 23, 29];

/// Length of one wheel revolution.
pub const MODULUS: usize = 30;

/// For every `r = start % 30`, the residue of the wheel value preceding the
/// first one `>= start` together with the wheel index that steps away from it.
/// Residues `0` and `1` wrap around to `29` of the previous revolution.
const ANCHORS: [(usize, usize); MODULUS] = build_anchors();

const fn build_anchors() -> [(usize, usize); MODULUS] {
    let mut table = [(RESIDUES[7], 7); MODULUS];
    let mut r = 0;
    while r < MODULUS {
        let mut k = 0;
        while k < RESIDUES.len() && RESIDUES[k] < r {
            k += 1;
        }
        if k > 0 {
            table[r] = (RESIDUES[k - 1], k - 1);
        }
        r += 1;
    }
    table
}

/// Returns true if `n` is coprime to 30.
#[inline]
pub fn on_wheel(n: usize) -> bool {
    RESIDUES.contains(&(n % MODULUS))
}

/// Walks the integers coprime to 30 in `[start, max)`.
///
/// The sequence never contains 1, so the first value is at least 7. A freshly
/// built wheel sits *before* its first value: call [`Wheel::advance`] (or use
/// it as an [`Iterator`]) to move onto it.
///
/// ```
/// use era_sieve::Wheel;
///
/// assert_eq!(Wheel::new(0, 30).collect::<Vec<_>>(), [7, 11, 13, 17, 19, 23, 29]);
/// assert_eq!(Wheel::new(8, 11).next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Wheel {
    alive: bool,
    max: usize,
    curr: usize,
    idx: usize,
}

impl Wheel {
    pub fn new(start: usize, max: usize) -> Self {
        let (curr, idx) = if start <= 7 {
            (1, 0)
        } else {
            let r = start % MODULUS;
            let (residue, idx) = ANCHORS[r];
            let base = start - r;
            if residue < r {
                (base + residue, idx)
            } else {
                // wrapped: `start` is 30k or 30k + 1 with k >= 1
                (base + residue - MODULUS, idx)
            }
        };
        Self {
            alive: true,
            max,
            curr,
            idx,
        }
    }

    /// Moves to the next value, returning whether one exists.
    ///
    /// Once this returns `false` the wheel is dead for good.
    pub fn advance(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        match self.curr.checked_add(WHEEL[self.idx]) {
            Some(next) if next < self.max => {
                self.curr = next;
                self.idx = (self.idx + 1) % WHEEL.len();
            }
            _ => self.alive = false,
        }
        self.alive
    }

    /// The value reached by the last successful [`advance`](Self::advance),
    /// `None` once the wheel is exhausted.
    pub fn current(&self) -> Option<usize> {
        self.alive.then_some(self.curr)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Iterator for Wheel {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.advance() {
            Some(self.curr)
        } else {
            None
        }
    }
}

impl FusedIterator for Wheel {}
