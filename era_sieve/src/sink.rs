use itertools::Itertools;
use std::io::{self, Write};

/// Receives the ordered primes of a finished sieve.
pub trait PrimeSink {
    fn accept(&mut self, primes: &mut dyn Iterator<Item = usize>) -> io::Result<()>;
}

/// Keeps the primes in memory.
impl PrimeSink for Vec<usize> {
    fn accept(&mut self, primes: &mut dyn Iterator<Item = usize>) -> io::Result<()> {
        self.extend(primes);
        Ok(())
    }
}

/// Writes the primes as a bracketed list, `[2, 3, 5, 7, ...]`, with no
/// trailing newline.
pub struct ListWriter<W: Write> {
    inner: W,
}

impl<W: Write> ListWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> PrimeSink for ListWriter<W> {
    fn accept(&mut self, primes: &mut dyn Iterator<Item = usize>) -> io::Result<()> {
        write!(self.inner, "[{}]", primes.format(", "))?;
        self.inner.flush()
    }
}
