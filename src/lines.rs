use memchr::Memchr;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

/// Splits a byte range of a buffer into record spans at `\n`.
///
/// Yields absolute `start..end` offsets into the buffer, excluding the
/// delimiter. Empty lines are skipped and a trailing segment without a
/// final `\n` is still yielded. Nothing is copied or allocated.
pub struct LineScanner<'a> {
    newlines: Memchr<'a>,
    /// Offset of the scanned range inside the buffer.
    base: usize,
    /// Start of the next record.
    pos: usize,
    end: usize,
}

impl<'a> LineScanner<'a> {
    /// # Panics
    /// If `range` is out of bounds of `buf`.
    pub fn new(buf: &'a [u8], range: Range<usize>) -> Self {
        let haystack = &buf[range.clone()];
        Self {
            newlines: memchr::memchr_iter(b'\n', haystack),
            base: range.start,
            pos: range.start,
            end: range.end,
        }
    }

    pub fn whole(buf: &'a [u8]) -> Self {
        Self::new(buf, 0..buf.len())
    }
}

impl fmt::Debug for LineScanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineScanner")
            .field("pos", &self.pos)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl Iterator for LineScanner<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        for newline in self.newlines.by_ref() {
            let newline = self.base + newline;
            let start = std::mem::replace(&mut self.pos, newline + 1);
            if newline > start {
                return Some(start..newline);
            }
        }

        // partial final line
        if self.pos < self.end {
            let start = std::mem::replace(&mut self.pos, self.end);
            return Some(start..self.end);
        }
        None
    }
}

impl FusedIterator for LineScanner<'_> {}
