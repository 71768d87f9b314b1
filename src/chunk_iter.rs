use std::cmp::min;
use std::ops::Range;

/// Iterates the file in `n` chunks, but with respect to line endings.
/// This helps us to distribute the workload exactly between multiple
/// threads.
///
/// Every chunk ends right after a `\n`, except the last one if the input
/// has no trailing newline. Fewer than `n` chunks come out when lines are
/// longer than `len / n`.
#[derive(Debug)]
pub struct ChunkIter<'a> {
    bytes_per_chunk: usize,
    file_bytes: &'a [u8],
    /// This variable is mutated and keeps track of the progress.
    consumed_bytes: usize,
}

impl<'a> ChunkIter<'a> {
    pub fn new(file_bytes: &'a [u8], chunk_count: usize) -> Self {
        let bytes_per_chunk = file_bytes.len().div_ceil(chunk_count.max(1)).max(1);
        Self {
            file_bytes,
            bytes_per_chunk,
            consumed_bytes: 0,
        }
    }
}

impl Iterator for ChunkIter<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes_left = self.file_bytes.len() - self.consumed_bytes;
        if bytes_left == 0 {
            return None;
        }

        let i_begin = self.consumed_bytes;
        // -1: because the given byte might already be a newline
        let i_end_min = i_begin + min(self.bytes_per_chunk, bytes_left) - 1;

        let search_slice = &self.file_bytes[i_end_min..];
        // include final newline here; take the rest if there is none
        let i_end = memchr::memchr(b'\n', search_slice)
            .map_or(self.file_bytes.len(), |i| i_end_min + i + 1);

        self.consumed_bytes = i_end;

        Some(i_begin..i_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(data: &str, chunk_count: usize) -> Vec<&str> {
        ChunkIter::new(data.as_bytes(), chunk_count)
            .map(|range| &data[range])
            .collect()
    }

    #[test]
    fn test_chunk_iter_bytes_per_chunk() {
        let data = "a".repeat(15);
        let iter = ChunkIter::new(data.as_bytes(), 2);

        assert_eq!(iter.bytes_per_chunk, 8, "must be rounded up");
    }

    #[test]
    fn test_chunk_iter_chunk_size_aligns_with_newlines() {
        let data = "aaa\nbbb\nccc\nddd\neee\n";
        assert_eq!(data.len(), 20);
        assert_eq!(ChunkIter::new(data.as_bytes(), 5).bytes_per_chunk, 4);

        assert_eq!(
            chunks(data, 5),
            ["aaa\n", "bbb\n", "ccc\n", "ddd\n", "eee\n"]
        );
    }

    #[test]
    fn test_chunk_iter_evenly_splittable() {
        let data = "aaa\nbbbb\nccccc\ndddddd\neeeeeee\n";
        assert_eq!(data.len(), 30);

        assert_eq!(
            chunks(data, 3),
            ["aaa\nbbbb\nccccc\n", "dddddd\neeeeeee\n"]
        );
    }

    #[test]
    fn test_chunk_iter_not_evenly_splittable() {
        let data = "aa\nbb\ncc\ndd\nee\nff\ngg\n".repeat(2);
        assert_eq!(data.len(), 42);
        assert_eq!(ChunkIter::new(data.as_bytes(), 4).bytes_per_chunk, 11);

        assert_eq!(
            chunks(&data, 4),
            [
                "aa\nbb\ncc\ndd\n",
                "ee\nff\ngg\naa\n",
                "bb\ncc\ndd\nee\n",
                "ff\ngg\n"
            ]
        );
    }

    #[test]
    fn test_chunk_iter_missing_trailing_newline() {
        assert_eq!(chunks("aa\nbb\ncc", 3), ["aa\n", "bb\n", "cc"]);
        assert_eq!(chunks("no newline at all", 4), ["no newline at all"]);
    }

    #[test]
    fn test_chunk_iter_edge_counts() {
        assert!(chunks("", 4).is_empty());
        assert_eq!(chunks("a\nb\n", 0), ["a\nb\n"]);
        assert_eq!(chunks("a\nb\n", 100), ["a\n", "b\n"]);
    }

    #[test]
    fn test_chunks_cover_input_without_gaps() {
        let data = "x;1.0\nyy;2.5\n\nzzz;-3.0\nlast;4.0";
        for n in 1..=8 {
            let ranges: Vec<_> = ChunkIter::new(data.as_bytes(), n).collect();
            assert_eq!(ranges.first().map(|r| r.start), Some(0));
            assert_eq!(ranges.last().map(|r| r.end), Some(data.len()));
            for pair in ranges.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
                assert_eq!(data.as_bytes()[pair[0].end - 1], b'\n');
            }
        }
    }
}
