//! [`Chunk`], [`ChunkBy`], and related items.
use core::mem;

use crate::Seq;

/// Groups consecutive elements into `Vec`s of a fixed size.
///
/// The last chunk holds whatever is left and may be shorter. A size of zero yields nothing.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct Chunk<S> {
    seq: S,
    size: usize,
}

impl<S> Chunk<S>
where
    S: Seq,
{
    /// Creates chunking `seq` into `Vec`s of `size`.
    pub fn new(seq: S, size: usize) -> Self {
        Self { seq, size }
    }
}

impl<S> Seq for Chunk<S>
where
    S: Seq,
{
    type Item = Vec<S::Item>;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        if self.size == 0 {
            return true;
        }
        let mut chunk = Vec::with_capacity(self.size);
        let exhausted = self.seq.drive(|item| {
            chunk.push(item);
            if chunk.len() < self.size {
                return true;
            }
            let full = mem::replace(&mut chunk, Vec::with_capacity(self.size));
            (sink)(full)
        });
        if !exhausted {
            return false;
        }
        chunk.is_empty() || (sink)(chunk)
    }
}

/// Groups consecutive elements into `Vec`s, starting a new one at every element matching `func`.
///
/// A matching element begins the next chunk, unless the current chunk is still empty.
#[must_use = "sequences do nothing unless driven"]
#[derive(Clone, Debug)]
pub struct ChunkBy<S, Func> {
    seq: S,
    func: Func,
}

impl<S, Func> ChunkBy<S, Func>
where
    S: Seq,
    Func: Fn(&S::Item) -> bool,
{
    /// Creates chunking `seq` at each match of `func`.
    pub fn new(seq: S, func: Func) -> Self {
        Self { seq, func }
    }
}

impl<S, Func> Seq for ChunkBy<S, Func>
where
    S: Seq,
    Func: Fn(&S::Item) -> bool,
{
    type Item = Vec<S::Item>;

    fn drive<F>(&self, mut sink: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        let mut chunk = Vec::new();
        let exhausted = self.seq.drive(|item| {
            let mut more = true;
            if !chunk.is_empty() && (self.func)(&item) {
                more = (sink)(mem::take(&mut chunk));
            }
            chunk.push(item);
            more
        });
        if !exhausted {
            return false;
        }
        chunk.is_empty() || (sink)(chunk)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Seq, chunk, chunk2, chunk_by, chunk_by2, source_iter};

    #[test]
    fn chunk_leaves_short_tail() {
        let chunks = chunk(source_iter(1..=7), 3);
        insta::assert_snapshot!(format!("{:?}", chunks.collect::<Vec<_>>()), @"[[1, 2, 3], [4, 5, 6], [7]]");
    }

    #[test]
    fn chunk_exact_multiple_has_no_empty_tail() {
        let chunks = chunk(source_iter(1..=4), 2);
        assert_eq!(vec![vec![1, 2], vec![3, 4]], chunks.collect::<Vec<_>>());
    }

    #[test]
    fn chunk_size_zero_is_empty() {
        assert_eq!(0, chunk(source_iter(1..=4), 0).count());
        assert_eq!(0, chunk(source_iter(0..0), 3).count());
    }

    #[test]
    fn chunk_forwards_early_stop() {
        let chunks = source_iter(0..).chunk(2);
        let mut seen = Vec::new();
        assert!(!chunks.drive(|c| {
            seen.push(c);
            seen.len() < 2
        }));
        assert_eq!(vec![vec![0, 1], vec![2, 3]], seen);
    }

    #[test]
    fn chunk_by_starts_at_match() {
        let lines = source_iter(["# a", "x", "y", "# b", "z"]);
        let sections = chunk_by(lines, |l| l.starts_with('#'));
        insta::assert_snapshot!(
            format!("{:?}", sections.collect::<Vec<_>>()),
            @r##"[["# a", "x", "y"], ["# b", "z"]]"##
        );
    }

    #[test]
    fn chunk2_unzips() {
        let chunks = chunk2(source_iter(vec![(1, 'a'), (2, 'b'), (3, 'c')]), 2);
        assert_eq!(
            vec![(vec![1, 2], vec!['a', 'b']), (vec![3], vec!['c'])],
            chunks.collect::<Vec<_>>()
        );
    }

    #[test]
    fn chunk_by2_on_key() {
        let chunks = chunk_by2(source_iter(vec![(0, 'a'), (1, 'b'), (0, 'c')]), |k, _| *k == 0);
        assert_eq!(
            vec![(vec![0, 1], vec!['a', 'b']), (vec![0], vec!['c'])],
            chunks.collect::<Vec<_>>()
        );
    }
}
